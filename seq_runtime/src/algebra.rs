//! The builder algebra over [`Component`].
//!
//! Every function is total. Generated builder modules wrap these with
//! concrete types; [`crate::SequenceBuilder`] calls them from ordinary
//! control flow.

use crate::component::Component;
use crate::kind::{AssemblyPolicy, SequenceKind, SequenceValue};

/// Combines the partial results of a statement block, in argument order.
pub fn build_block<E, I>(components: I) -> Component<E>
where
    I: IntoIterator<Item = Component<E>>,
{
    components.into_iter().flatten().collect()
}

/// Lifts a single statement expression into a partial result.
pub fn build_expression<E>(expression: E) -> Component<E> {
    Component::single(expression)
}

/// Lifts an alternate source type through its conversion into the
/// expression type.
pub fn build_coerced_expression<E, C>(expression: C) -> Component<E>
where
    C: Into<E>,
{
    build_expression(expression.into())
}

/// Splices the elements of an already-built sequence, in order.
pub fn build_splice<K: SequenceKind>(result: K::FinalResult) -> Component<K::Expression> {
    Component::from(result.into_elements())
}

/// `if` without `else`: nothing when the guard was false.
pub fn build_optional<E>(component: Option<Component<E>>) -> Component<E> {
    component.unwrap_or_default()
}

/// First arm of an `if`/`else` or `match`.
pub fn build_either_first<E>(component: Component<E>) -> Component<E> {
    component
}

/// Second arm of an `if`/`else` or `match`.
pub fn build_either_second<E>(component: Component<E>) -> Component<E> {
    component
}

/// Joins the partial results of every loop iteration, in iteration order.
pub fn build_array<E, I>(components: I) -> Component<E>
where
    I: IntoIterator<Item = Component<E>>,
{
    build_block(components)
}

/// Partial result of an availability-guarded block. Currently a passthrough.
pub fn build_limited_availability<E>(component: Component<E>) -> Component<E> {
    component
}

/// Turns the outermost partial result into the sequence value, applying the
/// kind's assembly policy.
pub fn build_final_result<K: SequenceKind>(component: Component<K::Expression>) -> K::FinalResult {
    let expressions = component.into_vec();
    match K::POLICY {
        AssemblyPolicy::Atomic | AssemblyPolicy::Verbatim => {
            <K::FinalResult as SequenceValue>::from_elements(expressions)
        }
        AssemblyPolicy::TrailingSeparator => {
            let Some(last_index) = expressions.len().checked_sub(1) else {
                return <K::FinalResult as SequenceValue>::from_elements(expressions);
            };
            let separated = expressions
                .into_iter()
                .enumerate()
                .map(|(index, expression)| {
                    if index < last_index {
                        K::ensure_trailing_separator(expression)
                    } else {
                        expression
                    }
                })
                .collect();
            <K::FinalResult as SequenceValue>::from_elements(separated)
        }
    }
}
