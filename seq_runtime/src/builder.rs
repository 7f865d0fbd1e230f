/* Scoped builder object over the algebra */

use std::fmt;

use crate::algebra;
use crate::component::Component;
use crate::kind::SequenceKind;

/// Describes a sequence with ordinary control flow.
///
/// Each method maps onto one algebra operation, so a block written with
/// `if`, `match` and `for` produces the same value the generated `build_*`
/// functions would. The builder lives for one evaluation; [`build`] consumes
/// it.
///
/// [`build`]: SequenceBuilder::build
pub struct SequenceBuilder<K: SequenceKind> {
    component: Component<K::Expression>,
}

impl<K: SequenceKind> SequenceBuilder<K> {
    pub fn new() -> Self {
        Self {
            component: Component::empty(),
        }
    }

    /// Runs `block` against a fresh builder and assembles the result.
    pub fn evaluate(block: impl FnOnce(&mut Self)) -> K::FinalResult {
        let mut builder = Self::new();
        block(&mut builder);
        builder.build()
    }

    /* Evaluates a nested block into its own partial result */
    fn scoped(block: impl FnOnce(&mut Self)) -> Component<K::Expression> {
        let mut inner = Self::new();
        block(&mut inner);
        inner.component
    }

    fn push_component(&mut self, component: Component<K::Expression>) -> &mut Self {
        self.component.append(component);
        self
    }

    /// Adds one expression, or any value convertible into one.
    pub fn add(&mut self, expression: impl Into<K::Expression>) -> &mut Self {
        self.push_component(algebra::build_coerced_expression(expression))
    }

    /// Adds the expression when present; `None` contributes nothing.
    pub fn add_if_present<T>(&mut self, expression: Option<T>) -> &mut Self
    where
        T: Into<K::Expression>,
    {
        let branch: Option<Component<K::Expression>> =
            expression.map(algebra::build_coerced_expression);
        self.push_component(algebra::build_optional(branch))
    }

    /// Adds every expression of `expressions`, in iteration order.
    pub fn add_all<I>(&mut self, expressions: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<K::Expression>,
    {
        let iterations: Vec<Component<K::Expression>> = expressions
            .into_iter()
            .map(algebra::build_coerced_expression)
            .collect();
        self.push_component(algebra::build_array(iterations))
    }

    /// Adds the elements of an already-built sequence value.
    pub fn splice(&mut self, result: K::FinalResult) -> &mut Self {
        self.push_component(algebra::build_splice::<K>(result))
    }

    /// Adds a partial result produced elsewhere.
    pub fn add_component(&mut self, component: Component<K::Expression>) -> &mut Self {
        self.push_component(component)
    }

    /// Single-armed conditional.
    pub fn when(&mut self, condition: bool, block: impl FnOnce(&mut Self)) -> &mut Self {
        let branch = if condition {
            Some(Self::scoped(block))
        } else {
            None
        };
        self.push_component(algebra::build_optional(branch))
    }

    /// Two-armed conditional. Only the arm that is taken runs.
    pub fn either(
        &mut self,
        condition: bool,
        first: impl FnOnce(&mut Self),
        second: impl FnOnce(&mut Self),
    ) -> &mut Self {
        let component = if condition {
            algebra::build_either_first(Self::scoped(first))
        } else {
            algebra::build_either_second(Self::scoped(second))
        };
        self.push_component(component)
    }

    /// Runs `body` once per item and joins the iterations in order.
    pub fn for_each<I, F>(&mut self, items: I, mut body: F) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item),
    {
        let iterations: Vec<_> = items
            .into_iter()
            .map(|item| Self::scoped(|inner| body(inner, item)))
            .collect();
        self.push_component(algebra::build_array(iterations))
    }

    /// Availability-guarded block without an alternative.
    pub fn available(&mut self, condition: bool, block: impl FnOnce(&mut Self)) -> &mut Self {
        let branch = if condition {
            Some(algebra::build_limited_availability(Self::scoped(block)))
        } else {
            None
        };
        self.push_component(algebra::build_optional(branch))
    }

    /// The partial result accumulated so far.
    pub fn component(&self) -> &Component<K::Expression> {
        &self.component
    }

    pub fn into_component(self) -> Component<K::Expression> {
        self.component
    }

    /// Assembles the final sequence value.
    pub fn build(self) -> K::FinalResult {
        algebra::build_final_result::<K>(self.component)
    }
}

impl<K: SequenceKind> Default for SequenceBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for SequenceBuilder<K>
where
    K: SequenceKind,
    K::Expression: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceBuilder")
            .field("component", &self.component)
            .finish()
    }
}
