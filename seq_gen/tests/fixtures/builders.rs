// seq-gen output for fixtures/kinds.yaml; header lines are not compared.

use crate::syntax::*;

/// Result builder for [`ArrayElementList`].
///
/// Elements of an array literal, separated by commas.
pub mod array_element_list_builder {
    #[allow(unused_imports)]
    use super::*;

    /// The type of individual statement expressions in a builder block.
    pub type Expression = ArrayElement;

    /// The type of a partial result, carried through every build function.
    pub type Component = seq_runtime::Component<Expression>;

    /// The completed sequence value produced from the outermost block.
    pub type FinalResult = ArrayElementList;

    /// Scoped builder object for writing blocks with plain control flow.
    pub type Builder = seq_runtime::SequenceBuilder<Kind>;

    /// Binds the builder algebra to [`ArrayElementList`].
    pub enum Kind {}

    impl seq_runtime::SequenceKind for Kind {
        type Expression = Expression;
        type FinalResult = FinalResult;
        const POLICY: seq_runtime::AssemblyPolicy = seq_runtime::AssemblyPolicy::TrailingSeparator;

        fn ensure_trailing_separator(expression: Expression) -> Expression {
            seq_runtime::TrailingSeparator::ensuring_trailing_separator(expression)
        }
    }

    /// Combines the partial results of a statement block, in order.
    pub fn build_block<I: IntoIterator<Item = Component>>(components: I) -> Component {
        seq_runtime::algebra::build_block(components)
    }

    /// Lifts a statement expression into a partial result.
    pub fn build_expression(expression: Expression) -> Component {
        seq_runtime::algebra::build_expression(expression)
    }

    /// Splices the elements of an existing `ArrayElementList`, in order.
    pub fn build_splice(expression: FinalResult) -> Component {
        seq_runtime::algebra::build_splice::<Kind>(expression)
    }

    /// Enables `if` statements that have no `else`.
    pub fn build_optional(component: Option<Component>) -> Component {
        seq_runtime::algebra::build_optional(component)
    }

    /// With `build_either_second`, folds the arms of an `if`/`else` or `match`.
    pub fn build_either_first(component: Component) -> Component {
        seq_runtime::algebra::build_either_first(component)
    }

    /// With `build_either_first`, folds the arms of an `if`/`else` or `match`.
    pub fn build_either_second(component: Component) -> Component {
        seq_runtime::algebra::build_either_second(component)
    }

    /// Combines the results of all loop iterations, in order.
    pub fn build_array<I: IntoIterator<Item = Component>>(components: I) -> Component {
        seq_runtime::algebra::build_array(components)
    }

    /// Partial result of an availability-guarded block.
    pub fn build_limited_availability(component: Component) -> Component {
        seq_runtime::algebra::build_limited_availability(component)
    }

    /// Produces the final `ArrayElementList` from the outermost block;
    /// every element but the last gets a trailing separator.
    pub fn build_final_result(component: Component) -> FinalResult {
        seq_runtime::algebra::build_final_result::<Kind>(component)
    }
}

impl ArrayElementList {
    /// Builds a `ArrayElementList` by evaluating `items` as one builder block.
    pub fn from_builder(items: impl FnOnce(&mut array_element_list_builder::Builder)) -> Self {
        array_element_list_builder::Builder::evaluate(items)
    }
}

/// Result builder for [`TokenList`].
pub mod token_list_builder {
    #[allow(unused_imports)]
    use super::*;

    /// The type of individual statement expressions in a builder block.
    pub type Expression = Token;

    /// The type of a partial result, carried through every build function.
    pub type Component = seq_runtime::Component<Expression>;

    /// The completed sequence value produced from the outermost block.
    pub type FinalResult = TokenList;

    /// Scoped builder object for writing blocks with plain control flow.
    pub type Builder = seq_runtime::SequenceBuilder<Kind>;

    /// Binds the builder algebra to [`TokenList`].
    pub enum Kind {}

    impl seq_runtime::SequenceKind for Kind {
        type Expression = Expression;
        type FinalResult = FinalResult;
        const POLICY: seq_runtime::AssemblyPolicy = seq_runtime::AssemblyPolicy::Atomic;
    }

    /// Combines the partial results of a statement block, in order.
    pub fn build_block<I: IntoIterator<Item = Component>>(components: I) -> Component {
        seq_runtime::algebra::build_block(components)
    }

    /// Lifts a statement expression into a partial result.
    pub fn build_expression(expression: Expression) -> Component {
        seq_runtime::algebra::build_expression(expression)
    }

    /// Splices the elements of an existing `TokenList`, in order.
    pub fn build_splice(expression: FinalResult) -> Component {
        seq_runtime::algebra::build_splice::<Kind>(expression)
    }

    /// Enables `if` statements that have no `else`.
    pub fn build_optional(component: Option<Component>) -> Component {
        seq_runtime::algebra::build_optional(component)
    }

    /// With `build_either_second`, folds the arms of an `if`/`else` or `match`.
    pub fn build_either_first(component: Component) -> Component {
        seq_runtime::algebra::build_either_first(component)
    }

    /// With `build_either_first`, folds the arms of an `if`/`else` or `match`.
    pub fn build_either_second(component: Component) -> Component {
        seq_runtime::algebra::build_either_second(component)
    }

    /// Combines the results of all loop iterations, in order.
    pub fn build_array<I: IntoIterator<Item = Component>>(components: I) -> Component {
        seq_runtime::algebra::build_array(components)
    }

    /// Partial result of an availability-guarded block.
    pub fn build_limited_availability(component: Component) -> Component {
        seq_runtime::algebra::build_limited_availability(component)
    }

    /// Produces the final `TokenList` from the outermost block;
    /// elements are taken as they are.
    pub fn build_final_result(component: Component) -> FinalResult {
        seq_runtime::algebra::build_final_result::<Kind>(component)
    }
}

impl TokenList {
    /// Builds a `TokenList` by evaluating `items` as one builder block.
    pub fn from_builder(items: impl FnOnce(&mut token_list_builder::Builder)) -> Self {
        token_list_builder::Builder::evaluate(items)
    }
}

/// Result builder for [`CodeBlockItemList`].
pub mod code_block_item_list_builder {
    #[allow(unused_imports)]
    use super::*;

    /// The type of individual statement expressions in a builder block.
    pub type Expression = <CodeBlockItemList as seq_runtime::SequenceValue>::Element;

    /// The type of a partial result, carried through every build function.
    pub type Component = seq_runtime::Component<Expression>;

    /// The completed sequence value produced from the outermost block.
    pub type FinalResult = CodeBlockItemList;

    /// Scoped builder object for writing blocks with plain control flow.
    pub type Builder = seq_runtime::SequenceBuilder<Kind>;

    /// Binds the builder algebra to [`CodeBlockItemList`].
    pub enum Kind {}

    impl seq_runtime::SequenceKind for Kind {
        type Expression = Expression;
        type FinalResult = FinalResult;
        const POLICY: seq_runtime::AssemblyPolicy = seq_runtime::AssemblyPolicy::Verbatim;
    }

    /// Combines the partial results of a statement block, in order.
    pub fn build_block<I: IntoIterator<Item = Component>>(components: I) -> Component {
        seq_runtime::algebra::build_block(components)
    }

    /// Lifts a statement expression into a partial result.
    pub fn build_expression(expression: Expression) -> Component {
        seq_runtime::algebra::build_expression(expression)
    }

    /// Lifts a `Stmt` through its conversion into `Expression`.
    pub fn build_expression_from_stmt(expression: Stmt) -> Component {
        build_expression(expression.into())
    }

    /// Lifts a `Decl` through its conversion into `Expression`.
    pub fn build_expression_from_decl(expression: Decl) -> Component {
        build_expression(expression.into())
    }

    /// Splices the elements of an existing `CodeBlockItemList`, in order.
    pub fn build_splice(expression: FinalResult) -> Component {
        seq_runtime::algebra::build_splice::<Kind>(expression)
    }

    /// Enables `if` statements that have no `else`.
    pub fn build_optional(component: Option<Component>) -> Component {
        seq_runtime::algebra::build_optional(component)
    }

    /// With `build_either_second`, folds the arms of an `if`/`else` or `match`.
    pub fn build_either_first(component: Component) -> Component {
        seq_runtime::algebra::build_either_first(component)
    }

    /// With `build_either_first`, folds the arms of an `if`/`else` or `match`.
    pub fn build_either_second(component: Component) -> Component {
        seq_runtime::algebra::build_either_second(component)
    }

    /// Combines the results of all loop iterations, in order.
    pub fn build_array<I: IntoIterator<Item = Component>>(components: I) -> Component {
        seq_runtime::algebra::build_array(components)
    }

    /// Partial result of an availability-guarded block.
    pub fn build_limited_availability(component: Component) -> Component {
        seq_runtime::algebra::build_limited_availability(component)
    }

    /// Produces the final `CodeBlockItemList` from the outermost block;
    /// elements are taken as they are.
    pub fn build_final_result(component: Component) -> FinalResult {
        seq_runtime::algebra::build_final_result::<Kind>(component)
    }
}

impl CodeBlockItemList {
    /// Builds a `CodeBlockItemList` by evaluating `items` as one builder block.
    pub fn from_builder(items: impl FnOnce(&mut code_block_item_list_builder::Builder)) -> Self {
        code_block_item_list_builder::Builder::evaluate(items)
    }
}
