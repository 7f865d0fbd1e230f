/* Per-kind configuration of the builder algebra */

/// A completed, immutable sequence value that can be built from, and taken
/// apart into, its ordered elements.
pub trait SequenceValue: Sized {
    type Element;

    fn from_elements(elements: Vec<Self::Element>) -> Self;

    fn into_elements(self) -> Vec<Self::Element>;
}

impl<T> SequenceValue for Vec<T> {
    type Element = T;

    fn from_elements(elements: Vec<T>) -> Self {
        elements
    }

    fn into_elements(self) -> Vec<T> {
        self
    }
}

/// Elements that can carry a trailing separator marker (a comma in most
/// grammars).
pub trait TrailingSeparator {
    /// Returns the element with its trailing separator attached. Elements
    /// that already carry one come back unchanged.
    fn ensuring_trailing_separator(self) -> Self;

    fn has_trailing_separator(&self) -> bool;
}

/// How the final component of a block becomes the sequence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssemblyPolicy {
    /// Token-like elements, taken as they are.
    Atomic,
    /// Every element but the last gets a trailing separator.
    TrailingSeparator,
    /// Elements are taken as they are.
    Verbatim,
}

impl AssemblyPolicy {
    /// Atomic elements never get separators, whatever the other flag says.
    pub fn from_traits(element_is_atomic: bool, requires_trailing_separator: bool) -> Self {
        if element_is_atomic {
            AssemblyPolicy::Atomic
        } else if requires_trailing_separator {
            AssemblyPolicy::TrailingSeparator
        } else {
            AssemblyPolicy::Verbatim
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssemblyPolicy::Atomic => "atomic",
            AssemblyPolicy::TrailingSeparator => "trailing-separator",
            AssemblyPolicy::Verbatim => "verbatim",
        }
    }
}

/// Binds the algebra to one collection kind.
///
/// Generated code implements this on an uninhabited marker type; the
/// provided items are only overridden by kinds whose policy needs them.
pub trait SequenceKind {
    /// The type of individual statement expressions in a builder block.
    type Expression;

    /// The completed sequence value.
    type FinalResult: SequenceValue<Element = Self::Expression>;

    const POLICY: AssemblyPolicy = AssemblyPolicy::Verbatim;

    /// Attaches the trailing separator to a non-final element. Only called
    /// under [`AssemblyPolicy::TrailingSeparator`].
    fn ensure_trailing_separator(expression: Self::Expression) -> Self::Expression {
        expression
    }
}
