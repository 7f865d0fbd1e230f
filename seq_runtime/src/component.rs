/* Partial results of a builder block */

use std::fmt;

/// An ordered run of expressions that has not been finalized yet.
///
/// Concatenation is associative and [`Component::empty`] is its identity,
/// so nested blocks, branches and loops can be flattened in any grouping
/// without changing the resulting order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Component<E> {
    expressions: Vec<E>,
}

impl<E> Component<E> {
    pub fn empty() -> Self {
        Self {
            expressions: Vec::new(),
        }
    }

    pub fn single(expression: E) -> Self {
        Self {
            expressions: vec![expression],
        }
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.expressions.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.expressions
    }

    pub fn push(&mut self, expression: E) {
        self.expressions.push(expression);
    }

    /// Moves every expression of `other` to the end of `self`.
    pub fn append(&mut self, other: Component<E>) {
        self.expressions.extend(other.expressions);
    }

    pub fn concat(mut self, other: Component<E>) -> Self {
        self.append(other);
        self
    }

    pub fn into_vec(self) -> Vec<E> {
        self.expressions
    }
}

impl<E> Default for Component<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E: fmt::Debug> fmt::Debug for Component<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.expressions.iter()).finish()
    }
}

impl<E> From<Vec<E>> for Component<E> {
    fn from(expressions: Vec<E>) -> Self {
        Self { expressions }
    }
}

impl<E> FromIterator<E> for Component<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            expressions: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for Component<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.expressions.extend(iter);
    }
}

impl<E> IntoIterator for Component<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.expressions.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Component<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.expressions.iter()
    }
}
