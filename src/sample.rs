//! Struct `Sample` represents a single labeled training example.
//! A training set is a slice `&[Sample<V, L>]`.
use serde::{Serialize, Deserialize};


/// A pair of an instance `value` and its `label`.
/// Two samples are equal iff both components are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sample<V, L> {
    /// The instance.
    pub value: V,
    /// The label attached to `value`.
    pub label: L,
}


impl<V, L> Sample<V, L> {
    /// Construct a new `Sample` from the given components.
    #[inline]
    pub fn new(value: V, label: L) -> Self {
        Self { value, label }
    }


    /// Returns the pair `(value, label)`.
    #[inline]
    pub fn into_pair(self) -> (V, L) {
        (self.value, self.label)
    }
}


impl<V, L> From<(V, L)> for Sample<V, L> {
    #[inline]
    fn from((value, label): (V, L)) -> Self {
        Self { value, label }
    }
}
