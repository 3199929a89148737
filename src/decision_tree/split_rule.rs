//! This file defines split rules for decision tree.
use serde::{Serialize, Deserialize};


/// The output of [`Splitter::split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftRight {
    /// The feature value is at most the threshold.
    Left,
    /// The feature value exceeds the threshold.
    Right,
}


/// A pair of a feature and a threshold on its value.
/// An instance goes left iff its feature value is `<= threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Splitter<F, FV> {
    feature: F,
    threshold: FV,
}


impl<F, FV> Splitter<F, FV> {
    /// Construct a new splitting rule.
    #[inline]
    pub fn new(feature: F, threshold: FV) -> Self {
        Self { feature, threshold }
    }


    /// Returns the feature this rule inspects.
    #[inline]
    pub fn feature(&self) -> &F {
        &self.feature
    }


    /// Returns the threshold of this rule.
    #[inline]
    pub fn threshold(&self) -> &FV {
        &self.threshold
    }


    /// Defines the splitting.
    #[inline]
    pub fn split<V, G>(&self, value: &V, get_feature_value: G) -> LeftRight
        where G: Fn(&V, &F) -> FV,
              FV: Ord,
    {
        route(value, &self.feature, &self.threshold, get_feature_value)
    }
}


impl<F, FV> From<(F, FV)> for Splitter<F, FV> {
    #[inline]
    fn from((feature, threshold): (F, FV)) -> Self {
        Self { feature, threshold }
    }
}


#[inline]
pub(super) fn route<V, F, FV, G>(
    value: &V,
    feature: &F,
    threshold: &FV,
    get_feature_value: G,
) -> LeftRight
    where G: Fn(&V, &F) -> FV,
          FV: Ord,
{
    if get_feature_value(value, feature) <= *threshold {
        LeftRight::Left
    } else {
        LeftRight::Right
    }
}
