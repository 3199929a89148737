//! Impurity and splitting utilities used to grow a decision tree.
//!
//! The gain of a split is `gini(parent) - (gini(left) + gini(right))`.
//! Note that the children are **not** weighted by their sizes.
use crate::{ClassifierError, Histogram, Sample};
use super::split_rule::{route, LeftRight};

use std::hash::Hash;
use std::collections::HashSet;


/// Returns the number of distinct labels in `data`.
pub fn num_labels<V, L>(data: &[Sample<V, L>]) -> usize
    where L: Eq + Hash,
{
    data.iter()
        .map(|sample| &sample.label)
        .collect::<HashSet<_>>()
        .len()
}


/// Returns the plurality label of `data`.
///
/// # Errors
/// Returns [`ClassifierError::EmptyHistogram`] if `data` is empty.
pub fn most_popular_label<V, L>(data: &[Sample<V, L>])
    -> Result<L, ClassifierError>
    where L: Eq + Hash + Clone,
{
    data.iter()
        .map(|sample| &sample.label)
        .collect::<Histogram<&L>>()
        .plurality_winner()
        .map(|label| (*label).clone())
}


/// Returns the Gini impurity `1 - Σ p_l²` of `subset`,
/// where `p_l` is the fraction of examples labeled `l`.
/// An empty subset has impurity `0`.
pub fn gini<V, L>(subset: &[Sample<V, L>]) -> f64
    where L: Eq + Hash,
{
    gini_impurity(subset.iter().map(|sample| &sample.label))
}


/// Returns the gain `gini(parent) - (gini(child1) + gini(child2))`.
/// Larger is better.
pub fn gain<V, L>(
    parent: &[Sample<V, L>],
    child1: &[Sample<V, L>],
    child2: &[Sample<V, L>],
) -> f64
    where L: Eq + Hash,
{
    gini(parent) - (gini(child1) + gini(child2))
}


/// Splits `data` into the examples whose `feature` value is
/// at most `threshold` and the rest.
/// Both sides keep the order of `data`.
pub fn split_on<V, L, F, FV, G>(
    data: &[Sample<V, L>],
    feature: &F,
    threshold: &FV,
    get_feature_value: G,
) -> (Vec<Sample<V, L>>, Vec<Sample<V, L>>)
    where V: Clone,
          L: Clone,
          FV: Ord,
          G: Fn(&V, &F) -> FV,
{
    let mut left = Vec::new();
    let mut right = Vec::new();
    for sample in data {
        match route(&sample.value, feature, threshold, &get_feature_value) {
            LeftRight::Left  => { left.push(sample.clone()); },
            LeftRight::Right => { right.push(sample.clone()); },
        }
    }
    (left, right)
}


/// Computes the gain of splitting `data` by `(feature, threshold)`
/// without materializing the children.
/// `parent_gini` must equal `gini(data)`.
pub(super) fn split_gain<V, L, F, FV, G>(
    data: &[Sample<V, L>],
    parent_gini: f64,
    feature: &F,
    threshold: &FV,
    get_feature_value: G,
) -> f64
    where L: Eq + Hash,
          FV: Ord,
          G: Fn(&V, &F) -> FV,
{
    let mut left = Vec::new();
    let mut right = Vec::new();
    for sample in data {
        match route(&sample.value, feature, threshold, &get_feature_value) {
            LeftRight::Left  => { left.push(&sample.label); },
            LeftRight::Right => { right.push(&sample.label); },
        }
    }
    parent_gini - (gini_impurity(left) + gini_impurity(right))
}


/// Returns the gini-impurity of the given labels.
#[inline]
fn gini_impurity<'a, L, I>(labels: I) -> f64
    where L: Eq + Hash + 'a,
          I: IntoIterator<Item = &'a L>,
{
    let histogram = labels.into_iter().collect::<Histogram<&L>>();
    let total = histogram.total();
    if total == 0 { return 0f64; }

    let total = total as f64;
    let correct = histogram.iter()
        .map(|(_, count)| (count as f64 / total).powi(2))
        .sum::<f64>();

    (1f64 - correct).max(0f64)
}
