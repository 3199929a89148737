//! Defines the decision tree classifier.
use crate::{Classifier, ClassifierError};

use super::dtree::{FeatureValueFn, SuccessorFn};
use super::node::Node;

use std::fmt;


/// Decision tree classifier.
/// This struct owns the root [`Node`] together with
/// the feature-value extractor and the successor function
/// the tree was trained with.
#[derive(Clone)]
pub struct DecisionTreeClassifier<V, L, F, FV> {
    root: Node<L, F, FV>,
    get_feature_value: FeatureValueFn<V, F, FV>,
    successor: SuccessorFn<FV>,
}


impl<V, L, F, FV> DecisionTreeClassifier<V, L, F, FV> {
    #[inline]
    pub(super) fn new(
        root: Node<L, F, FV>,
        get_feature_value: FeatureValueFn<V, F, FV>,
        successor: SuccessorFn<FV>,
    ) -> Self
    {
        Self { root, get_feature_value, successor }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node<L, F, FV> {
        &self.root
    }


    /// Consumes `self` and returns the root node.
    #[inline]
    pub fn into_root(self) -> Node<L, F, FV> {
        self.root
    }


    /// Returns the depth of the tree. A single leaf has depth `0`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }
}


impl<V, L, F, FV> Classifier<V, L> for DecisionTreeClassifier<V, L, F, FV>
    where L: Clone,
          FV: Ord,
{
    fn classify(&self, value: &V) -> Result<L, ClassifierError> {
        let label = self.root.route(value, &*self.get_feature_value);
        Ok(label.clone())
    }
}


impl<V, L, F, FV> DecisionTreeClassifier<V, L, F, FV>
    where L: fmt::Display,
          F: fmt::Display,
          FV: fmt::Display,
{
    /// Renders the tree in Graphviz `dot` format.
    pub fn to_dot(&self) -> String {
        let info = self.root.to_dot_info(0, &*self.successor).0;

        let mut dot = String::from("graph DecisionTree {\n");
        info.into_iter()
            .for_each(|row| dot.push_str(&row));
        dot.push('}');
        dot
    }
}


impl<V, L, F, FV> fmt::Debug for DecisionTreeClassifier<V, L, F, FV>
    where L: fmt::Debug,
          F: fmt::Debug,
          FV: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionTreeClassifier")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
