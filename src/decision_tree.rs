//! Defines the decision tree trainer and the tree it produces.

/// Defines the builder of `DecisionTreeTrainer`.
pub mod builder;
/// Defines the decision tree trainer.
pub mod dtree;
/// Defines the classifier produced by `DecisionTreeTrainer`.
pub mod dtree_classifier;
/// Defines the nodes of a trained tree.
pub mod node;

mod criterion;
mod sampling;
mod split_rule;

pub use builder::{DecisionTreeBuilder, DEFAULT_SEED};
pub use dtree::{
    DecisionTreeTrainer,
    FeatureEnumerator,
    FeatureValueFn,
    SuccessorFn,
};
pub use dtree_classifier::DecisionTreeClassifier;
pub use node::{BranchNode, LeafNode, Node};
pub use criterion::{
    gain,
    gini,
    most_popular_label,
    num_labels,
    split_on,
};
pub use sampling::{reduced_features, resample};
pub use split_rule::{LeftRight, Splitter};
