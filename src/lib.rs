#![warn(missing_docs)]

//! 
//! A crate that provides small supervised classifiers
//! over generic instances and labels.
//! 
//! This crate includes two classifiers.
//! 
//! - k-nearest neighbors
//!     [`Knn`] stores the training examples and predicts
//!     the plurality label among the `k` nearest ones
//!     under a caller-supplied distance.
//! 
//! - Decision tree
//!     [`DecisionTreeTrainer`] grows a binary tree by greedily
//!     minimizing the Gini impurity.
//!     Optionally, each node considers only a random subset of
//!     candidate splits, which together with [`decision_tree::resample`]
//!     is the building block of random-forest-style ensembles.
//! 
//! Instances `V` are opaque. The trainer sees them only through
//! caller-supplied callbacks that enumerate candidate
//! `(feature, threshold)` pairs and extract totally ordered
//! feature values.

pub mod error;
pub mod sample;
pub mod histogram;
pub mod classifier;
pub mod knn;
pub mod decision_tree;
pub mod prelude;

pub use error::ClassifierError;
pub use sample::Sample;
pub use histogram::Histogram;
pub use classifier::{Classifier, Learner};
pub use knn::Knn;
pub use decision_tree::{
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    DecisionTreeTrainer,
};
