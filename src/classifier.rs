//! Defines the traits shared by every classifier in this crate.
//!
//! A [`Classifier`] predicts a label for a given instance.
//! A [`Learner`] is a classifier that ingests training examples in batches.
//! The decision tree is a [`Classifier`] but not a [`Learner`];
//! a fresh tree is grown by
//! [`DecisionTreeTrainer`](crate::DecisionTreeTrainer) instead.
use crate::{ClassifierError, Sample};


/// A trait that predicts a label of type `L` for an instance of type `V`.
pub trait Classifier<V, L> {
    /// Predicts the label of the given instance.
    fn classify(&self, value: &V) -> Result<L, ClassifierError>;

    /// Predicts the labels of the given instances, in order.
    fn classify_all(&self, values: &[V]) -> Result<Vec<L>, ClassifierError> {
        values.iter()
            .map(|value| self.classify(value))
            .collect()
    }
}


/// A classifier that learns from batches of labeled examples.
pub trait Learner<V, L>: Classifier<V, L> {
    /// Ingests a batch of training examples.
    fn train(&mut self, samples: &[Sample<V, L>]);
}
