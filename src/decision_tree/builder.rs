use crate::{ClassifierError, Sample};
use super::dtree::{
    DecisionTreeTrainer,
    FeatureEnumerator,
    FeatureValueFn,
    SuccessorFn,
};

use std::sync::Arc;


/// The seed of the random source set as default.
pub const DEFAULT_SEED: u64 = 1234;

/// A struct that builds `DecisionTreeTrainer`.
/// `DecisionTreeBuilder` keeps parameters for constructing
/// `DecisionTreeTrainer`.
///
/// The builder takes the training set and three callbacks:
/// - `all_features` enumerates candidate `(feature, threshold)` pairs
///   of a training set,
/// - `get_feature_value` extracts the value of a feature from an instance,
/// - `successor` returns the value next to a feature value.
///
/// # Example
/// 
/// ```
/// use miniclassifiers::prelude::*;
///
/// let data = vec![Sample::new([0, 1], true), Sample::new([2, 0], false)];
/// let trainer = DecisionTreeBuilder::new(
///         data,
///         |data: &[Sample<[i32; 2], bool>]| -> Vec<(usize, i32)> {
///             data.iter()
///                 .flat_map(|s| [(0, s.value[0]), (1, s.value[1])])
///                 .collect()
///         },
///         |v: &[i32; 2], f: &usize| v[*f],
///         |t: &i32| t + 1,
///     )
///     .restrict_features(true)
///     .seed(777)
///     .build()
///     .unwrap();
/// assert!(trainer.restrict_features());
/// ```
pub struct DecisionTreeBuilder<V, L, F, FV> {
    data: Vec<Sample<V, L>>,
    all_features: FeatureEnumerator<V, L, F, FV>,
    get_feature_value: FeatureValueFn<V, F, FV>,
    successor: SuccessorFn<FV>,
    restrict_features: bool,
    seed: u64,
}


impl<V, L, F, FV> DecisionTreeBuilder<V, L, F, FV> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// restrict_features: false,
    /// seed: DEFAULT_SEED == 1234,
    /// ```
    pub fn new<A, G, S>(
        data: Vec<Sample<V, L>>,
        all_features: A,
        get_feature_value: G,
        successor: S,
    ) -> Self
        where A: Fn(&[Sample<V, L>]) -> Vec<(F, FV)> + Send + Sync + 'static,
              G: Fn(&V, &F) -> FV + Send + Sync + 'static,
              S: Fn(&FV) -> FV + Send + Sync + 'static,
    {
        Self {
            data,
            all_features: Box::new(all_features),
            get_feature_value: Arc::new(get_feature_value),
            successor: Arc::new(successor),
            restrict_features: false,
            seed: DEFAULT_SEED,
        }
    }


    /// If `true`, each node considers only `round(sqrt(n))`
    /// candidates chosen uniformly at random,
    /// where `n` is the number of examples reaching the node.
    /// Default value is `false`.
    #[inline]
    pub fn restrict_features(mut self, restrict: bool) -> Self {
        self.restrict_features = restrict;
        self
    }


    /// Set the seed of the random source for feature subsampling.
    /// Default value is `DEFAULT_SEED == 1234`.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Build a `DecisionTreeTrainer`.
    /// This method consumes `self`.
    ///
    /// # Errors
    /// Returns [`ClassifierError::EmptyTrainingSet`]
    /// if the training set is empty.
    pub fn build(self)
        -> Result<DecisionTreeTrainer<V, L, F, FV>, ClassifierError>
    {
        if self.data.is_empty() {
            return Err(ClassifierError::EmptyTrainingSet);
        }

        let trainer = DecisionTreeTrainer::new(
            self.data,
            self.all_features,
            self.restrict_features,
            self.get_feature_value,
            self.successor,
            self.seed,
        );
        Ok(trainer)
    }
}
