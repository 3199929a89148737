use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::{ClassifierError, Sample};

use super::{
    criterion::*,
    node::Node,
    sampling::choose_features,
    split_rule::Splitter,
    dtree_classifier::DecisionTreeClassifier,
};

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;


/// Enumerates the candidate `(feature, threshold)` pairs of a training set.
pub type FeatureEnumerator<V, L, F, FV> =
    Box<dyn Fn(&[Sample<V, L>]) -> Vec<(F, FV)> + Send + Sync>;

/// Extracts the value of a feature from an instance.
pub type FeatureValueFn<V, F, FV> =
    Arc<dyn Fn(&V, &F) -> FV + Send + Sync>;

/// Returns the value next to the given feature value.
pub type SuccessorFn<FV> = Arc<dyn Fn(&FV) -> FV + Send + Sync>;

/// The decision tree trainer.
/// Given a set of labeled examples,
/// [`DecisionTreeTrainer`] grows a binary tree by repeatedly picking
/// the `(feature, threshold)` pair that maximizes
/// [`gain`](crate::decision_tree::gain)
/// until every leaf is label-pure
/// or no candidate splits its examples into two non-empty parts.
///
/// [`DecisionTreeTrainer`] is constructed 
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```
/// use miniclassifiers::prelude::*;
///
/// let data = vec![
///     Sample::new(1, 'X'),
///     Sample::new(2, 'X'),
///     Sample::new(3, 'Y'),
///     Sample::new(4, 'Y'),
/// ];
/// let trainer = DecisionTreeBuilder::new(
///         data,
///         |_: &[Sample<i64, char>]| vec![("id", 2i64)],
///         |v: &i64, _: &&str| *v,
///         |t: &i64| t + 1,
///     )
///     .build()
///     .unwrap();
///
/// let tree = trainer.train().unwrap();
/// assert_eq!(tree.classify(&0), Ok('X'));
/// assert_eq!(tree.classify(&9), Ok('Y'));
/// ```
pub struct DecisionTreeTrainer<V, L, F, FV> {
    base_data: Vec<Sample<V, L>>,
    all_features: FeatureEnumerator<V, L, F, FV>,
    restrict_features: bool,
    get_feature_value: FeatureValueFn<V, F, FV>,
    successor: SuccessorFn<FV>,
    seed: u64,
}


impl<V, L, F, FV> DecisionTreeTrainer<V, L, F, FV> {
    /// Initialize [`DecisionTreeTrainer`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(
        base_data: Vec<Sample<V, L>>,
        all_features: FeatureEnumerator<V, L, F, FV>,
        restrict_features: bool,
        get_feature_value: FeatureValueFn<V, F, FV>,
        successor: SuccessorFn<FV>,
        seed: u64,
    ) -> Self
    {
        Self {
            base_data,
            all_features,
            restrict_features,
            get_feature_value,
            successor,
            seed,
        }
    }


    /// Returns the training set.
    #[inline]
    pub fn base_data(&self) -> &[Sample<V, L>] {
        &self.base_data
    }


    /// Returns `true` if each node considers only
    /// `round(sqrt(# of examples))` randomly chosen candidates.
    #[inline]
    pub fn restrict_features(&self) -> bool {
        self.restrict_features
    }


    /// Returns the seed of the random source used in [`Self::train`].
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}


impl<V, L, F, FV> DecisionTreeTrainer<V, L, F, FV>
    where V: Clone + Sync,
          L: Eq + Hash + Clone + Sync,
          F: Sync,
          FV: Ord + Sync,
{
    /// Grows a tree on the training set.
    /// The random source is re-seeded by [`Self::seed`] on each call,
    /// so repeated calls return the same tree.
    ///
    /// # Errors
    /// Returns [`ClassifierError::EmptyTrainingSet`]
    /// if the training set is empty.
    #[instrument(
        skip_all,
        fields(
            n_samples = self.base_data.len(),
            restrict_features = self.restrict_features
        )
    )]
    pub fn train(&self)
        -> Result<DecisionTreeClassifier<V, L, F, FV>, ClassifierError>
    {
        if self.base_data.is_empty() {
            return Err(ClassifierError::EmptyTrainingSet);
        }
        let mut rng = StdRng::seed_from_u64(self.seed);
        let root = self.grow(&self.base_data, &mut rng)?;

        debug!(
            depth = root.depth(),
            n_leaves = root.n_leaves(),
            "decision tree training complete"
        );

        let get_feature_value = Arc::clone(&self.get_feature_value);
        let successor = Arc::clone(&self.successor);
        Ok(DecisionTreeClassifier::new(root, get_feature_value, successor))
    }


    /// Grows the subtree for `data`.
    fn grow(&self, data: &[Sample<V, L>], rng: &mut StdRng)
        -> Result<Node<L, F, FV>, ClassifierError>
    {
        let n_sample = data.len();
        if n_sample == 0 {
            return Err(ClassifierError::EmptyTrainingSet);
        }

        if num_labels(data) == 1 {
            trace!(n_sample, "label-pure subset, growing a leaf");
            return Ok(Node::leaf(data[0].label.clone()));
        }

        let mut candidates = self.candidates(data, rng);

        let parent_gini = gini(data);
        let get_feature_value = &*self.get_feature_value;
        let gains = candidates.par_iter()
            .map(|(feature, threshold)| {
                split_gain(
                    data, parent_gini, feature, threshold, get_feature_value
                )
            })
            .collect::<Vec<f64>>();

        // The first candidate among the ones with the greatest gain wins.
        let best = gains.iter()
            .copied()
            .enumerate()
            .reduce(|best, item| if item.1 > best.1 { item } else { best });

        let (ix, best_gain) = match best {
            Some(best) => best,
            None => {
                trace!(n_sample, "no candidate feature, growing a leaf");
                return Ok(Node::leaf(most_popular_label(data)?));
            },
        };

        let (feature, threshold) = candidates.swap_remove(ix);
        let (left, right) = split_on(
            data, &feature, &threshold, get_feature_value
        );

        if left.is_empty() {
            trace!(n_sample, "degenerate split, growing a leaf");
            return Ok(Node::leaf(most_popular_label(&right)?));
        }
        if right.is_empty() {
            trace!(n_sample, "degenerate split, growing a leaf");
            return Ok(Node::leaf(most_popular_label(&left)?));
        }

        trace!(
            n_sample,
            n_left = left.len(),
            n_right = right.len(),
            gain = best_gain,
            "splitting"
        );

        let left = self.grow(&left, rng)?;
        let right = self.grow(&right, rng)?;
        Ok(Node::branch(Splitter::new(feature, threshold), left, right))
    }


    /// Returns the candidate splits for `data`.
    fn candidates(&self, data: &[Sample<V, L>], rng: &mut StdRng)
        -> Vec<(F, FV)>
    {
        let features = (self.all_features)(data);
        if !self.restrict_features {
            return features;
        }

        let mut target = (data.len() as f64).sqrt().round() as usize;
        if target > features.len() {
            trace!(
                requested = target,
                available = features.len(),
                "too few candidates, keeping all of them"
            );
            target = features.len();
        }
        choose_features(features, target, rng)
    }
}


impl<V, L, F, FV> fmt::Display for DecisionTreeTrainer<V, L, F, FV> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree Trainer\n\n\
            - # of examples: {}\n\
            - Restrict features: {}\n\
            - Seed: {}\n\
            ----------\
            ",
            self.base_data.len(),
            self.restrict_features,
            self.seed,
        )
    }
}
