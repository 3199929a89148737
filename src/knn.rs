//! Provides the k-nearest-neighbors classifier.
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{
    Classifier,
    ClassifierError,
    Histogram,
    Learner,
    Sample,
};

use std::hash::Hash;


/// The k-nearest-neighbors classifier.
/// [`Knn`] stores every distinct training example and predicts
/// the plurality label among the `k` stored examples
/// closest to the query under a caller-supplied `distance`.
///
/// Examples at equal distance are ranked by training order,
/// and ties in the vote go to the label of the nearest example.
///
/// # Example
/// ```
/// use miniclassifiers::prelude::*;
///
/// let euclidean = |a: &(f64, f64), b: &(f64, f64)| {
///     ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
/// };
/// let mut knn = Knn::new(2, euclidean).unwrap();
/// knn.train(&[
///     Sample::new((0.0, 0.0), 'A'),
///     Sample::new((0.0, 1.0), 'A'),
///     Sample::new((5.0, 5.0), 'B'),
/// ]);
/// assert_eq!(knn.classify(&(0.0, 0.5)), Ok('A'));
/// ```
#[derive(Debug, Clone)]
pub struct Knn<V, L, D> {
    k: usize,
    distance: D,
    samples: Vec<Sample<V, L>>,
}


impl<V, L, D> Knn<V, L, D>
    where D: Fn(&V, &V) -> f64,
{
    /// Construct an untrained [`Knn`] that votes among `k` neighbors.
    ///
    /// # Errors
    /// Returns [`ClassifierError::InvalidK`] if `k` is zero.
    pub fn new(k: usize, distance: D) -> Result<Self, ClassifierError> {
        if k == 0 {
            return Err(ClassifierError::InvalidK { k });
        }
        Ok(Self { k, distance, samples: Vec::new() })
    }
}


impl<V, L, D> Knn<V, L, D> {
    /// Returns the number of neighbors that vote.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }


    /// Returns the number of stored examples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }


    /// Returns `true` if no example is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }


    /// Returns the stored examples in insertion order.
    #[inline]
    pub fn samples(&self) -> &[Sample<V, L>] {
        &self.samples
    }
}


impl<V, L, D> Classifier<V, L> for Knn<V, L, D>
    where V: Sync,
          L: Eq + Hash + Clone + Sync,
          D: Fn(&V, &V) -> f64 + Sync,
{
    fn classify(&self, value: &V) -> Result<L, ClassifierError> {
        if self.samples.is_empty() {
            return Err(ClassifierError::Untrained);
        }

        let distances = self.samples.par_iter()
            .map(|sample| (self.distance)(value, &sample.value))
            .collect::<Vec<f64>>();

        // `sort_by` is stable, so equal distances keep training order.
        let mut ix = (0..distances.len()).collect::<Vec<usize>>();
        ix.sort_by(|&i, &j| distances[i].total_cmp(&distances[j]));

        let histogram = ix.into_iter()
            .take(self.k)
            .map(|i| self.samples[i].label.clone())
            .collect::<Histogram<L>>();

        histogram.plurality_winner().cloned()
    }
}


impl<V, L, D> Learner<V, L> for Knn<V, L, D>
    where V: PartialEq + Clone + Sync,
          L: Eq + Hash + Clone + Sync,
          D: Fn(&V, &V) -> f64 + Sync,
{
    /// Appends each example that is not already stored.
    #[instrument(skip_all, fields(n_samples = samples.len()))]
    fn train(&mut self, samples: &[Sample<V, L>]) {
        let before = self.samples.len();
        for sample in samples {
            if !self.samples.contains(sample) {
                self.samples.push(sample.clone());
            }
        }
        debug!(
            added = self.samples.len() - before,
            stored = self.samples.len(),
            "knn training complete"
        );
    }
}
