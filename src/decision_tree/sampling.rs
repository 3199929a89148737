//! Random feature subsampling and bootstrap resampling.
//! Every function here draws from a caller-supplied random source.
use rand::Rng;
use rand::seq::SliceRandom;

use crate::{ClassifierError, Sample};


/// Enumerates the candidate features of `data` by `all_features`,
/// shuffles them uniformly at random, and keeps the first `target` ones.
///
/// # Errors
/// Returns [`ClassifierError::InsufficientFeatures`]
/// if `target` exceeds the number of enumerated features.
///
/// # Example
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use miniclassifiers::prelude::*;
///
/// let data = vec![Sample::new(3, 'a'), Sample::new(7, 'b')];
/// let thresholds = |data: &[Sample<i32, char>]| {
///     data.iter().map(|s| ((), s.value)).collect::<Vec<_>>()
/// };
/// let mut rng = StdRng::seed_from_u64(1234);
/// let features = reduced_features(&data, thresholds, 1, &mut rng).unwrap();
/// assert_eq!(features.len(), 1);
/// ```
pub fn reduced_features<V, L, F, FV, A, R>(
    data: &[Sample<V, L>],
    all_features: A,
    target: usize,
    rng: &mut R,
) -> Result<Vec<(F, FV)>, ClassifierError>
    where A: Fn(&[Sample<V, L>]) -> Vec<(F, FV)>,
          R: Rng + ?Sized,
{
    let features = all_features(data);
    let available = features.len();
    if target > available {
        return Err(ClassifierError::InsufficientFeatures {
            requested: target,
            available,
        });
    }
    Ok(choose_features(features, target, rng))
}


/// Returns a new training set of the same length as `data`,
/// drawn uniformly **with replacement** from `data`.
/// `data` itself is left intact.
pub fn resample<V, L, R>(data: &[Sample<V, L>], rng: &mut R)
    -> Vec<Sample<V, L>>
    where V: Clone,
          L: Clone,
          R: Rng + ?Sized,
{
    let n_sample = data.len();
    (0..n_sample)
        .map(|_| data[rng.gen_range(0..n_sample)].clone())
        .collect()
}


/// Shuffles `features` and keeps the first `target` of them.
/// Keeps all of them if `target` is larger.
#[inline]
pub(super) fn choose_features<T, R>(
    mut features: Vec<T>,
    target: usize,
    rng: &mut R,
) -> Vec<T>
    where R: Rng + ?Sized,
{
    features.shuffle(rng);
    features.truncate(target);
    features
}
