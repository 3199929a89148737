//! Defines the error type shared by every classifier in this crate.

/// Errors from training or querying a classifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifierError {
    /// Returned when `classify` is called before any example is stored.
    #[error("classifier has no training data")]
    Untrained,

    /// Returned when a tree is requested from an empty training set.
    #[error("training set has zero samples")]
    EmptyTrainingSet,

    /// Returned when the plurality winner of an empty histogram is requested.
    #[error("histogram has no counts")]
    EmptyHistogram,

    /// Returned when more features are requested than were enumerated.
    #[error("requested {requested} features, but only {available} are available")]
    InsufficientFeatures {
        /// The number of features asked for.
        requested: usize,
        /// The number of candidate features enumerated from the data.
        available: usize,
    },

    /// Returned when the number of neighbors is zero.
    #[error("k must be at least 1, got {k}")]
    InvalidK {
        /// The invalid `k` value provided.
        k: usize,
    },
}
