//! Exports the standard classifiers and traits.
//! 
pub use crate::classifier::{
    Classifier,
    Learner,
};


pub use crate::{
    ClassifierError,
    Histogram,
    Sample,

    // k-nearest neighbors ----------------------
    Knn,
};


pub use crate::decision_tree::{
    // Decision tree ----------------------------
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    DecisionTreeTrainer,
    Node,
    Splitter,

    // Split utilities
    gain,
    gini,
    most_popular_label,
    num_labels,
    split_on,

    // Sampling
    reduced_features,
    resample,
};
