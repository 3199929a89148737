use miniclassifiers::prelude::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// Toy example  (o/x are the pos/neg examples)
// 
// 15|                     |
//   |                   5 |
//   |                  x  |
//   |                     |         6
//   |                     |        x
// 10|       4             |________________________
//   |      x              |             1
//   |                     |            o
//   |                     |
//   |                     |   0
//  5|                     |  o
//   |                     |                 2
//   |                     |                o
//   |            3        |
//   |           x         |
//   |_____________________|____________________
//  0            5         | 10            15
// 
type Point = [i64; 2];

fn toy() -> Vec<Sample<Point, char>> {
    vec![
        Sample::new([10,  5], 'o'),
        Sample::new([14,  8], 'o'),
        Sample::new([15,  3], 'o'),
        Sample::new([ 5,  1], 'x'),
        Sample::new([ 3,  9], 'x'),
        Sample::new([ 8, 13], 'x'),
        Sample::new([12, 11], 'x'),
    ]
}

/// Every observed value on every axis except the largest one,
/// which would send all examples to the left.
fn thresholds(data: &[Sample<Point, char>]) -> Vec<(usize, i64)> {
    let mut features = Vec::new();
    for axis in 0..2 {
        let mut values = data.iter()
            .map(|sample| sample.value[axis])
            .collect::<Vec<_>>();
        values.sort();
        values.dedup();
        values.pop();
        features.extend(values.into_iter().map(|v| (axis, v)));
    }
    features
}

fn coordinate(point: &Point, axis: &usize) -> i64 {
    point[*axis]
}

fn next(value: &i64) -> i64 {
    value + 1
}

fn line() -> Vec<Sample<i64, char>> {
    vec![
        Sample::new(1, 'X'),
        Sample::new(2, 'X'),
        Sample::new(3, 'Y'),
        Sample::new(4, 'Y'),
    ]
}

fn identity(value: &i64, _feature: &&'static str) -> i64 {
    *value
}

#[test]
fn single_candidate_split() {
    let trainer = DecisionTreeBuilder::new(
            line(),
            |_: &[Sample<i64, char>]| vec![("id", 2i64)],
            identity,
            next,
        )
        .build()
        .unwrap();
    let tree = trainer.train().unwrap();

    let expected = Node::branch(
        Splitter::new("id", 2),
        Node::leaf('X'),
        Node::leaf('Y'),
    );
    assert_eq!(tree.root(), &expected);
    assert_eq!(tree.classify_all(&[0, 2, 3, 100]), Ok(vec!['X', 'X', 'Y', 'Y']));

    let branch = match tree.root() {
        Node::Branch(branch) => branch,
        Node::Leaf(_) => panic!("expected a branch at the root"),
    };
    assert_eq!(branch.rule(), &Splitter::from(("id", 2)));
    let labels = [branch.left(), branch.right()]
        .map(|child| match child {
            Node::Leaf(leaf) => *leaf.label(),
            Node::Branch(_) => panic!("expected leaves below the root"),
        });
    assert_eq!(labels, ['X', 'Y']);
}

#[test]
fn single_sample_is_a_leaf() {
    let trainer = DecisionTreeBuilder::new(
            vec![Sample::new([1, 1], 'x')],
            thresholds,
            coordinate,
            next,
        )
        .build()
        .unwrap();
    let tree = trainer.train().unwrap();
    assert_eq!(tree.root(), &Node::leaf('x'));
    assert_eq!(tree.classify(&[100, -100]), Ok('x'));
}

#[test]
fn pure_set_is_a_leaf_without_enumerating_features() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let data = (0..20)
        .map(|v| Sample::new(v, "same"))
        .collect::<Vec<_>>();

    let trainer = DecisionTreeBuilder::new(
            data.clone(),
            move |data: &[Sample<i64, &'static str>]| -> Vec<(&'static str, i64)> {
                counter.fetch_add(1, Ordering::SeqCst);
                data.iter().map(|s| ("id", s.value)).collect()
            },
            identity,
            next,
        )
        .build()
        .unwrap();
    let tree = trainer.train().unwrap();

    assert_eq!(tree.root(), &Node::leaf("same"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(trainer.base_data(), &data[..], "training must not consume data");
}

#[test]
fn empty_training_set() {
    let result = DecisionTreeBuilder::new(
            Vec::new(),
            thresholds,
            coordinate,
            next,
        )
        .build();
    assert_eq!(result.err(), Some(ClassifierError::EmptyTrainingSet));
}

#[test]
fn degenerate_split_becomes_plurality_leaf() {
    let data = vec![
        Sample::new(1, 'X'),
        Sample::new(2, 'Y'),
        Sample::new(3, 'Y'),
    ];
    let trainer = DecisionTreeBuilder::new(
            data,
            |_: &[Sample<i64, char>]| vec![("id", 10i64)],
            identity,
            next,
        )
        .build()
        .unwrap();
    let tree = trainer.train().unwrap();
    assert_eq!(tree.root(), &Node::leaf('Y'));
}

#[test]
fn no_candidate_becomes_plurality_leaf() {
    let data = vec![
        Sample::new(1, 'X'),
        Sample::new(2, 'X'),
        Sample::new(3, 'Y'),
    ];
    let trainer = DecisionTreeBuilder::new(
            data,
            |_: &[Sample<i64, char>]| -> Vec<(&'static str, i64)> { Vec::new() },
            identity,
            next,
        )
        .build()
        .unwrap();
    let tree = trainer.train().unwrap();
    assert_eq!(tree.root(), &Node::leaf('X'));
}

#[test]
fn first_of_equal_gains_wins() {
    let trainer = DecisionTreeBuilder::new(
            line(),
            |_: &[Sample<i64, char>]| vec![("first", 2i64), ("second", 2)],
            identity,
            next,
        )
        .build()
        .unwrap();
    let tree = trainer.train().unwrap();
    match tree.root() {
        Node::Branch(branch) => {
            assert_eq!(branch.rule(), &Splitter::new("first", 2));
        },
        Node::Leaf(_) => panic!("expected a branch at the root"),
    }
}

#[test]
fn fits_every_training_example() {
    let data = toy();
    let trainer = DecisionTreeBuilder::new(
            data.clone(),
            thresholds,
            coordinate,
            next,
        )
        .build()
        .unwrap();
    let tree = trainer.train().unwrap();

    for sample in data.iter() {
        let prediction = tree.classify(&sample.value).unwrap();
        assert_eq!(
            prediction, sample.label,
            "misclassified {:?}. tree: {tree:?}", sample.value
        );
    }
    assert!(tree.n_leaves() >= 2);
    assert!(tree.depth() >= 1);
}

#[test]
fn restricted_tree_fits_every_training_example() {
    let data = toy();
    for seed in [0, 1, 2, 777, 1234] {
        let trainer = DecisionTreeBuilder::new(
                data.clone(),
                thresholds,
                coordinate,
                next,
            )
            .restrict_features(true)
            .seed(seed)
            .build()
            .unwrap();
        let tree = trainer.train().unwrap();

        let values = data.iter()
            .map(|sample| sample.value)
            .collect::<Vec<_>>();
        let labels = data.iter()
            .map(|sample| sample.label)
            .collect::<Vec<_>>();
        assert_eq!(tree.classify_all(&values), Ok(labels), "seed {seed}");
    }
}

#[test]
fn restricted_tree_is_reproducible() {
    let build = || {
        DecisionTreeBuilder::new(toy(), thresholds, coordinate, next)
            .restrict_features(true)
            .seed(42)
            .build()
            .unwrap()
    };
    let first = build().train().unwrap().into_root();
    let second = build().train().unwrap().into_root();
    assert_eq!(first, second);

    let trainer = build();
    assert_eq!(trainer.train().unwrap().root(), &first);
    assert_eq!(trainer.train().unwrap().root(), &first);
}

#[test]
fn dot_shows_successor_on_right_edge() {
    let trainer = DecisionTreeBuilder::new(
            line(),
            |_: &[Sample<i64, char>]| vec![("id", 2i64)],
            identity,
            next,
        )
        .build()
        .unwrap();
    let dot = trainer.train().unwrap().to_dot();

    assert!(dot.starts_with("graph DecisionTree {"), "{dot}");
    assert!(dot.ends_with('}'), "{dot}");
    assert!(dot.contains("id <= 2 ?"), "{dot}");
    assert!(dot.contains(">= 3"), "{dot}");
}

#[test]
fn trainer_summary() {
    let trainer = DecisionTreeBuilder::new(toy(), thresholds, coordinate, next)
        .build()
        .unwrap();
    assert!(!trainer.restrict_features());
    assert_eq!(trainer.seed(), miniclassifiers::decision_tree::DEFAULT_SEED);

    let summary = format!("{trainer}");
    assert!(summary.contains("# of examples: 7"), "{summary}");
}


/// Trains on `n` alternately labeled examples with `n_candidates`
/// candidates that all send every example to the left,
/// and returns how many feature values were computed.
fn count_feature_values(n: i64, n_candidates: usize, restrict: bool) -> usize {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let data = (0..n)
        .map(|v| Sample::new(v, if v % 2 == 0 { 'X' } else { 'Y' }))
        .collect::<Vec<_>>();

    let trainer = DecisionTreeBuilder::new(
            data,
            move |_: &[Sample<i64, char>]| -> Vec<(&'static str, i64)> {
                vec![("id", n); n_candidates]
            },
            move |value: &i64, _feature: &&'static str| -> i64 {
                counter.fetch_add(1, Ordering::SeqCst);
                *value
            },
            next,
        )
        .restrict_features(restrict)
        .build()
        .unwrap();
    let tree = trainer.train().unwrap();

    assert!(tree.root().is_leaf());
    calls.load(Ordering::SeqCst)
}

#[test]
fn restricted_node_considers_rounded_sqrt_candidates() {
    // Each considered candidate routes all `n` examples once,
    // then the chosen one routes them again to split.
    for (n, considered) in [(2, 1), (3, 2), (7, 3), (10, 3)] {
        let calls = count_feature_values(n, n as usize, true);
        assert_eq!(calls, considered * n as usize + n as usize, "n = {n}");
    }

    let calls = count_feature_values(10, 10, false);
    assert_eq!(calls, 10 * 10 + 10);
}

#[test]
fn restricted_node_keeps_every_candidate_when_too_few() {
    // round(sqrt(16)) = 4 exceeds the 2 candidates.
    let calls = count_feature_values(16, 2, true);
    assert_eq!(calls, 2 * 16 + 16);
}
