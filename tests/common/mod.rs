//! Common test utilities

#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;

use graceful_tree::output::LabeledTree;
use graceful_tree::parser::read_records_from_path;
use graceful_tree::{solve, Outcome, SearchOptions, TreeRecord};

/// Get the path to the testdata directory
pub fn testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Read the records of a fixture in testdata/
pub fn load_fixture(name: &str) -> Vec<TreeRecord> {
    read_records_from_path(&testdata_dir().join(name)).expect("Failed to read fixture")
}

/// Solve a fixture without a step budget
pub fn solve_fixture(name: &str) -> Outcome {
    solve(&load_fixture(name), &SearchOptions::default())
}

/// Solve a fixture and render the labeled tree, panicking on any other outcome
pub fn labeled_fixture(name: &str) -> LabeledTree {
    match solve_fixture(name) {
        Outcome::Labeled(tree) => tree,
        other => panic!("expected {name} to be labeled, got {other:?}"),
    }
}

/// Records for `n` nodes where node `i > 0` hangs under `parents[i - 1]`,
/// declared in `declaration` order
pub fn records_from_parents(parents: &[usize], declaration: &[usize]) -> Vec<TreeRecord> {
    let n = parents.len() + 1;
    let mut children = vec![Vec::new(); n];
    for (i, &parent) in parents.iter().enumerate() {
        children[parent].push(format!("n{}", i + 1));
    }
    declaration
        .iter()
        .map(|&node| TreeRecord::new(format!("n{node}"), children[node].clone()))
        .collect()
}

/// Whether any graceful labeling gives `root` the label `root_label`, found by
/// trying every assignment of the odd labels in declaration order
pub fn labeling_exists_with_root(records: &[TreeRecord], root: &str, root_label: u32) -> bool {
    let names: Vec<&str> = records.iter().map(|r| r.node.as_str()).collect();
    let position = |name: &str| names.iter().position(|&n| n == name).unwrap();
    let edges: Vec<(usize, usize)> = records
        .iter()
        .flat_map(|r| {
            let parent = position(&r.node);
            r.children.iter().map(move |c| (parent, position(c)))
        })
        .collect();

    let n = names.len() as u32;
    let pool: Vec<u32> = (0..n).map(|i| 2 * i + 1).collect();
    let mut labels = vec![None; names.len()];
    labels[position(root)] = Some(root_label);
    assign_all(&mut labels, 0, &pool, &edges)
}

fn assign_all(
    labels: &mut [Option<u32>],
    next: usize,
    pool: &[u32],
    edges: &[(usize, usize)],
) -> bool {
    if next == labels.len() {
        let mut differences = HashSet::new();
        return edges.iter().all(|&(p, c)| {
            let (Some(a), Some(b)) = (labels[p], labels[c]) else {
                return false;
            };
            differences.insert(a.abs_diff(b))
        });
    }
    if labels[next].is_some() {
        return assign_all(labels, next + 1, pool, edges);
    }
    for &label in pool {
        if labels.contains(&Some(label)) {
            continue;
        }
        labels[next] = Some(label);
        if assign_all(labels, next + 1, pool, edges) {
            return true;
        }
        labels[next] = None;
    }
    false
}

/// Check the labeled tree against the odd-graceful conditions: labels are
/// distinct members of {1, 3, ..., 2N - 1} and edge differences are distinct
pub fn assert_graceful(tree: &LabeledTree) {
    let n = tree.records().len() as u32;

    let mut labels = HashSet::new();
    for (name, label) in tree.labels() {
        assert!(label % 2 == 1 && label < 2 * n, "{name} has label {label}");
        assert!(labels.insert(label), "label {label} used twice");
    }

    let mut differences = HashSet::new();
    for record in tree.records() {
        for child in &record.children {
            assert_eq!(tree.label_of(&child.name), Some(child.label));
            let difference = child.label.abs_diff(record.node.label);
            assert!(
                differences.insert(difference),
                "difference {difference} used twice"
            );
        }
    }
    assert_eq!(differences.len() as u32, n - 1);
}
