//! Integration tests for the labeling pipeline

mod common;

use common::{
    assert_graceful, labeled_fixture, labeling_exists_with_root, load_fixture,
    records_from_parents, solve_fixture,
};
use graceful_tree::parser::{parse_labeled, parse_records};
use graceful_tree::{solve, Outcome, SearchOptions, StructureError};

#[test]
fn test_single_node_gets_label_one() {
    let tree = labeled_fixture("single.txt");
    assert_eq!(tree.to_string(), "single(1)\n");
}

#[test]
fn test_two_nodes() {
    let records = parse_records("parent child\nchild\n");
    let Outcome::Labeled(tree) = solve(&records, &SearchOptions::default()) else {
        panic!("two-node tree must be labeled");
    };
    assert_eq!(tree.label_of("parent"), Some(1));
    assert_eq!(tree.label_of("child"), Some(3));
}

#[test]
fn test_star_with_two_leaves() {
    let tree = labeled_fixture("star.txt");

    // Differences 2 and 4 from the root
    let expected = "\
root(1) a(3) b(5)
a(3)
b(5)
";
    assert_eq!(tree.to_string(), expected);
    assert_graceful(&tree);
}

#[test]
fn test_path_needs_backtracking() {
    let tree = labeled_fixture("path.txt");

    let expected = "\
a(1) b(7)
b(7) c(3)
c(3) d(5)
d(5)
";
    assert_eq!(tree.to_string(), expected);
    assert_graceful(&tree);
}

#[test]
fn test_output_follows_record_order() {
    // "y" is declared before the root
    let tree = labeled_fixture("branching.txt");

    let expected = "\
y(7)
root(1) x(5) y(7)
x(5) z(3)
z(3)
";
    assert_eq!(tree.to_string(), expected);
    assert_graceful(&tree);
}

#[test]
fn test_root_moves_past_one_when_it_cannot_lead() {
    // n0 - n1 - n2, n2 -> {n3, n4}, n3 -> {n5, n6}, n4 -> {n7}
    let records = records_from_parents(&[0, 1, 2, 2, 3, 3, 4], &[0, 1, 2, 3, 4, 5, 6, 7]);
    assert!(!labeling_exists_with_root(&records, "n0", 1));

    let Outcome::Labeled(tree) = solve(&records, &SearchOptions::default()) else {
        panic!("eight-node tree must be labeled");
    };
    assert_eq!(tree.label_of("n0"), Some(3));
    assert_graceful(&tree);
}

#[test]
fn test_search_is_deterministic() {
    let records = load_fixture("branching.txt");
    let first = solve(&records, &SearchOptions::default());
    let second = solve(&records, &SearchOptions::default());
    assert!(first.is_labeled());
    assert_eq!(first, second);
}

#[test]
fn test_round_trip_through_output() {
    let tree = labeled_fixture("branching.txt");
    let reparsed = parse_labeled(&tree.to_string()).unwrap();
    assert_eq!(reparsed, tree.labels());
}

// ============= Structure Errors =============

#[test]
fn test_empty_input_is_not_unsatisfiable() {
    let outcome = solve_fixture("empty.txt");
    assert_eq!(outcome, Outcome::InvalidStructure(StructureError::Empty));
    assert_ne!(outcome, Outcome::Unsatisfiable);
}

#[test]
fn test_shared_child_is_rejected() {
    let outcome = solve_fixture("shared_child.txt");
    assert!(matches!(
        outcome,
        Outcome::InvalidStructure(StructureError::MultipleParents { ref node, .. }) if node == "c"
    ));
}

#[test]
fn test_multiple_roots_are_rejected() {
    assert_eq!(
        solve_fixture("two_roots.txt"),
        Outcome::InvalidStructure(StructureError::MultipleRoots {
            roots: vec!["a".to_string(), "b".to_string()]
        })
    );
}

#[test]
fn test_detached_cycle_is_rejected() {
    assert_eq!(
        solve_fixture("detached_cycle.txt"),
        Outcome::InvalidStructure(StructureError::Disconnected {
            nodes: vec!["x".to_string(), "y".to_string()]
        })
    );
}

#[test]
fn test_budget_exhaustion_is_its_own_outcome() {
    let records = load_fixture("path.txt");
    let outcome = solve(&records, &SearchOptions { max_steps: Some(3) });
    assert!(matches!(outcome, Outcome::BudgetExhausted { steps: 3 }));

    let outcome = solve(&records, &SearchOptions { max_steps: Some(1_000) });
    assert!(outcome.is_labeled());
}
