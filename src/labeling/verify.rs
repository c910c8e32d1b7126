//! Independent check of a finished labeling

use std::collections::HashMap;
use thiserror::Error;

use super::engine::Labeling;
use super::pool::CandidatePool;
use crate::tree::{ParentRelation, Tree};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("labeling covers {labeled} nodes but the tree has {nodes}")]
    WrongSize { labeled: usize, nodes: usize },

    #[error("label {label} of '{node}' is not a candidate value")]
    OutsidePool { node: String, label: u32 },

    #[error("label {label} is used by both '{first}' and '{second}'")]
    RepeatedLabel {
        label: u32,
        first: String,
        second: String,
    },

    #[error("difference {difference} appears on edges to '{first}' and '{second}'")]
    RepeatedDifference {
        difference: u32,
        first: String,
        second: String,
    },
}

/// Confirm that every label is a distinct pool value and every edge
/// difference is distinct
pub fn check(
    tree: &Tree,
    parents: &ParentRelation,
    labeling: &Labeling,
    pool: &CandidatePool,
) -> Result<(), Violation> {
    if labeling.len() != tree.len() {
        return Err(Violation::WrongSize {
            labeled: labeling.len(),
            nodes: tree.len(),
        });
    }

    let mut owners = HashMap::with_capacity(tree.len());
    for node in tree.nodes() {
        let label = labeling.label_of(node);
        if !pool.contains(label) {
            return Err(Violation::OutsidePool {
                node: tree.name(node).to_string(),
                label,
            });
        }
        if let Some(first) = owners.insert(label, node) {
            return Err(Violation::RepeatedLabel {
                label,
                first: tree.name(first).to_string(),
                second: tree.name(node).to_string(),
            });
        }
    }

    let mut differences = HashMap::with_capacity(tree.len());
    for (parent, child) in parents.edges() {
        let difference = labeling.label_of(child).abs_diff(labeling.label_of(parent));
        if let Some(first) = differences.insert(difference, child) {
            return Err(Violation::RepeatedDifference {
                difference,
                first: tree.name(first).to_string(),
                second: tree.name(child).to_string(),
            });
        }
    }

    Ok(())
}
