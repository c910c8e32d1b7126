//! Backtracking label search
//!
//! Nodes are decided one per depth, in [`NodeOrder`]. At each depth the
//! candidates are tried smallest first; a candidate is rejected if its label is
//! already used or if the difference to its parent's label is already used.
//! The first complete assignment found wins, so the result is fully determined
//! by the tree, the order and the pool.

use std::collections::HashSet;
use tracing::{debug, trace};

use super::pool::CandidatePool;
use crate::tree::{NodeIndex, NodeOrder, ParentRelation};

/// A complete assignment of labels, indexed by node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeling(Vec<u32>);

impl Labeling {
    pub fn label_of(&self, node: NodeIndex) -> u32 {
        self.0[node]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u32>> for Labeling {
    fn from(labels: Vec<u32>) -> Self {
        Self(labels)
    }
}

/// How a search run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Labeling),
    /// Every branch was explored without success
    Exhausted,
    /// The step budget ran out first
    OutOfBudget { steps: u64 },
}

/// Mutable state of a single search, threaded through every depth.
///
/// `used_values` holds one entry per assigned node and `used_differences` one
/// per assigned non-root node.
#[derive(Debug)]
struct SearchState {
    assignment: Vec<Option<u32>>,
    used_values: HashSet<u32>,
    used_differences: HashSet<u32>,
}

impl SearchState {
    fn new(nodes: usize) -> Self {
        Self {
            assignment: vec![None; nodes],
            used_values: HashSet::with_capacity(nodes),
            used_differences: HashSet::with_capacity(nodes),
        }
    }

    fn assign(&mut self, node: NodeIndex, value: u32, difference: Option<u32>) {
        self.assignment[node] = Some(value);
        self.used_values.insert(value);
        if let Some(d) = difference {
            self.used_differences.insert(d);
        }
    }

    fn unassign(&mut self, node: NodeIndex, value: u32, difference: Option<u32>) {
        self.assignment[node] = None;
        self.used_values.remove(&value);
        if let Some(d) = difference {
            self.used_differences.remove(&d);
        }
    }

    fn into_labeling(self) -> Option<Labeling> {
        self.assignment
            .into_iter()
            .collect::<Option<Vec<u32>>>()
            .map(Labeling)
    }
}

enum Descent {
    Solved,
    Failed,
    OutOfBudget,
}

/// Depth-first search for a labeling with distinct values and distinct edge
/// differences
pub struct LabelSearch<'a> {
    order: &'a NodeOrder,
    parents: &'a ParentRelation,
    pool: &'a CandidatePool,
    max_steps: Option<u64>,
    steps: u64,
}

impl<'a> LabelSearch<'a> {
    pub fn new(
        order: &'a NodeOrder,
        parents: &'a ParentRelation,
        pool: &'a CandidatePool,
    ) -> Self {
        Self {
            order,
            parents,
            pool,
            max_steps: None,
            steps: 0,
        }
    }

    /// Stop after `max_steps` nodes have been taken up for decision
    pub fn with_max_steps(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn run(mut self) -> SearchOutcome {
        let mut state = SearchState::new(self.parents.len());
        let descent = self.descend(&mut state, 0);
        debug!(steps = self.steps, "label search finished");

        match descent {
            Descent::Solved => match state.into_labeling() {
                Some(labeling) => SearchOutcome::Found(labeling),
                // The order did not cover every node
                None => SearchOutcome::Exhausted,
            },
            Descent::Failed => SearchOutcome::Exhausted,
            Descent::OutOfBudget => SearchOutcome::OutOfBudget { steps: self.steps },
        }
    }

    fn descend(&mut self, state: &mut SearchState, depth: usize) -> Descent {
        let Some(node) = self.order.get(depth) else {
            return Descent::Solved;
        };

        if self.max_steps.is_some_and(|limit| self.steps >= limit) {
            return Descent::OutOfBudget;
        }
        self.steps += 1;

        let parent = self.parents.parent_of(node);
        for candidate in self.pool.iter() {
            if state.used_values.contains(&candidate) {
                continue;
            }

            let difference = match parent {
                None => None,
                Some(parent) => {
                    // Unreachable while the order puts parents first
                    let Some(parent_label) = state.assignment[parent] else {
                        continue;
                    };
                    let d = candidate.abs_diff(parent_label);
                    if state.used_differences.contains(&d) {
                        continue;
                    }
                    Some(d)
                }
            };

            state.assign(node, candidate, difference);
            match self.descend(state, depth + 1) {
                Descent::Failed => state.unassign(node, candidate, difference),
                done => return done,
            }
        }

        trace!(depth, node, "backtracking");
        Descent::Failed
    }
}
