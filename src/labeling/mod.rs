//! Labeling pipeline: validate the tree, order it, search, project the result

mod engine;
mod pool;
pub mod verify;

pub use engine::{LabelSearch, Labeling, SearchOutcome};
pub use pool::{CandidatePool, MAX_NODES};

use tracing::{debug, info};

use crate::output::LabeledTree;
use crate::tree::{NodeOrder, ParentRelation, StructureError, TreeBuilder, TreeRecord};

/// Knobs for a single labeling run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Give up after this many search steps; unlimited when `None`
    pub max_steps: Option<u64>,
}

/// Result of a labeling run.
///
/// A structure that cannot be labeled is a normal answer and is kept apart from
/// input that is not a tree at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Labeled(LabeledTree),
    Unsatisfiable,
    BudgetExhausted { steps: u64 },
    InvalidStructure(StructureError),
}

impl Outcome {
    pub fn is_labeled(&self) -> bool {
        matches!(self, Outcome::Labeled(_))
    }
}

/// Find the first odd-graceful labeling of the tree described by `records`.
///
/// Candidates are tried in ascending order at each node, nodes are taken
/// breadth-first from the root, and the first complete assignment is
/// returned. Running twice on the same records yields the same labeling.
pub fn solve(records: &[TreeRecord], options: &SearchOptions) -> Outcome {
    let tree = match TreeBuilder::build(records) {
        Ok(tree) => tree,
        Err(e) => return Outcome::InvalidStructure(e),
    };
    let parents = match ParentRelation::build(&tree, tree.root()) {
        Ok(parents) => parents,
        Err(e) => return Outcome::InvalidStructure(e),
    };
    let Some(pool) = CandidatePool::odd(tree.len()) else {
        return Outcome::InvalidStructure(StructureError::TooLarge {
            nodes: tree.len(),
            max: MAX_NODES,
        });
    };
    let order = NodeOrder::breadth_first(&tree, tree.root());

    debug!(
        nodes = tree.len(),
        max_steps = ?options.max_steps,
        "starting label search"
    );
    let outcome = LabelSearch::new(&order, &parents, &pool)
        .with_max_steps(options.max_steps)
        .run();

    match outcome {
        SearchOutcome::Found(labeling) => {
            debug_assert_eq!(verify::check(&tree, &parents, &labeling, &pool), Ok(()));
            info!(nodes = tree.len(), "found graceful labeling");
            Outcome::Labeled(LabeledTree::project(&tree, &labeling))
        }
        SearchOutcome::Exhausted => Outcome::Unsatisfiable,
        SearchOutcome::OutOfBudget { steps } => Outcome::BudgetExhausted { steps },
    }
}
