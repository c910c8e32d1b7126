//! Parent relation derived from a traversal of the tree

use super::builder::{NodeIndex, StructureError, Tree};
use tracing::debug;

/// Maps every node to its parent; the root maps to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRelation {
    parents: Vec<Option<NodeIndex>>,
    root: NodeIndex,
}

impl ParentRelation {
    /// Walk the tree depth-first from `root`, recording each child's parent.
    ///
    /// A node reached twice has two parents (or closes a cycle). A node never
    /// reached is disconnected from the root.
    pub fn build(tree: &Tree, root: NodeIndex) -> Result<Self, StructureError> {
        let mut parents: Vec<Option<NodeIndex>> = vec![None; tree.len()];
        let mut visited = vec![false; tree.len()];
        visited[root] = true;

        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            for &child in tree.children(current) {
                if visited[child] {
                    let first = match parents[child] {
                        Some(parent) => tree.name(parent).to_string(),
                        None => tree.name(current).to_string(),
                    };
                    return Err(StructureError::MultipleParents {
                        node: tree.name(child).to_string(),
                        first,
                        second: tree.name(current).to_string(),
                    });
                }
                visited[child] = true;
                parents[child] = Some(current);
                stack.push(child);
            }
        }

        let unreached: Vec<String> = tree
            .nodes()
            .filter(|&node| !visited[node])
            .map(|node| tree.name(node).to_string())
            .collect();
        if !unreached.is_empty() {
            return Err(StructureError::Disconnected { nodes: unreached });
        }

        debug!(root = %tree.name(root), "built parent relation");
        Ok(Self { parents, root })
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn parent_of(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.parents[node]
    }

    /// Number of nodes covered, root included
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// `(parent, child)` pairs for every non-root node
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| parent.map(|p| (p, child)))
    }
}
