//! Tree construction from raw parent -> children records

use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

/// Position of a node in the tree's declaration order
pub type NodeIndex = usize;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("The tree is empty")]
    Empty,

    #[error("No root found. The tree might have cycles")]
    NoRoot,

    #[error("Multiple roots detected: {}", roots.join(", "))]
    MultipleRoots { roots: Vec<String> },

    #[error("Node '{node}' is declared more than once")]
    DuplicateRecord { node: String },

    #[error("Node '{child}' is a child of '{parent}' but has no record of its own")]
    UndeclaredNode { parent: String, child: String },

    #[error("Multiple parents detected for node '{node}' ('{first}' and '{second}')")]
    MultipleParents {
        node: String,
        first: String,
        second: String,
    },

    #[error("Nodes not reachable from the root: {}", nodes.join(", "))]
    Disconnected { nodes: Vec<String> },

    #[error("The tree has {nodes} nodes; at most {max} can be labeled")]
    TooLarge { nodes: usize, max: usize },
}

/// One line of input: a node followed by its children, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRecord {
    pub node: String,
    pub children: Vec<String>,
}

impl TreeRecord {
    pub fn new<S: Into<String>>(node: S, children: impl IntoIterator<Item = S>) -> Self {
        Self {
            node: node.into(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }
}

/// A validated tree.
///
/// Nodes are stored in the order their records were read, so iteration, root
/// discovery and output formatting are reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    names: Vec<String>,
    children: Vec<Vec<NodeIndex>>,
    root: NodeIndex,
}

impl Tree {
    /// Number of nodes
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn name(&self, node: NodeIndex) -> &str {
        &self.names[node]
    }

    pub fn children(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.children[node]
    }

    /// Node indices in declaration order
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> {
        0..self.names.len()
    }
}

/// Builds a [`Tree`] from input records
pub struct TreeBuilder;

impl TreeBuilder {
    /// Build a tree and discover its unique root.
    ///
    /// The root is the one declared node that never appears as a child.
    pub fn build(records: &[TreeRecord]) -> Result<Tree, StructureError> {
        if records.is_empty() {
            return Err(StructureError::Empty);
        }

        let mut index = HashMap::with_capacity(records.len());
        let mut names = Vec::with_capacity(records.len());
        for record in records {
            if index.insert(record.node.clone(), names.len()).is_some() {
                return Err(StructureError::DuplicateRecord {
                    node: record.node.clone(),
                });
            }
            names.push(record.node.clone());
        }

        let mut children = Vec::with_capacity(records.len());
        let mut referenced = HashSet::new();
        for record in records {
            let mut resolved = Vec::with_capacity(record.children.len());
            for child in &record.children {
                let Some(&child_index) = index.get(child) else {
                    return Err(StructureError::UndeclaredNode {
                        parent: record.node.clone(),
                        child: child.clone(),
                    });
                };
                referenced.insert(child_index);
                resolved.push(child_index);
            }
            children.push(resolved);
        }

        let root = Self::find_root(&names, &referenced)?;
        debug!(nodes = names.len(), root = %names[root], "built tree");

        Ok(Tree {
            names,
            children,
            root,
        })
    }

    fn find_root(
        names: &[String],
        referenced: &HashSet<NodeIndex>,
    ) -> Result<NodeIndex, StructureError> {
        let candidates: Vec<NodeIndex> = (0..names.len())
            .filter(|node| !referenced.contains(node))
            .collect();

        match candidates.as_slice() {
            [] => Err(StructureError::NoRoot),
            [root] => Ok(*root),
            _ => Err(StructureError::MultipleRoots {
                roots: candidates.iter().map(|&n| names[n].clone()).collect(),
            }),
        }
    }
}
