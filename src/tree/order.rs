//! Breadth-first visiting order for the label search

use std::collections::VecDeque;

use super::builder::{NodeIndex, Tree};

/// Every node exactly once, each parent before its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeOrder(Vec<NodeIndex>);

impl NodeOrder {
    /// Root first, then its children in record order, then theirs, and so on
    pub fn breadth_first(tree: &Tree, root: NodeIndex) -> Self {
        let mut order = Vec::with_capacity(tree.len());
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            order.push(current);
            queue.extend(tree.children(current).iter().copied());
        }
        Self(order)
    }

    pub fn get(&self, position: usize) -> Option<NodeIndex> {
        self.0.get(position).copied()
    }
}
