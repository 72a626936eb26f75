//! Lazy depth-first traversal of subtrees.
//!
//! Both iterators yield the start node first and then its children in
//! insertion order. They hold only a stack of pending ids, so a fresh call to
//! [`NodeRef::all`](crate::NodeRef::all) walks the subtree again from scratch.

use crate::forest::Forest;
use crate::node::{NodeId, NodeRef};

/// Pre-order walk over every node of a subtree.
pub struct Descendants<'a> {
    forest: &'a Forest,
    stack: Vec<NodeId>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(forest: &'a Forest, start: NodeId) -> Self {
        Self {
            forest,
            stack: vec![start],
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.forest.vertex(id).children.iter().rev().copied());
        Some(NodeRef::new(self.forest, id))
    }
}

/// Pre-order walk that prunes subtrees rooted at excluded nodes.
///
/// The start node is always yielded.
pub struct VisibleDescendants<'a> {
    forest: &'a Forest,
    stack: Vec<NodeId>,
}

impl<'a> VisibleDescendants<'a> {
    pub(crate) fn new(forest: &'a Forest, start: NodeId) -> Self {
        Self {
            forest,
            stack: vec![start],
        }
    }
}

impl<'a> Iterator for VisibleDescendants<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let forest = self.forest;
        let id = self.stack.pop()?;
        self.stack.extend(
            forest
                .vertex(id)
                .children
                .iter()
                .rev()
                .copied()
                .filter(|&c| !forest.vertex(c).is_excluded),
        );
        Some(NodeRef::new(forest, id))
    }
}

/// Ids of a subtree in pre-order, collected up front so the arena can be
/// mutated while the list is processed.
pub(crate) fn collect_ids(forest: &Forest, start: NodeId) -> Vec<NodeId> {
    Descendants::new(forest, start)
        .map(|n| n.node_id())
        .collect()
}
