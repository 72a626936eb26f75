//! Quantity aggregation
//!
//! Two kinds of totals are offered:
//!
//! - quantity sums, computed on demand ([`NodeRef::item_count_any`] and
//!   [`NodeRef::item_count_filtered`])
//! - stack counts, written once by [`Forest::update_item_counts`] and read
//!   back through [`NodeRef::item_count`]

use std::collections::HashMap;

use tracing::debug;

use crate::forest::Forest;
use crate::node::{NodeId, NodeKind, NodeRef};
use crate::traverse::collect_ids;

impl NodeRef<'_> {
    /// Sum of the quantities of every item in this subtree.
    pub fn item_count_any(&self) -> i64 {
        self.all().filter_map(|n| n.asset()).map(|item| item.quantity).sum()
    }

    /// Sum of quantities, skipping items that do not count.
    ///
    /// An item that reports no filtered quantity, such as a module fitted to
    /// a ship, removes its whole subtree from the total.
    pub fn item_count_filtered(&self) -> i64 {
        let mut total = 0;
        let mut stack = vec![*self];
        while let Some(node) = stack.pop() {
            if let Some(item) = node.asset() {
                match item.quantity_filtered() {
                    Some(quantity) => total += quantity,
                    None => continue,
                }
            }
            stack.extend(node.all_children());
        }
        total
    }
}

impl Forest {
    /// Filtered quantity summed over every tree.
    pub fn item_count_filtered(&self) -> i64 {
        self.roots().iter().map(|root| root.item_count_filtered()).sum()
    }

    /// Store the number of item stacks below every node that has children.
    ///
    /// A childless item counts as one stack. Empty folders and locations
    /// count as none. Nodes without children keep no count.
    pub fn update_item_counts(&mut self) {
        let roots = self.roots.clone();
        for &root in &roots {
            self.count_stacks(root);
        }
        debug!(roots = roots.len(), "updated item counts");
    }

    /// Children are visited before their parent by walking the pre-order
    /// list backwards, so every subtree total is final when it is read.
    fn count_stacks(&mut self, root: NodeId) {
        let ids = collect_ids(self, root);
        let mut totals: HashMap<NodeId, usize> = HashMap::with_capacity(ids.len());
        for &id in ids.iter().rev() {
            let node = self.vertex(id);
            let contribution = if node.children.is_empty() {
                match node.kind {
                    NodeKind::Asset(_) => 1,
                    NodeKind::Location(_) | NodeKind::Custom => 0,
                }
            } else {
                totals.get(&id).copied().unwrap_or_default()
            };
            let parent = node.parent;
            let stored = (!node.children.is_empty()).then_some(contribution);
            self.vertex_mut(id).item_count = stored;
            if let Some(parent) = parent {
                *totals.entry(parent).or_default() += contribution;
            }
        }
    }
}
