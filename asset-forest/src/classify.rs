//! Promotion of assets into category nodes
//!
//! Every asset is checked once against the classification rules. A match
//! moves the asset below a synthetic node of that category which hangs off
//! the asset's literal parent. The synthetic node is created the first time
//! it is needed and reused afterwards.

use std::collections::HashMap;

use tracing::trace;

use crate::category::NodeCategory;
use crate::forest::Forest;
use crate::node::{Node, NodeId, NodeKind};
use crate::rules::{self, Placement};
use crate::traverse::collect_ids;

/// Synthetic children by parent and category.
#[derive(Debug, Default)]
pub(crate) struct CustomNodeIndex {
    nodes: HashMap<(NodeId, NodeCategory), NodeId>,
}

impl CustomNodeIndex {
    /// Index the synthetic nodes already present in `forest`.
    pub(crate) fn scan(forest: &Forest) -> Self {
        let mut index = Self::default();
        for (position, node) in forest.nodes.iter().enumerate() {
            if let (NodeKind::Custom, Some(parent)) = (&node.kind, node.parent) {
                index.nodes.insert((parent, node.category), NodeId(position));
            }
        }
        index
    }

    /// The synthetic child of `parent` with `category`, created when missing.
    pub(crate) fn get_or_create(
        &mut self,
        forest: &mut Forest,
        parent: NodeId,
        category: NodeCategory,
    ) -> NodeId {
        if let Some(&id) = self.nodes.get(&(parent, category)) {
            return id;
        }
        let id = forest.push(Node::custom(category));
        forest.attach(parent, id);
        self.nodes.insert((parent, category), id);
        id
    }

    pub(crate) fn contains(&self, parent: NodeId, category: NodeCategory) -> bool {
        self.nodes.contains_key(&(parent, category))
    }
}

/// Run the promotion pass over every tree of the forest.
///
/// The set of nodes to visit is fixed before the first move, so synthetic
/// nodes created on the way are never classified themselves.
pub(crate) fn promote_all(forest: &mut Forest) {
    let mut index = CustomNodeIndex::scan(forest);
    let ownership = forest.ownership;
    let mut promoted = 0usize;

    for root in forest.roots.clone() {
        for id in collect_ids(forest, root) {
            let node = forest.vertex(id);
            let (Some(item), Some(parent)) = (node.item(), node.parent) else {
                continue;
            };
            let placement = Placement {
                is_root_direct_child: forest.vertex(parent).parent.is_none(),
                is_ship: node.is_ship,
            };
            let Some(category) = rules::classify(item, ownership, placement) else {
                continue;
            };

            trace!(item_id = item.item_id, %category, "promoting asset");
            let target = index.get_or_create(forest, parent, category);
            forest.detach(id);
            forest.attach(target, id);
            promoted += 1;
        }
    }

    trace!(promoted, "promotion pass finished");
}
