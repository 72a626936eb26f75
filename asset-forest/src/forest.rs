//! The forest of asset trees and its query API
//!
//! A [`Forest`] holds one tree per location that anchors at least one item.
//! It is built once per snapshot (see [`ForestBuilder`](crate::ForestBuilder)) and afterwards only
//! changes through [`Forest::apply_filter`] and
//! [`Forest::update_item_counts`], which toggle flags and write derived
//! counts without moving nodes.
//!
//! A default-constructed forest is empty: every lookup returns `None` and
//! every listing is empty.

use std::collections::HashMap;

use crate::node::{Node, NodeId, NodeRef};
use crate::types::{ItemId, Location, LocationId, Ownership};

/// A collection of asset trees, one per root location.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    pub(crate) ownership: Ownership,
    pub(crate) nodes: Vec<Node>,
    /// Root nodes in the order their locations were first seen.
    pub(crate) roots: Vec<NodeId>,
    pub(crate) locations: HashMap<LocationId, NodeId>,
    pub(crate) items: HashMap<ItemId, NodeId>,
    pub(crate) root_of_item: HashMap<ItemId, NodeId>,
}

impl Forest {
    pub(crate) fn with_ownership(ownership: Ownership) -> Self {
        Self {
            ownership,
            ..Default::default()
        }
    }

    // --- Arena ---

    pub(crate) fn vertex(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn vertex_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Append `child` to `parent`'s children and point it back at `parent`.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.vertex(child).parent.is_none(), "child already attached");
        self.vertex_mut(child).parent = Some(parent);
        self.vertex_mut(parent).children.push(child);
    }

    /// Remove `child` from its parent's children and clear its parent link.
    pub(crate) fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.vertex_mut(child).parent.take() {
            self.vertex_mut(parent).children.retain(|&c| c != child);
        }
    }

    // --- Queries ---

    /// Who owns the items in this forest.
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Number of nodes across all trees, synthetic nodes included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// View of a node by its arena handle.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    /// The node wrapping the item with `item_id`.
    pub fn node(&self, item_id: ItemId) -> Option<NodeRef<'_>> {
        self.items.get(&item_id).map(|&id| NodeRef::new(self, id))
    }

    /// The root of the tree containing the item with `item_id`.
    pub fn root_location_node(&self, item_id: ItemId) -> Option<NodeRef<'_>> {
        self.root_of_item
            .get(&item_id)
            .map(|&id| NodeRef::new(self, id))
    }

    /// The root node for a location, even when all its children are filtered out.
    pub fn location(&self, location_id: LocationId) -> Option<NodeRef<'_>> {
        self.locations
            .get(&location_id)
            .map(|&id| NodeRef::new(self, id))
    }

    /// Roots that have at least one visible child.
    pub fn trees(&self) -> Vec<NodeRef<'_>> {
        self.roots
            .iter()
            .map(|&id| NodeRef::new(self, id))
            .filter(|root| root.children_count() > 0)
            .collect()
    }

    /// The `Location` records behind the roots returned by [`Forest::trees`],
    /// in the same order. Use `trees` for the root nodes themselves.
    pub fn locations(&self) -> Vec<&Location> {
        self.trees()
            .into_iter()
            .filter_map(|root| root.location())
            .collect()
    }

    /// Every root, including those without visible children.
    pub fn roots(&self) -> Vec<NodeRef<'_>> {
        self.roots.iter().map(|&id| NodeRef::new(self, id)).collect()
    }
}
