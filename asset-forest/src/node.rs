//! Arena vertices and the borrowed view handed out by queries
//!
//! Nodes live in a single `Vec` owned by the [`Forest`](crate::Forest) and
//! refer to each other by [`NodeId`]. Parent and child links are indices, so
//! re-parenting never fights the borrow checker and there are no cycles of
//! ownership.

use std::fmt;

use crate::category::NodeCategory;
use crate::forest::Forest;
use crate::traverse::{Descendants, VisibleDescendants};
use crate::types::{Item, Location};

/// Index of a node inside its forest's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Payload of a node. Exactly one of the three shapes applies.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Wraps an inventory item.
    Asset(Item),
    /// Wraps a real location; only roots carry this.
    Location(Location),
    /// Synthetic grouping node with no backing record.
    Custom,
}

/// A single vertex of the forest.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) category: NodeCategory,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) is_container: bool,
    pub(crate) is_ship: bool,
    pub(crate) is_excluded: bool,
    pub(crate) item_count: Option<usize>,
}

impl Node {
    pub(crate) fn location(location: Location) -> Self {
        Self {
            kind: NodeKind::Location(location),
            category: NodeCategory::Location,
            parent: None,
            children: Vec::new(),
            is_container: true,
            is_ship: false,
            is_excluded: false,
            item_count: None,
        }
    }

    pub(crate) fn asset(item: Item, category: NodeCategory, is_container: bool, is_ship: bool) -> Self {
        Self {
            kind: NodeKind::Asset(item),
            category,
            parent: None,
            children: Vec::new(),
            is_container,
            is_ship,
            is_excluded: false,
            item_count: None,
        }
    }

    /// Create a synthetic grouping node.
    ///
    /// # Panics
    ///
    /// Panics when `category` is `Asset`, `Location` or `Undefined`. That is a
    /// defect in the calling code, not a data problem.
    pub(crate) fn custom(category: NodeCategory) -> Self {
        assert!(
            category.is_custom(),
            "invalid category for custom node: {category}"
        );
        Self {
            kind: NodeKind::Custom,
            category,
            parent: None,
            children: Vec::new(),
            is_container: true,
            is_ship: false,
            is_excluded: false,
            item_count: None,
        }
    }

    pub(crate) fn item(&self) -> Option<&Item> {
        match &self.kind {
            NodeKind::Asset(item) => Some(item),
            _ => None,
        }
    }
}

/// Read-only view of one node, borrowed from its forest.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    forest: &'a Forest,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(forest: &'a Forest, id: NodeId) -> Self {
        Self { forest, id }
    }

    fn node(&self) -> &'a Node {
        self.forest.vertex(self.id)
    }

    /// Arena handle of this node.
    pub fn node_id(&self) -> NodeId {
        self.id
    }

    /// Item id or location id. Synthetic nodes have none.
    pub fn id(&self) -> Option<i64> {
        match &self.node().kind {
            NodeKind::Asset(item) => Some(item.item_id),
            NodeKind::Location(location) => Some(location.id),
            NodeKind::Custom => None,
        }
    }

    pub fn kind(&self) -> &'a NodeKind {
        &self.node().kind
    }

    pub fn category(&self) -> NodeCategory {
        self.node().category
    }

    pub fn asset(&self) -> Option<&'a Item> {
        self.node().item()
    }

    pub fn location(&self) -> Option<&'a Location> {
        match &self.node().kind {
            NodeKind::Location(location) => Some(location),
            _ => None,
        }
    }

    pub fn is_container(&self) -> bool {
        self.node().is_container
    }

    pub fn is_ship(&self) -> bool {
        self.node().is_ship
    }

    pub fn is_excluded(&self) -> bool {
        self.node().is_excluded
    }

    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    pub fn is_root_direct_child(&self) -> bool {
        self.parent().is_some_and(|p| p.is_root())
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|id| NodeRef::new(self.forest, id))
    }

    /// Visible children in insertion order. Excluded children are skipped.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        self.node()
            .children
            .iter()
            .map(|&id| NodeRef::new(self.forest, id))
            .filter(|c| !c.is_excluded())
            .collect()
    }

    /// Every child, excluded ones included.
    pub(crate) fn all_children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let forest = self.forest;
        self.node()
            .children
            .iter()
            .map(move |&id| NodeRef::new(forest, id))
    }

    pub fn children_count(&self) -> usize {
        self.node()
            .children
            .iter()
            .filter(|&&id| !self.forest.vertex(id).is_excluded)
            .count()
    }

    /// Stack count written by [`Forest::update_item_counts`].
    pub fn item_count(&self) -> Option<usize> {
        self.node().item_count
    }

    /// Name shown in trees.
    pub fn display_name(&self) -> String {
        match &self.node().kind {
            NodeKind::Location(location) => location.display_name(),
            NodeKind::Asset(item) if self.category() == NodeCategory::Asset => item.display_name(),
            _ => self.category().display_name().to_string(),
        }
    }

    /// Nodes from the root down to the parent of this node.
    pub fn ancestors(&self) -> Vec<NodeRef<'a>> {
        let mut nodes = Vec::new();
        let mut current = self.parent();
        while let Some(n) = current {
            nodes.push(n);
            current = n.parent();
        }
        nodes.reverse();
        nodes
    }

    /// Nodes from the root down to and including this node.
    pub fn path(&self) -> Vec<NodeRef<'a>> {
        let mut nodes = self.ancestors();
        nodes.push(*self);
        nodes
    }

    /// Depth-first walk over this subtree, including excluded nodes.
    pub fn all(&self) -> Descendants<'a> {
        Descendants::new(self.forest, self.id)
    }

    /// Depth-first walk that skips every subtree rooted at an excluded node.
    pub fn all_visible(&self) -> VisibleDescendants<'a> {
        VisibleDescendants::new(self.forest, self.id)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.forest, other.forest) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("category", &self.category())
            .field("name", &self.display_name())
            .finish()
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id() {
            Some(id) => write!(f, "{} (#{})", self.display_name(), id),
            None => write!(f, "{}", self.display_name()),
        }
    }
}
