//! Assembly of asset trees from flat inventory records
//!
//! Construction runs in three passes over an ordered working set of items:
//!
//! 1. Root discovery: every item whose container is not another item is
//!    checked against the known locations, and a root is created for each
//!    location that matches.
//! 2. Top-level attachment: items sitting directly in a root are attached.
//! 3. Recursive attachment: level by level, items sitting in an already
//!    placed item are attached below it until no more progress is made.
//!    Items are looked up by container, so each level only touches the
//!    items it attaches.
//!
//! Whatever is left in the working set afterwards references an unknown or
//! destroyed container and is dropped. The builder then promotes assets into
//! category nodes and completes the mandatory folders.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::category::NodeCategory;
use crate::classify;
use crate::completion;
use crate::config::ForestConfig;
use crate::forest::Forest;
use crate::node::{Node, NodeId, NodeKind};
use crate::traverse::collect_ids;
use crate::types::{Item, ItemId, Location, LocationId, Ownership};

/// Builds forests for one kind of owner.
///
/// ```
/// use asset_forest::{ForestBuilder, ForestConfig, Ownership};
///
/// let forest = ForestBuilder::new(Ownership::Corporation)
///     .with_config(ForestConfig::default())
///     .build(Vec::new(), Vec::new());
/// assert!(forest.trees().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ForestBuilder {
    ownership: Ownership,
    config: ForestConfig,
}

impl ForestBuilder {
    pub fn new(ownership: Ownership) -> Self {
        Self {
            ownership,
            config: ForestConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ForestConfig) -> Self {
        self.config = config;
        self
    }

    /// Build a forest from a snapshot of items and the locations they may sit in.
    ///
    /// Items sharing an id are kept once. Corporation snapshots skip the
    /// configured ignored types.
    pub fn build<I, L>(&self, items: I, locations: L) -> Forest
    where
        I: IntoIterator<Item = Item>,
        L: IntoIterator<Item = Location>,
    {
        let mut forest = Forest::with_ownership(self.ownership);

        let mut working: IndexMap<ItemId, Item> = IndexMap::new();
        let mut ignored = 0usize;
        for item in items {
            if self.ownership.is_corporation() && self.config.is_ignored(&item) {
                ignored += 1;
                continue;
            }
            working.entry(item.item_id).or_insert(item);
        }
        let total = working.len();

        let mut known: HashMap<LocationId, Location> = HashMap::new();
        for location in locations {
            known.entry(location.id).or_insert(location);
        }

        self.discover_roots(&mut forest, &working, &known);
        let mut by_container: HashMap<i64, Vec<ItemId>> = HashMap::new();
        for item in working.values() {
            by_container
                .entry(item.location_id)
                .or_default()
                .push(item.item_id);
        }
        let mut frontier = self.attach_to_roots(&mut forest, &mut working, &mut by_container);
        while !frontier.is_empty() && !working.is_empty() {
            frontier = self.attach_level(&mut forest, &mut working, &mut by_container, &frontier);
        }

        for item in working.values() {
            trace!(
                item_id = item.item_id,
                location_id = item.location_id,
                "dropping item with unresolvable container"
            );
        }
        let dropped = working.len();

        classify::promote_all(&mut forest);
        completion::complete(&mut forest);
        index_roots(&mut forest);

        debug!(
            ownership = ?self.ownership,
            items = total,
            ignored,
            dropped,
            roots = forest.roots.len(),
            nodes = forest.len(),
            "built asset forest"
        );
        forest
    }

    fn discover_roots(
        &self,
        forest: &mut Forest,
        working: &IndexMap<ItemId, Item>,
        known: &HashMap<LocationId, Location>,
    ) {
        for item in working.values() {
            if working.contains_key(&item.location_id)
                || forest.locations.contains_key(&item.location_id)
            {
                continue;
            }
            if let Some(location) = known.get(&item.location_id) {
                let id = forest.push(Node::location(location.clone()));
                forest.roots.push(id);
                forest.locations.insert(location.id, id);
            }
        }
    }

    fn attach_to_roots(
        &self,
        forest: &mut Forest,
        working: &mut IndexMap<ItemId, Item>,
        by_container: &mut HashMap<i64, Vec<ItemId>>,
    ) -> Vec<NodeId> {
        let parents: Vec<(i64, NodeId)> = forest
            .roots
            .iter()
            .filter_map(|&id| match &forest.vertex(id).kind {
                NodeKind::Location(location) => Some((location.id, id)),
                _ => None,
            })
            .collect();
        self.attach_matching(forest, working, by_container, &parents)
    }

    fn attach_level(
        &self,
        forest: &mut Forest,
        working: &mut IndexMap<ItemId, Item>,
        by_container: &mut HashMap<i64, Vec<ItemId>>,
        frontier: &[NodeId],
    ) -> Vec<NodeId> {
        let parents: Vec<(i64, NodeId)> = frontier
            .iter()
            .filter_map(|&id| forest.vertex(id).item().map(|item| (item.item_id, id)))
            .collect();
        self.attach_matching(forest, working, by_container, &parents)
    }

    /// Move the working items held by each of `parents` into the forest.
    ///
    /// Siblings keep their input order.
    fn attach_matching(
        &self,
        forest: &mut Forest,
        working: &mut IndexMap<ItemId, Item>,
        by_container: &mut HashMap<i64, Vec<ItemId>>,
        parents: &[(i64, NodeId)],
    ) -> Vec<NodeId> {
        let mut attached = Vec::new();
        for &(container, parent) in parents {
            let Some(held) = by_container.remove(&container) else {
                continue;
            };
            for item_id in held {
                let Some(item) = working.swap_remove(&item_id) else {
                    continue;
                };
                let id = forest.push(self.asset_node(item));
                forest.attach(parent, id);
                forest.items.insert(item_id, id);
                attached.push(id);
            }
        }
        attached
    }

    fn asset_node(&self, item: Item) -> Node {
        let is_office = item
            .type_
            .as_ref()
            .is_some_and(|t| self.config.is_office(t));
        let is_ship = item
            .type_
            .as_ref()
            .is_some_and(|t| self.config.is_ship(t));
        let is_container = is_office || self.config.is_container(&item);
        let category = if is_office {
            NodeCategory::OfficeFolder
        } else {
            NodeCategory::Asset
        };
        Node::asset(item, category, is_container, is_ship)
    }
}

/// Record the root of every item so it can be found without walking up.
fn index_roots(forest: &mut Forest) {
    let mut root_of_item = HashMap::with_capacity(forest.items.len());
    for &root in &forest.roots {
        for id in collect_ids(forest, root) {
            if let Some(item) = forest.vertex(id).item() {
                root_of_item.insert(item.item_id, root);
            }
        }
    }
    forest.root_of_item = root_of_item;
}

impl Forest {
    /// Build a forest with the default configuration.
    pub fn build<I, L>(items: I, locations: L, ownership: Ownership) -> Self
    where
        I: IntoIterator<Item = Item>,
        L: IntoIterator<Item = Location>,
    {
        ForestBuilder::new(ownership).build(items, locations)
    }

    pub fn from_character_assets<I, L>(items: I, locations: L) -> Self
    where
        I: IntoIterator<Item = Item>,
        L: IntoIterator<Item = Location>,
    {
        Self::build(items, locations, Ownership::Character)
    }

    /// Build a corporation forest. Ignored types such as the alliance
    /// pseudo item are skipped.
    pub fn from_corporation_assets<I, L>(items: I, locations: L) -> Self
    where
        I: IntoIterator<Item = Item>,
        L: IntoIterator<Item = Location>,
    {
        Self::build(items, locations, Ownership::Corporation)
    }
}
