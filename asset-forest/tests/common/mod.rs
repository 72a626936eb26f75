//! Shared fixtures for the integration tests
//!
//! Items are created from [`AssetParams`], which fills in the same defaults
//! for every test: a quantity of one, the `Hangar` flag, an item container
//! and the Tritanium type.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};

use asset_forest::{Forest, InventoryType, Item, LocationFlag, LocationType};

static SEQUENCE: AtomicI64 = AtomicI64::new(1_000_000_000);

pub fn tritanium_type() -> InventoryType {
    InventoryType::new(34, "Tritanium", 18, 4)
}

pub fn office_type() -> InventoryType {
    InventoryType::new(27, "Office", 0, 3)
}

pub fn cargo_container_type() -> InventoryType {
    InventoryType::new(3293, "Container", 12, 2)
}

pub fn ship_type() -> InventoryType {
    InventoryType::new(603, "Merlin", 25, 6)
}

pub fn drone_type() -> InventoryType {
    InventoryType::new(2454, "Hobgoblin I", 100, 18)
}

pub fn asset_safety_wrap_type() -> InventoryType {
    InventoryType::new(60, "Asset Safety Wrap", 1319, 29)
}

pub fn customs_office_type() -> InventoryType {
    InventoryType::new(2233, "Customs Office", 1025, 46)
}

#[derive(Debug, Clone, Default)]
pub struct AssetParams {
    pub item_id: Option<i64>,
    pub is_singleton: bool,
    pub location_flag: Option<LocationFlag>,
    pub location_id: i64,
    pub location_type: Option<LocationType>,
    pub name: Option<String>,
    pub quantity: i64,
    pub type_: Option<InventoryType>,
}

impl AssetParams {
    pub fn at(location_id: i64) -> Self {
        Self {
            location_id,
            ..Default::default()
        }
    }

    pub fn id(mut self, item_id: i64) -> Self {
        self.item_id = Some(item_id);
        self
    }

    pub fn flag(mut self, flag: LocationFlag) -> Self {
        self.location_flag = Some(flag);
        self
    }

    pub fn kind(mut self, location_type: LocationType) -> Self {
        self.location_type = Some(location_type);
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn singleton(mut self) -> Self {
        self.is_singleton = true;
        self
    }

    pub fn of_type(mut self, type_: InventoryType) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn create(self) -> Item {
        Item {
            item_id: self
                .item_id
                .unwrap_or_else(|| SEQUENCE.fetch_add(1, Ordering::Relaxed)),
            location_id: self.location_id,
            location_flag: self.location_flag.unwrap_or(LocationFlag::Hangar),
            location_type: self.location_type.unwrap_or(LocationType::Item),
            quantity: if self.quantity == 0 { 1 } else { self.quantity },
            is_singleton: self.is_singleton,
            is_blueprint_copy: false,
            name: self.name,
            type_: Some(self.type_.unwrap_or_else(tritanium_type)),
        }
    }
}

/// Display names from the root down to the parent of the item.
pub fn names_path(forest: &Forest, item: &Item) -> Vec<String> {
    forest
        .node(item.item_id)
        .expect("item must be in the forest")
        .ancestors()
        .iter()
        .map(|n| n.display_name())
        .collect()
}

/// Stack counts from the root down to the parent of the item.
pub fn counts_path(forest: &Forest, item: &Item) -> Vec<usize> {
    forest
        .node(item.item_id)
        .expect("item must be in the forest")
        .ancestors()
        .iter()
        .map(|n| n.item_count().unwrap_or(0))
        .collect()
}

/// Visible children count of a location root.
pub fn location_children(forest: &Forest, location_id: i64) -> usize {
    forest
        .location(location_id)
        .expect("location must have a root")
        .children_count()
}
