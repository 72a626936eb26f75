//! Inventory items and the type descriptors attached to them.

use serde::{Deserialize, Serialize};

use super::flag::{LocationFlag, LocationType};

/// Identifier of an inventory item.
pub type ItemId = i64;

/// Identifier of a location (station, structure, solar system).
pub type LocationId = i64;

/// Identifier of an inventory type.
pub type TypeId = i64;

/// Inventory type of an item, as resolved by the static data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryType {
    pub id: TypeId,
    pub name: String,
    pub group_id: i64,
    pub category_id: i64,
}

impl InventoryType {
    pub fn new(id: TypeId, name: impl Into<String>, group_id: i64, category_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            group_id,
            category_id,
        }
    }
}

/// A single inventory record owned by a character or a corporation.
///
/// `location_id` names the container the item sits in, which is either
/// another item or a real location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: ItemId,
    pub location_id: i64,
    #[serde(default)]
    pub location_flag: LocationFlag,
    #[serde(default)]
    pub location_type: LocationType,
    pub quantity: i64,
    #[serde(default)]
    pub is_singleton: bool,
    #[serde(default)]
    pub is_blueprint_copy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<InventoryType>,
}

impl Item {
    /// Name of the item's type, or an empty string when the type is unknown.
    pub fn type_name(&self) -> &str {
        self.type_.as_ref().map(|t| t.name.as_str()).unwrap_or("")
    }

    /// Name shown in trees: `Type "Custom name"` for named items,
    /// otherwise the type name, marked when it is a blueprint copy.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => format!("{} \"{}\"", self.type_name(), name),
            _ if self.is_blueprint_copy => format!("{} (Copy)", self.type_name()),
            _ => self.type_name().to_string(),
        }
    }

    /// Reports whether the item floats in space rather than sitting in a station or structure.
    pub fn is_in_space(&self) -> bool {
        self.location_type == LocationType::SolarSystem
    }

    /// Quantity counted towards filtered totals.
    ///
    /// Returns `None` for modules mounted in a fitting slot.
    pub fn quantity_filtered(&self) -> Option<i64> {
        if self.location_flag.is_fitting_slot() {
            return None;
        }
        Some(self.quantity)
    }
}
