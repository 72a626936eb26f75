//! Engine configuration
//!
//! The engine needs a handful of game constants to decide whether an item is
//! a ship, a container or an office. They default to the current game values
//! and can be overridden through layered sources:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. Environment variables prefixed with `ASSET_FOREST_`
//!    (e.g. `ASSET_FOREST_OFFICE_TYPE_ID=27`)

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ForestError, Result};
use crate::types::{InventoryType, Item, TypeId};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "ASSET_FOREST_";

/// Game constants consulted while building a forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    /// Inventory category of ships.
    pub ship_category_id: i64,
    /// Type of corporation offices; such items become office folders.
    pub office_type_id: TypeId,
    /// Type of asset safety wraps, which hold items like containers do.
    pub asset_safety_wrap_type_id: TypeId,
    /// Groups of cargo, secure, audit log and freight containers.
    pub container_group_ids: Vec<i64>,
    /// Types skipped when building corporation forests.
    pub ignored_type_ids: Vec<TypeId>,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            ship_category_id: 6,
            office_type_id: 27,
            asset_safety_wrap_type_id: 60,
            container_group_ids: vec![12, 340, 448, 649],
            ignored_type_ids: vec![16159],
        }
    }
}

impl ForestConfig {
    /// Load configuration from defaults, an optional TOML file and the environment.
    ///
    /// A missing file is not an error; its layer is simply empty.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(ForestConfig::default()));
        if let Some(path) = file {
            debug!(path = %path.display(), "loading forest config file");
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: ForestConfig = figment.extract()?;
        config.validate()?;
        debug!(?config, "forest config loaded");
        Ok(config)
    }

    /// Reject values that would make every type decision meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.ship_category_id <= 0 {
            return Err(ForestError::invalid_value(
                "ship_category_id",
                "must be a positive category id",
            ));
        }
        if self.office_type_id <= 0 {
            return Err(ForestError::invalid_value(
                "office_type_id",
                "must be a positive type id",
            ));
        }
        Ok(())
    }

    pub fn is_ship(&self, type_: &InventoryType) -> bool {
        type_.category_id == self.ship_category_id
    }

    pub fn is_office(&self, type_: &InventoryType) -> bool {
        type_.id == self.office_type_id
    }

    pub fn is_ignored(&self, item: &Item) -> bool {
        item.type_
            .as_ref()
            .is_some_and(|t| self.ignored_type_ids.contains(&t.id))
    }

    /// Reports whether an item can hold other items.
    ///
    /// Only singletons qualify: ships, asset safety wraps and the container groups.
    pub fn is_container(&self, item: &Item) -> bool {
        if !item.is_singleton {
            return false;
        }
        let Some(type_) = item.type_.as_ref() else {
            return false;
        };
        self.is_ship(type_)
            || type_.id == self.asset_safety_wrap_type_id
            || self.container_group_ids.contains(&type_.group_id)
    }
}
