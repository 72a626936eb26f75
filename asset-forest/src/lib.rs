//! Containment trees for inventory snapshots
//!
//! `asset-forest` turns a flat list of inventory records into one tree per
//! location and groups the items into folders that are not present in the
//! raw data: item and ship hangars, cargo and drone bays, fittings, the
//! seven divisions of a corporation office, deliveries, asset safety and
//! so on.
//!
//! # Architecture
//!
//! - **Arena**: nodes live in one `Vec` and link to each other by [`NodeId`]
//! - **Build once**: a [`Forest`] is built from a full snapshot and never
//!   re-parented afterwards
//! - **Mutable flags only**: [`Forest::apply_filter`] and
//!   [`Forest::update_item_counts`] write flags and counts, nothing else
//! - **Infallible queries**: lookups return `Option`, listings return
//!   possibly empty `Vec`s, also on a default-constructed forest
//!
//! ```
//! use asset_forest::{Filter, Forest, InventoryType, Item, Location, LocationFlag, LocationType};
//!
//! let item = Item {
//!     item_id: 1,
//!     location_id: 60003760,
//!     location_flag: LocationFlag::Hangar,
//!     location_type: LocationType::Station,
//!     quantity: 100,
//!     is_singleton: false,
//!     is_blueprint_copy: false,
//!     name: None,
//!     type_: Some(InventoryType::new(34, "Tritanium", 18, 4)),
//! };
//! let mut forest = Forest::from_character_assets(
//!     vec![item],
//!     vec![Location::new(60003760, "Jita IV - Moon 4")],
//! );
//!
//! let node = forest.node(1).unwrap();
//! let names: Vec<String> = node.ancestors().iter().map(|n| n.display_name()).collect();
//! assert_eq!(names, ["Jita IV - Moon 4", "Item Hangar"]);
//!
//! forest.apply_filter(Filter::Deliveries);
//! assert!(forest.trees().is_empty());
//! ```

mod builder;
pub mod category;
mod classify;
mod completion;
pub mod config;
mod count;
mod display;
pub mod error;
pub mod filter;
mod forest;
mod node;
pub mod rules;
mod traverse;
pub mod types;

pub use builder::ForestBuilder;
pub use category::NodeCategory;
pub use config::ForestConfig;
pub use error::{ForestError, Result};
pub use filter::Filter;
pub use forest::Forest;
pub use node::{NodeId, NodeKind, NodeRef};
pub use traverse::{Descendants, VisibleDescendants};
pub use types::{
    InventoryType, Item, ItemId, Location, LocationFlag, LocationId, LocationType, Ownership,
    TypeId,
};
