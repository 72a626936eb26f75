//! Input records supplied by the data layer

mod flag;
mod item;
mod location;

pub use flag::{LocationFlag, LocationType};
pub use item::{InventoryType, Item, ItemId, LocationId, TypeId};
pub use location::{Location, Ownership};
