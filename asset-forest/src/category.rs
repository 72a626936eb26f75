//! Node categories
//!
//! [`NodeCategory::Asset`] marks item nodes and [`NodeCategory::Location`] marks
//! roots. All other categories belong to synthetic grouping nodes, except
//! [`NodeCategory::OfficeFolder`], which is also given to office items so that
//! their divisions can be completed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a node in an asset tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    #[default]
    Undefined,
    Asset,
    AssetSafetyCharacter,
    AssetSafetyCorporation,
    CargoBay,
    Deliveries,
    DroneBay,
    FighterBay,
    Fitting,
    FrigateEscapeBay,
    FuelBay,
    Impounded,
    InSpace,
    ItemHangar,
    Location,
    OfficeFolder,
    Office1,
    Office2,
    Office3,
    Office4,
    Office5,
    Office6,
    Office7,
    ShipHangar,
}

impl NodeCategory {
    /// The seven corporation hangar divisions, in display order.
    pub const OFFICE_DIVISIONS: [NodeCategory; 7] = [
        NodeCategory::Office1,
        NodeCategory::Office2,
        NodeCategory::Office3,
        NodeCategory::Office4,
        NodeCategory::Office5,
        NodeCategory::Office6,
        NodeCategory::Office7,
    ];

    /// Human readable name used for synthetic nodes.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Asset => "Asset",
            Self::AssetSafetyCharacter | Self::AssetSafetyCorporation => "Asset Safety",
            Self::CargoBay => "Cargo Bay",
            Self::Deliveries => "Deliveries",
            Self::DroneBay => "Drone Bay",
            Self::FighterBay => "Fighter Bay",
            Self::Fitting => "Fitting",
            Self::FrigateEscapeBay => "Frigate Escape Bay",
            Self::FuelBay => "Fuel Bay",
            Self::Impounded => "Impounded",
            Self::InSpace => "In Space",
            Self::ItemHangar => "Item Hangar",
            Self::Location => "Location",
            Self::OfficeFolder => "Office",
            Self::Office1 => "1st Division",
            Self::Office2 => "2nd Division",
            Self::Office3 => "3rd Division",
            Self::Office4 => "4th Division",
            Self::Office5 => "5th Division",
            Self::Office6 => "6th Division",
            Self::Office7 => "7th Division",
            Self::ShipHangar => "Ship Hangar",
        }
    }

    /// Reports whether a synthetic node may carry this category.
    pub fn is_custom(&self) -> bool {
        !matches!(self, Self::Asset | Self::Location | Self::Undefined)
    }

    /// Reports whether this is one of the seven office divisions.
    pub fn is_office_division(&self) -> bool {
        Self::OFFICE_DIVISIONS.contains(self)
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
