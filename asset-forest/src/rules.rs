//! Static classification tables
//!
//! Maps location flags to node categories. Rules are consulted in a fixed
//! order and the first match wins:
//!
//! 1. Items floating in a solar system go to [`NodeCategory::InSpace`].
//! 2. Ownership-specific rules (corporation divisions, character hangars).
//! 3. The shared flag table.
//!
//! Items matching none of them stay where the builder put them.

use crate::category::NodeCategory;
use crate::types::{Item, LocationFlag, Ownership};

/// Where an asset sits, as seen by the rules.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    /// The asset's literal parent is a tree root.
    pub is_root_direct_child: bool,
    /// The asset's type is a ship.
    pub is_ship: bool,
}

/// Category an asset should be promoted into, if any.
pub fn classify(item: &Item, ownership: Ownership, placement: Placement) -> Option<NodeCategory> {
    if item.is_in_space() {
        return Some(NodeCategory::InSpace);
    }
    let specific = match ownership {
        Ownership::Corporation => corporation_flag_category(item.location_flag),
        Ownership::Character => character_category(item.location_flag, placement),
    };
    specific.or_else(|| shared_flag_category(item.location_flag))
}

fn character_category(flag: LocationFlag, placement: Placement) -> Option<NodeCategory> {
    if placement.is_root_direct_child {
        if placement.is_ship {
            return Some(NodeCategory::ShipHangar);
        }
        if flag == LocationFlag::Hangar {
            return Some(NodeCategory::ItemHangar);
        }
    }
    (flag == LocationFlag::AssetSafety).then_some(NodeCategory::AssetSafetyCharacter)
}

/// Flags with a fixed meaning for corporation assets only.
pub fn corporation_flag_category(flag: LocationFlag) -> Option<NodeCategory> {
    use LocationFlag::*;

    let category = match flag {
        AssetSafety => NodeCategory::AssetSafetyCorporation,
        CorpDeliveries => NodeCategory::Deliveries,
        CorpSag1 => NodeCategory::Office1,
        CorpSag2 => NodeCategory::Office2,
        CorpSag3 => NodeCategory::Office3,
        CorpSag4 => NodeCategory::Office4,
        CorpSag5 => NodeCategory::Office5,
        CorpSag6 => NodeCategory::Office6,
        CorpSag7 => NodeCategory::Office7,
        Impounded => NodeCategory::Impounded,
        _ => return None,
    };
    Some(category)
}

/// Flags with the same meaning for every owner.
pub fn shared_flag_category(flag: LocationFlag) -> Option<NodeCategory> {
    use LocationFlag::*;

    let category = match flag {
        Cargo => NodeCategory::CargoBay,
        DroneBay => NodeCategory::DroneBay,
        FighterBay | FighterTube0 | FighterTube1 | FighterTube2 | FighterTube3 | FighterTube4 => {
            NodeCategory::FighterBay
        }
        FrigateEscapeBay => NodeCategory::FrigateEscapeBay,
        SpecializedFuelBay => NodeCategory::FuelBay,
        ShipHangar => NodeCategory::ShipHangar,
        CapsuleerDeliveries => NodeCategory::Deliveries,
        FleetHangar
        | MobileDepotHold
        | MoonMaterialBay
        | QuafeBay
        | StructureDeedBay
        | SpecializedAmmoHold
        | SpecializedAsteroidHold
        | SpecializedCommandCenterHold
        | SpecializedGasHold
        | SpecializedIceHold
        | SpecializedIndustrialShipHold
        | SpecializedLargeShipHold
        | SpecializedMaterialBay
        | SpecializedMediumShipHold
        | SpecializedMineralHold
        | SpecializedOreHold
        | SpecializedPlanetaryCommoditiesHold
        | SpecializedSalvageHold
        | SpecializedShipHold
        | SpecializedSmallShipHold => NodeCategory::CargoBay,
        f if f.is_fitting_slot() => NodeCategory::Fitting,
        _ => return None,
    };
    Some(category)
}
