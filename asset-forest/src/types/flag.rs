//! Location flags and container kinds as reported for inventory items.

use serde::{Deserialize, Serialize};

/// Where within its container an item sits.
///
/// Values serialize with the exact spelling used by the game API
/// (`"HiSlot3"`, `"CorpSAG1"`, ...). Anything not listed here deserializes
/// to [`LocationFlag::Undefined`] and is never reclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LocationFlag {
    AssetSafety,
    AutoFit,
    BoosterBay,
    CapsuleerDeliveries,
    Cargo,
    CorpDeliveries,
    #[serde(rename = "CorpSAG1")]
    CorpSag1,
    #[serde(rename = "CorpSAG2")]
    CorpSag2,
    #[serde(rename = "CorpSAG3")]
    CorpSag3,
    #[serde(rename = "CorpSAG4")]
    CorpSag4,
    #[serde(rename = "CorpSAG5")]
    CorpSag5,
    #[serde(rename = "CorpSAG6")]
    CorpSag6,
    #[serde(rename = "CorpSAG7")]
    CorpSag7,
    CorporationGoalDeliveries,
    CorpseBay,
    Deliveries,
    DroneBay,
    FighterBay,
    FighterTube0,
    FighterTube1,
    FighterTube2,
    FighterTube3,
    FighterTube4,
    FleetHangar,
    FrigateEscapeBay,
    Hangar,
    HangarAll,
    HiSlot0,
    HiSlot1,
    HiSlot2,
    HiSlot3,
    HiSlot4,
    HiSlot5,
    HiSlot6,
    HiSlot7,
    HiddenModifiers,
    Impounded,
    Implant,
    InfrastructureHangar,
    LoSlot0,
    LoSlot1,
    LoSlot2,
    LoSlot3,
    LoSlot4,
    LoSlot5,
    LoSlot6,
    LoSlot7,
    Locked,
    MedSlot0,
    MedSlot1,
    MedSlot2,
    MedSlot3,
    MedSlot4,
    MedSlot5,
    MedSlot6,
    MedSlot7,
    MobileDepotHold,
    MoonMaterialBay,
    OfficeFolder,
    QuafeBay,
    RigSlot0,
    RigSlot1,
    RigSlot2,
    RigSlot3,
    RigSlot4,
    RigSlot5,
    RigSlot6,
    RigSlot7,
    ShipHangar,
    Skill,
    SpecializedAmmoHold,
    SpecializedAsteroidHold,
    SpecializedCommandCenterHold,
    SpecializedFuelBay,
    SpecializedGasHold,
    SpecializedIceHold,
    SpecializedIndustrialShipHold,
    SpecializedLargeShipHold,
    SpecializedMaterialBay,
    SpecializedMediumShipHold,
    SpecializedMineralHold,
    SpecializedOreHold,
    SpecializedPlanetaryCommoditiesHold,
    SpecializedSalvageHold,
    SpecializedShipHold,
    SpecializedSmallShipHold,
    StructureDeedBay,
    SubSystemBay,
    SubSystemSlot0,
    SubSystemSlot1,
    SubSystemSlot2,
    SubSystemSlot3,
    SubSystemSlot4,
    SubSystemSlot5,
    SubSystemSlot6,
    SubSystemSlot7,
    Unlocked,
    Wardrobe,
    #[default]
    #[serde(other)]
    Undefined,
}

impl LocationFlag {
    /// Reports whether the flag is a fitting slot (high, medium, low, rig or subsystem).
    pub fn is_fitting_slot(&self) -> bool {
        use LocationFlag::*;
        matches!(
            self,
            HiSlot0
                | HiSlot1
                | HiSlot2
                | HiSlot3
                | HiSlot4
                | HiSlot5
                | HiSlot6
                | HiSlot7
                | MedSlot0
                | MedSlot1
                | MedSlot2
                | MedSlot3
                | MedSlot4
                | MedSlot5
                | MedSlot6
                | MedSlot7
                | LoSlot0
                | LoSlot1
                | LoSlot2
                | LoSlot3
                | LoSlot4
                | LoSlot5
                | LoSlot6
                | LoSlot7
                | RigSlot0
                | RigSlot1
                | RigSlot2
                | RigSlot3
                | RigSlot4
                | RigSlot5
                | RigSlot6
                | RigSlot7
                | SubSystemSlot0
                | SubSystemSlot1
                | SubSystemSlot2
                | SubSystemSlot3
                | SubSystemSlot4
                | SubSystemSlot5
                | SubSystemSlot6
                | SubSystemSlot7
        )
    }
}

/// The kind of the immediate container of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Station,
    SolarSystem,
    Item,
    Structure,
    #[default]
    #[serde(other)]
    Other,
}
