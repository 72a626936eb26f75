//! End-to-end scenarios over small snapshots

mod common;

use asset_forest::{Filter, Forest, Location, LocationFlag, LocationType, NodeCategory};
use common::{
    cargo_container_type, drone_type, names_path, office_type, ship_type, AssetParams,
};

const ALPHA: i64 = 100000;
const BRAVO: i64 = 101000;

fn locations() -> Vec<Location> {
    vec![Location::new(ALPHA, "Alpha"), Location::new(BRAVO, "Bravo")]
}

#[test_log::test]
fn test_hangar_items_share_one_item_hangar() {
    let a = AssetParams::at(ALPHA).id(1).create();
    let b = AssetParams::at(ALPHA).id(2).create();
    let forest = Forest::from_character_assets(vec![a.clone(), b.clone()], locations());

    assert_eq!(names_path(&forest, &a), ["Alpha", "Item Hangar"]);
    assert_eq!(names_path(&forest, &b), ["Alpha", "Item Hangar"]);

    let a_parent = forest.node(1).unwrap().parent().unwrap();
    let b_parent = forest.node(2).unwrap().parent().unwrap();
    assert_eq!(a_parent, b_parent);
    assert_eq!(a_parent.category(), NodeCategory::ItemHangar);
}

#[test]
fn test_nested_hangar_item_stays_in_its_container() {
    let a = AssetParams::at(ALPHA)
        .id(1)
        .singleton()
        .of_type(cargo_container_type())
        .create();
    let b = AssetParams::at(1).id(2).create();
    let forest = Forest::from_character_assets(vec![b.clone(), a], locations());

    assert_eq!(names_path(&forest, &b), ["Alpha", "Item Hangar", "Container"]);
}

#[test_log::test]
fn test_drone_in_ship_goes_to_drone_bay() {
    let ship = AssetParams::at(ALPHA)
        .id(3)
        .singleton()
        .of_type(ship_type())
        .create();
    let drone = AssetParams::at(3)
        .id(4)
        .flag(LocationFlag::DroneBay)
        .of_type(drone_type())
        .create();
    let forest = Forest::from_character_assets(vec![drone.clone(), ship], locations());

    assert_eq!(
        names_path(&forest, &drone),
        ["Alpha", "Ship Hangar", "Merlin", "Drone Bay"]
    );
    assert!(forest.node(3).unwrap().is_ship());
    assert!(forest.node(3).unwrap().is_container());
}

#[test_log::test]
fn test_office_has_all_divisions() {
    let office = AssetParams::at(ALPHA)
        .id(5)
        .singleton()
        .flag(LocationFlag::OfficeFolder)
        .kind(LocationType::Station)
        .of_type(office_type())
        .create();
    let stored = AssetParams::at(5)
        .id(6)
        .flag(LocationFlag::CorpSag1)
        .quantity(99)
        .create();
    let forest = Forest::from_corporation_assets(vec![office, stored.clone()], locations());

    assert_eq!(names_path(&forest, &stored), ["Alpha", "Office", "1st Division"]);

    let office_node = forest.node(5).unwrap();
    let divisions: Vec<String> = office_node
        .children()
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(divisions.len(), 7);
    for expected in [
        "1st Division",
        "2nd Division",
        "3rd Division",
        "4th Division",
        "5th Division",
        "6th Division",
        "7th Division",
    ] {
        assert!(divisions.iter().any(|d| d == expected), "missing {expected}");
    }
}

#[test]
fn test_items_in_space_ignore_their_flag() {
    let floating = AssetParams::at(BRAVO)
        .id(7)
        .flag(LocationFlag::Cargo)
        .kind(LocationType::SolarSystem)
        .create();
    let forest = Forest::from_character_assets(vec![floating.clone()], locations());

    assert_eq!(names_path(&forest, &floating), ["Bravo", "In Space"]);
}

#[test_log::test]
fn test_corp_other_hides_deliveries_and_impounded() {
    let delivered = AssetParams::at(ALPHA)
        .flag(LocationFlag::CorpDeliveries)
        .create();
    let impounded = AssetParams::at(ALPHA)
        .flag(LocationFlag::Impounded)
        .create();
    let cargo = AssetParams::at(ALPHA).flag(LocationFlag::Cargo).create();
    let mut forest = Forest::from_corporation_assets(
        vec![delivered.clone(), impounded.clone(), cargo.clone()],
        locations(),
    );
    forest.apply_filter(Filter::CorpOther);

    let root = forest.location(ALPHA).unwrap();
    let visible: Vec<NodeCategory> = root.children().iter().map(|c| c.category()).collect();
    assert_eq!(visible, vec![NodeCategory::CargoBay]);

    let walked: Vec<Option<i64>> = root.all_visible().map(|n| n.id()).collect();
    assert!(walked.contains(&Some(cargo.item_id)));
    assert!(!walked.contains(&Some(delivered.item_id)));
    assert!(!walked.contains(&Some(impounded.item_id)));

    // Excluded nodes stay resolvable by id.
    assert!(forest.node(delivered.item_id).unwrap().parent().unwrap().is_excluded());
}

#[test]
fn test_corp_other_keeps_item_hangar_visible() {
    let delivered = AssetParams::at(ALPHA)
        .flag(LocationFlag::CapsuleerDeliveries)
        .create();
    let stored = AssetParams::at(ALPHA).create();
    let mut forest = Forest::from_character_assets(vec![delivered, stored], locations());
    forest.apply_filter(Filter::CorpOther);

    let visible: Vec<NodeCategory> = forest
        .location(ALPHA)
        .unwrap()
        .children()
        .iter()
        .map(|c| c.category())
        .collect();
    assert_eq!(visible, vec![NodeCategory::ItemHangar, NodeCategory::ShipHangar]);
}

#[test]
fn test_unbuilt_forest_answers_empty() {
    let forest = Forest::default();

    assert!(forest.node(1).is_none());
    assert!(forest.root_location_node(1).is_none());
    assert!(forest.location(ALPHA).is_none());
    assert!(forest.trees().is_empty());
    assert!(forest.locations().is_empty());
    assert_eq!(forest.item_count_filtered(), 0);
}
