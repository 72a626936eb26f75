//! Containment chains far deeper than any real snapshot

mod common;

use asset_forest::{Forest, Item, Location, LocationFlag, NodeCategory};
use common::{cargo_container_type, AssetParams};

const ALPHA: i64 = 60000001;
const DEPTH: i64 = 60_000;

/// Items 1..=depth, each sitting inside the previous one.
fn chain(depth: i64) -> Vec<Item> {
    (1..=depth)
        .map(|id| {
            let container = if id == 1 { ALPHA } else { id - 1 };
            AssetParams::at(container)
                .id(id)
                .singleton()
                .of_type(cargo_container_type())
                .create()
        })
        .collect()
}

fn forest(items: Vec<Item>) -> Forest {
    Forest::from_character_assets(items, vec![Location::new(ALPHA, "Alpha")])
}

#[test_log::test]
fn test_deep_chain_is_built_and_counted() {
    let mut forest = forest(chain(DEPTH));
    let root = forest.location(ALPHA).unwrap();

    // root, both hangars and every item
    assert_eq!(root.all().count() as i64, DEPTH + 3);
    assert_eq!(root.item_count_any(), DEPTH);
    assert_eq!(root.item_count_filtered(), DEPTH);
    assert_eq!(forest.item_count_filtered(), DEPTH);

    let deepest = forest.node(DEPTH).unwrap();
    assert_eq!(deepest.ancestors().len() as i64, DEPTH + 1);
    assert_eq!(forest.root_location_node(DEPTH).unwrap().id(), Some(ALPHA));

    forest.update_item_counts();
    let root = forest.location(ALPHA).unwrap();
    assert_eq!(root.item_count(), Some(1));
    assert_eq!(forest.node(1).unwrap().item_count(), Some(1));
    assert_eq!(forest.node(DEPTH - 1).unwrap().item_count(), Some(1));
    assert_eq!(forest.node(DEPTH).unwrap().item_count(), None);
}

#[test]
fn test_fitted_item_deep_in_a_chain_hides_the_rest() {
    let mut items = chain(DEPTH);
    let fitted = (DEPTH / 2) as usize;
    items[fitted - 1].location_flag = LocationFlag::HiSlot0;
    let forest = forest(items);

    let node = forest.node(fitted as i64).unwrap();
    assert_eq!(node.parent().unwrap().category(), NodeCategory::Fitting);

    let root = forest.location(ALPHA).unwrap();
    assert_eq!(root.item_count_any(), DEPTH);
    assert_eq!(root.item_count_filtered(), fitted as i64 - 1);
}

#[test]
fn test_deep_chain_prints_one_line_per_node() {
    let depth = 3_000;
    let forest = forest(chain(depth));

    let text = forest.location(ALPHA).unwrap().print_tree();
    assert_eq!(text.lines().count() as i64, depth + 3);
    assert!(text.starts_with("+-Alpha (#60000001) [2] Location: -"));
    assert!(text.lines().last().unwrap().trim_start().starts_with("+-Ship Hangar"));
}
