//! Mandatory folders
//!
//! Consumers render a fixed navigation shape, so some folders must exist even
//! when nothing is stored in them:
//!
//! - every office folder has all seven divisions
//! - a character location with an item hangar also has a ship hangar, and
//!   the other way round
//!
//! Both fix-ups only add missing empty nodes, so running them again is a no-op.

use tracing::debug;

use crate::category::NodeCategory;
use crate::classify::CustomNodeIndex;
use crate::forest::Forest;
use crate::node::NodeId;

pub(crate) fn complete(forest: &mut Forest) {
    let mut index = CustomNodeIndex::scan(forest);
    let divisions = complete_offices(forest, &mut index);
    let hangars = if forest.ownership.is_corporation() {
        0
    } else {
        complete_hangars(forest, &mut index)
    };
    if divisions + hangars > 0 {
        debug!(divisions, hangars, "added empty folders");
    }
}

fn complete_offices(forest: &mut Forest, index: &mut CustomNodeIndex) -> usize {
    let folders: Vec<NodeId> = forest
        .nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.category == NodeCategory::OfficeFolder)
        .map(|(position, _)| NodeId(position))
        .collect();

    let mut added = 0;
    for folder in folders {
        for division in NodeCategory::OFFICE_DIVISIONS {
            if !index.contains(folder, division) {
                index.get_or_create(forest, folder, division);
                added += 1;
            }
        }
    }
    added
}

fn complete_hangars(forest: &mut Forest, index: &mut CustomNodeIndex) -> usize {
    let mut added = 0;
    for root in forest.roots.clone() {
        let has_items = index.contains(root, NodeCategory::ItemHangar);
        let has_ships = index.contains(root, NodeCategory::ShipHangar);
        let missing = match (has_items, has_ships) {
            (true, false) => NodeCategory::ShipHangar,
            (false, true) => NodeCategory::ItemHangar,
            _ => continue,
        };
        index.get_or_create(forest, root, missing);
        added += 1;
    }
    added
}
