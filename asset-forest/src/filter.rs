//! Filtering of top-level folders
//!
//! A filter decides, for every direct child of every root, whether that
//! subtree is shown. Excluded subtrees stay in the forest and remain
//! reachable by id, but are skipped by [`NodeRef::children`],
//! [`NodeRef::all_visible`] and [`Forest::trees`].
//!
//! [`NodeRef::children`]: crate::NodeRef::children
//! [`NodeRef::all_visible`]: crate::NodeRef::all_visible

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::NodeCategory;
use crate::forest::Forest;
use crate::types::Ownership;

/// Named views over a forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Show everything.
    #[default]
    None,
    Deliveries,
    Impounded,
    InSpace,
    Office,
    /// Everything a character keeps for personal use.
    PersonalAssets,
    /// Asset safety of the forest's owner.
    Safety,
    /// Corporation assets outside offices, deliveries, safety and space.
    CorpOther,
}

impl Filter {
    /// Every filter, in menu order.
    pub const ALL: [Filter; 8] = [
        Filter::None,
        Filter::Deliveries,
        Filter::Impounded,
        Filter::InSpace,
        Filter::Office,
        Filter::PersonalAssets,
        Filter::Safety,
        Filter::CorpOther,
    ];

    /// Reports whether a top-level node of `category` stays visible.
    pub fn includes(&self, category: NodeCategory, ownership: Ownership) -> bool {
        use NodeCategory::*;

        match self {
            Filter::None => true,
            Filter::Deliveries => category == Deliveries,
            Filter::Impounded => category == Impounded,
            Filter::InSpace => category == InSpace,
            Filter::Office => category == OfficeFolder,
            Filter::PersonalAssets => !matches!(
                category,
                AssetSafetyCharacter | AssetSafetyCorporation | Deliveries | Impounded | InSpace
            ),
            Filter::Safety => match ownership {
                Ownership::Character => category == AssetSafetyCharacter,
                Ownership::Corporation => category == AssetSafetyCorporation,
            },
            Filter::CorpOther => !matches!(
                category,
                AssetSafetyCorporation | Deliveries | Impounded | InSpace | OfficeFolder
            ),
        }
    }
}

impl Forest {
    /// Mark top-level subtrees as excluded according to `filter`.
    ///
    /// Every flag is recomputed, so the result never depends on filters
    /// applied earlier.
    pub fn apply_filter(&mut self, filter: Filter) {
        let ownership = self.ownership;
        let mut excluded = 0usize;
        for root in self.roots.clone() {
            for child in self.vertex(root).children.clone() {
                let node = self.vertex_mut(child);
                node.is_excluded = !filter.includes(node.category, ownership);
                if node.is_excluded {
                    excluded += 1;
                }
            }
        }
        debug!(?filter, excluded, "applied filter");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::none(Filter::None, NodeCategory::Impounded, true)]
    #[case::deliveries_match(Filter::Deliveries, NodeCategory::Deliveries, true)]
    #[case::deliveries_other(Filter::Deliveries, NodeCategory::ItemHangar, false)]
    #[case::office(Filter::Office, NodeCategory::OfficeFolder, true)]
    #[case::personal_hangar(Filter::PersonalAssets, NodeCategory::ShipHangar, true)]
    #[case::personal_space(Filter::PersonalAssets, NodeCategory::InSpace, false)]
    #[case::personal_safety(Filter::PersonalAssets, NodeCategory::AssetSafetyCharacter, false)]
    #[case::corp_other_cargo(Filter::CorpOther, NodeCategory::CargoBay, true)]
    #[case::corp_other_office(Filter::CorpOther, NodeCategory::OfficeFolder, false)]
    #[case::corp_other_impounded(Filter::CorpOther, NodeCategory::Impounded, false)]
    fn test_includes(#[case] filter: Filter, #[case] category: NodeCategory, #[case] expected: bool) {
        assert_eq!(filter.includes(category, Ownership::Corporation), expected);
    }

    #[test]
    fn test_safety_follows_ownership() {
        assert!(Filter::Safety.includes(NodeCategory::AssetSafetyCharacter, Ownership::Character));
        assert!(!Filter::Safety.includes(NodeCategory::AssetSafetyCorporation, Ownership::Character));
        assert!(Filter::Safety.includes(NodeCategory::AssetSafetyCorporation, Ownership::Corporation));
        assert!(!Filter::Safety.includes(NodeCategory::AssetSafetyCharacter, Ownership::Corporation));
    }

    #[test]
    fn test_filter_serde_names() {
        assert_eq!(serde_json::to_string(&Filter::CorpOther).unwrap(), "\"corp_other\"");
        let parsed: Filter = serde_json::from_str("\"personal_assets\"").unwrap();
        assert_eq!(parsed, Filter::PersonalAssets);
        assert_eq!(Filter::default(), Filter::None);
    }

    #[test]
    fn test_apply_filter_on_empty_forest() {
        let mut forest = Forest::default();
        forest.apply_filter(Filter::CorpOther);
        assert!(forest.trees().is_empty());
    }
}
