//! Real places that anchor a tree, and who owns the records.

use serde::{Deserialize, Serialize};

use super::item::LocationId;

/// A station, structure or solar system, resolved ahead of time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Name shown in trees; unnamed locations fall back to their id.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            return format!("Location #{}", self.id);
        }
        self.name.clone()
    }
}

/// Who owns the items of a snapshot. Drives the context-specific rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    #[default]
    Character,
    Corporation,
}

impl Ownership {
    pub fn is_corporation(&self) -> bool {
        matches!(self, Self::Corporation)
    }
}

impl From<bool> for Ownership {
    /// `true` means corporation ownership.
    fn from(is_corporation: bool) -> Self {
        if is_corporation {
            Self::Corporation
        } else {
            Self::Character
        }
    }
}
