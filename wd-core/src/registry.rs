use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::model::ModelId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub id: ModelId,
    /// Path relative to the asset root.
    pub path: String,
}

/// Ordered list of models to load. Carousel order follows this order.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct AssetRegistry {
    entries: Vec<AssetEntry>,
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::new(ModelId::ALL.iter().map(|&id| AssetEntry {
            id,
            path: id.default_path().to_string(),
        }))
    }
}

impl AssetRegistry {
    /// Later duplicates of an id are dropped so each model loads once.
    pub fn new(entries: impl IntoIterator<Item = AssetEntry>) -> Self {
        let mut unique: Vec<AssetEntry> = Vec::new();
        for entry in entries {
            if unique.iter().any(|e| e.id == entry.id) {
                tracing::warn!(model = %entry.id, "duplicate model entry ignored");
                continue;
            }
            unique.push(entry);
        }
        Self { entries: unique }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn order_of(&self, id: ModelId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn path_of(&self, id: ModelId) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.path.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetEntry> {
        self.entries.iter()
    }
}
