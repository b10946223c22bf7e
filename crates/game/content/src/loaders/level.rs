//! Level layout loader.
//!
//! A layout places catalog items in the world by name. Resolution against a
//! catalog happens separately so one layout can be reused with several
//! catalogs.

use std::path::Path;

use armory_core::{ItemDefinition, Vec3};
use serde::{Deserialize, Serialize};

use crate::loaders::{ItemCatalog, LoadResult, read_file};

/// One catalog item lying in the world at level start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub item: String,
    pub position: Vec3,
}

/// Level layout structure for RON files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    #[serde(default)]
    pub placements: Vec<Placement>,
}

impl LevelLayout {
    pub fn from_ron(content: &str) -> LoadResult<Self> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))
    }

    /// Looks every placement up in the catalog.
    pub fn resolve(&self, catalog: &ItemCatalog) -> LoadResult<Vec<(ItemDefinition, Vec3)>> {
        self.placements
            .iter()
            .map(|placement| {
                catalog
                    .get(&placement.item)
                    .cloned()
                    .map(|definition| (definition, placement.position))
                    .ok_or_else(|| {
                        anyhow::anyhow!("Level places unknown item: {}", placement.item)
                    })
            })
            .collect()
    }
}

/// Loader for level layouts from RON files.
pub struct LevelLoader;

impl LevelLoader {
    pub fn load(path: &Path) -> LoadResult<LevelLayout> {
        let content = read_file(path)?;
        let layout = LevelLayout::from_ron(&content)?;
        tracing::debug!(
            path = %path.display(),
            placements = layout.placements.len(),
            "loaded level layout"
        );
        Ok(layout)
    }
}
