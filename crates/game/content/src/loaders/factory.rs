//! Content factory for loading a data directory.

use std::path::{Path, PathBuf};

use armory_core::ArmoryConfig;

use crate::loaders::{ConfigLoader, ItemCatalog, ItemLoader, LevelLayout, LevelLoader, LoadResult};

/// Content factory that loads all armory content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── levels/
///     └── range.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load armory configuration from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<ArmoryConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(ArmoryConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load a level from `levels/{level_name}.ron`.
    pub fn load_level(&self, level_name: &str) -> LoadResult<LevelLayout> {
        let path = self
            .data_dir
            .join("levels")
            .join(format!("{}.ron", level_name));
        LevelLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
