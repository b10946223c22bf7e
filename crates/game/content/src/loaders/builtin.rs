//! Demo content embedded in the binary.
//!
//! Used by hosts started without a data directory.

use armory_core::ArmoryConfig;

use crate::loaders::{ConfigLoader, ItemCatalog, LevelLayout, LoadResult};

const ITEMS_RON: &str = include_str!("../../data/items.ron");
const RANGE_RON: &str = include_str!("../../data/levels/range.ron");
const CONFIG_TOML: &str = include_str!("../../data/config.toml");

pub fn catalog() -> LoadResult<ItemCatalog> {
    ItemCatalog::from_ron(ITEMS_RON)
}

/// The firing range: every catalog family laid out along +Z.
pub fn range_level() -> LoadResult<LevelLayout> {
    LevelLayout::from_ron(RANGE_RON)
}

pub fn config() -> LoadResult<ArmoryConfig> {
    ConfigLoader::from_toml(CONFIG_TOML)
}
