//! Content loaders for reading armory data from files.
//!
//! Each loader turns one RON/TOML file into armory-core types. The
//! [`ContentFactory`] ties them to a data directory, and [`builtin`] parses the
//! embedded demo content.

pub mod builtin;
pub mod config;
pub mod factory;
pub mod item;
pub mod level;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader};
pub use level::{LevelLayout, LevelLoader, Placement};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
