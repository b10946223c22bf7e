//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Item catalogs (weapons, attachments, gear, consumables) via RON
//! - Level layouts placing catalog items in the world via RON
//! - Armory configuration via TOML
//!
//! A small demo data set is embedded for hosts started without content paths.
//! All loaders use armory-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, LevelLayout, LevelLoader, LoadResult,
    Placement, builtin,
};
