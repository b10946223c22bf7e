//! Armory configuration loader.

use std::path::Path;

use armory_core::ArmoryConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for armory configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<ArmoryConfig> {
        let content = read_file(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> LoadResult<ArmoryConfig> {
        let config: ArmoryConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.detection_radius <= 0.0 {
            anyhow::bail!("detection_radius must be positive (got {})", config.detection_radius);
        }
        if config.drop_distance < 0.0 {
            anyhow::bail!("drop_distance must not be negative (got {})", config.drop_distance);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armory_core::Layers;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("armory.toml");
        std::fs::write(&path, "detection_radius = 3.5\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.detection_radius, 3.5);
        assert_eq!(config.drop_distance, ArmoryConfig::DEFAULT_DROP_DISTANCE);
        assert_eq!(config.item_layers, Layers::ITEMS);
    }

    #[test]
    fn layer_mask_parses_from_flag_names() {
        let config = ConfigLoader::from_toml("item_layers = \"ITEMS | WEAPONS\"").unwrap();
        assert_eq!(config.item_layers, Layers::ITEMS | Layers::WEAPONS);
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert!(ConfigLoader::from_toml("detection_radius = 0.0").is_err());
    }
}
