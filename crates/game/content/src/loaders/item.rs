//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use armory_core::{AttachmentSpec, ItemDefinition, ItemSpec};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    /// Parses a catalog from RON text and validates it.
    pub fn from_ron(content: &str) -> LoadResult<Self> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Rejects duplicate names and attachment reductions outside `0.0..=1.0`.
    fn validate(&self) -> LoadResult<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.name.as_str()) {
                anyhow::bail!("Duplicate item name in catalog: {}", item.name);
            }
            if let ItemSpec::Attachment(data) = &item.spec {
                let fractions = match &data.spec {
                    AttachmentSpec::Sight(_) => vec![],
                    AttachmentSpec::Grip(grip) => vec![grip.recoil_reduction],
                    AttachmentSpec::Muzzle(muzzle) => {
                        vec![muzzle.flash_reduction, muzzle.sound_reduction]
                    }
                };
                if let Some(bad) = fractions.iter().find(|f| !(0.0..=1.0).contains(*f)) {
                    anyhow::bail!("Attachment {} has reduction {} outside 0..=1", item.name, bad);
                }
            }
        }
        Ok(())
    }
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        let catalog = ItemCatalog::from_ron(&content)?;
        tracing::debug!(path = %path.display(), items = catalog.items.len(), "loaded item catalog");
        Ok(catalog)
    }
}
