//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use armory_core::ArmoryConfig;

/// Configuration required to build a [`Runtime`](crate::Runtime).
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Base armory tuning; replaced by `config_path` when that is set.
    pub armory: ArmoryConfig,
    pub overrides: ArmoryOverrides,
    /// Capacity of each event bus topic.
    pub event_capacity: usize,
    pub config_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub level_path: Option<PathBuf>,
}

/// Individual tunables applied on top of the loaded configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArmoryOverrides {
    pub detection_radius: Option<f32>,
    pub drop_distance: Option<f32>,
}

impl ArmoryOverrides {
    pub fn apply(&self, mut config: ArmoryConfig) -> ArmoryConfig {
        if let Some(radius) = self.detection_radius {
            config.detection_radius = radius;
        }
        if let Some(distance) = self.drop_distance {
            config.drop_distance = distance;
        }
        config
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            armory: ArmoryConfig::default(),
            overrides: ArmoryOverrides::default(),
            event_capacity: 100,
            config_path: None,
            catalog_path: None,
            level_path: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARMORY_DETECTION_RADIUS` - Pickup detection radius (default: 2.0)
    /// - `ARMORY_DROP_DISTANCE` - Drop distance in front of the hand (default: 1.5)
    /// - `ARMORY_EVENT_CAPACITY` - Event bus capacity per topic (default: 100)
    /// - `ARMORY_CONFIG` - TOML armory configuration file
    /// - `ARMORY_CATALOG` - RON item catalog (default: embedded demo catalog)
    /// - `ARMORY_LEVEL` - RON level layout (default: embedded firing range)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.overrides.detection_radius =
            read_env::<f32>("ARMORY_DETECTION_RADIUS").filter(|radius| *radius > 0.0);
        config.overrides.drop_distance =
            read_env::<f32>("ARMORY_DROP_DISTANCE").filter(|distance| *distance >= 0.0);

        if let Some(capacity) = read_env::<usize>("ARMORY_EVENT_CAPACITY") {
            config.event_capacity = capacity.max(1);
        }

        config.config_path = env::var("ARMORY_CONFIG").ok().map(PathBuf::from);
        config.catalog_path = env::var("ARMORY_CATALOG").ok().map(PathBuf::from);
        config.level_path = env::var("ARMORY_LEVEL").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
