use crate::env::Layers;

/// Armory configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArmoryConfig {
    /// Radius around the hand within which collectible items are detected.
    pub detection_radius: f32,
    /// Distance in front of the hand at which dropped items are placed.
    pub drop_distance: f32,
    /// Layer mask passed to the proximity query.
    pub item_layers: Layers,
}

impl ArmoryConfig {
    // ===== compile-time constants =====
    /// Number of weapon slots in the inventory (primary + secondary).
    pub const WEAPON_SLOTS: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DETECTION_RADIUS: f32 = 2.0;
    pub const DEFAULT_DROP_DISTANCE: f32 = 1.5;

    pub fn new() -> Self {
        Self {
            detection_radius: Self::DEFAULT_DETECTION_RADIUS,
            drop_distance: Self::DEFAULT_DROP_DISTANCE,
            item_layers: Layers::ITEMS,
        }
    }

    pub fn with_detection_radius(mut self, detection_radius: f32) -> Self {
        self.detection_radius = detection_radius;
        self
    }

    pub fn with_drop_distance(mut self, drop_distance: f32) -> Self {
        self.drop_distance = drop_distance;
        self
    }
}

impl Default for ArmoryConfig {
    fn default() -> Self {
        Self::new()
    }
}
