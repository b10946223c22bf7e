//! Aim cameras backing [`CameraService`].

use std::collections::BTreeMap;

use armory_core::{CameraService, ItemId, SightData};

/// Field of view used when no aim camera has priority.
pub const DEFAULT_FOV: f32 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AimCamera {
    pub sight: SightData,
    pub priority: bool,
}

/// One aim camera per weapon; at most one is raised at a time.
#[derive(Clone, Debug, Default)]
pub struct CameraRig {
    cameras: BTreeMap<ItemId, AimCamera>,
}

impl CameraRig {
    pub fn camera(&self, weapon: ItemId) -> Option<&AimCamera> {
        self.cameras.get(&weapon)
    }

    /// Weapon whose aim camera currently has priority.
    pub fn active(&self) -> Option<ItemId> {
        self.cameras
            .iter()
            .find(|(_, camera)| camera.priority)
            .map(|(id, _)| *id)
    }

    /// Field of view the player currently sees.
    pub fn current_fov(&self) -> f32 {
        self.active()
            .and_then(|weapon| self.cameras.get(&weapon))
            .map_or(DEFAULT_FOV, |camera| camera.sight.zoom_fov)
    }
}

impl CameraService for CameraRig {
    fn configure_aim(&mut self, weapon: ItemId, sight: SightData) {
        self.cameras
            .entry(weapon)
            .and_modify(|camera| camera.sight = sight)
            .or_insert(AimCamera {
                sight,
                priority: false,
            });
    }

    fn set_aim_priority(&mut self, weapon: ItemId, active: bool) {
        if active {
            for (id, camera) in self.cameras.iter_mut() {
                if *id != weapon {
                    camera.priority = false;
                }
            }
        }
        match self.cameras.get_mut(&weapon) {
            Some(camera) => camera.priority = active,
            None => tracing::warn!(%weapon, "aim priority for unconfigured camera"),
        }
    }
}
