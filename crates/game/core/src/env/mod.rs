//! Traits describing the engine services the armory drives.
//!
//! The core never renders, animates or queries physics itself. Scene graph,
//! camera rig and animator are reached through the traits below, and the
//! [`Env`] aggregate bundles them so each operation receives everything it
//! needs without coupling to a concrete engine.
mod animation;
mod camera;
mod world;

pub use animation::{AnimationFlag, AnimationService};
pub use camera::CameraService;
pub use world::{Layers, Mount, WorldService};

/// Mutable borrows of every service an operation may touch.
pub struct Env<'a> {
    pub world: &'a mut dyn WorldService,
    pub camera: &'a mut dyn CameraService,
    pub animation: &'a mut dyn AnimationService,
}

impl<'a> Env<'a> {
    pub fn new(
        world: &'a mut dyn WorldService,
        camera: &'a mut dyn CameraService,
        animation: &'a mut dyn AnimationService,
    ) -> Self {
        Self {
            world,
            camera,
            animation,
        }
    }
}

impl core::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env").finish_non_exhaustive()
    }
}
