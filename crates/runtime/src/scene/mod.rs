//! In-memory scene implementing the armory's host services.
//!
//! Stands in for an engine's scene graph, camera stack and animators so the
//! runtime can drive the armory headless.

mod animation;
mod camera;
mod world;

pub use animation::Animator;
pub use camera::{AimCamera, CameraRig, DEFAULT_FOV};
pub use world::{SceneGraph, SceneNode};

use armory_core::Env;

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub graph: SceneGraph,
    pub camera: CameraRig,
    pub animator: Animator,
}

impl Scene {
    /// Borrows the scene as the service bundle an engine call needs.
    pub fn env(&mut self) -> Env<'_> {
        Env::new(&mut self.graph, &mut self.camera, &mut self.animator)
    }
}
