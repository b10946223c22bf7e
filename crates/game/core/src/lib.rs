//! Engine-independent item and weapon management for a first-person shooter.
//!
//! `armory-core` defines the item state machine, inventory slot assignment,
//! attachment binding and the collecting hand. Rendering, camera, animation and
//! physics are reached through the service traits in [`env`]. All state
//! mutation flows through [`engine::ArmoryEngine`], and supporting crates
//! depend on the types re-exported here.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod input;
pub mod state;

#[cfg(test)]
mod testing;

pub use config::ArmoryConfig;
pub use engine::{
    ArmoryEngine, ArmoryError, AttachError, InventoryError, ItemError, ShotReport, TickOutcome,
    UseOutcome, is_weapon_compatible,
};
pub use env::{AnimationFlag, AnimationService, CameraService, Env, Layers, Mount, WorldService};
pub use error::{ErrorSeverity, GameError};
pub use event::ArmoryEvent;
pub use input::InputSnapshot;
pub use state::{
    ArmoryState, Attachment, AttachmentCompat, AttachmentData, AttachmentKind, AttachmentSpec,
    Capabilities, CompatTag, ConsumableEffect, GearSlot, GripData, Hand, HandId, HandPose,
    Inventory, InventoryLocation, Item, ItemArena, ItemDefinition, ItemId, ItemKind, ItemSpec,
    ItemState, MuzzleData, SightData, SightMount, Vec3, Weapon, WeaponClass, WeaponData,
    WeaponPlacement,
};
