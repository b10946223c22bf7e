//! Headless host for the armory core.
//!
//! This crate wires the armory state to an in-memory scene, loads content, and
//! publishes armory events to topic subscribers once per frame.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the frame driver and builder
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`scene`] implements the world, camera and animation services
//! - [`config`] reads runtime configuration from the environment
pub mod config;
pub mod error;
pub mod events;
pub mod loadout;
pub mod runtime;
pub mod scene;

pub use config::{ArmoryOverrides, RuntimeConfig};
pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, Topic};
pub use loadout::{GearLoadout, Loadout, WeaponLoadout};
pub use runtime::{Runtime, RuntimeBuilder};
pub use scene::Scene;
