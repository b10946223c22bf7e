pub mod arena;
pub mod attachment;
pub mod common;
pub mod hand;
pub mod inventory;
pub mod item;
pub mod weapon;

// Re-export common types
pub use common::{HandId, HandPose, ItemId, Vec3};

// Re-export item types
pub use item::{
    Capabilities, ConsumableEffect, GearSlot, Item, ItemDefinition, ItemKind, ItemSpec, ItemState,
};

// Re-export weapon and attachment types
pub use attachment::{
    Attachment, AttachmentData, AttachmentKind, AttachmentSpec, CompatTag, GripData, MuzzleData,
    SightData,
};
pub use weapon::{AttachmentCompat, SightMount, Weapon, WeaponClass, WeaponData};

// Re-export owners
pub use arena::ItemArena;
pub use hand::Hand;
pub use inventory::{Inventory, InventoryLocation, WeaponPlacement};
