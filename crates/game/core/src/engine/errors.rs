//! Error types for armory operations.
//!
//! Each component has its own enum; [`ArmoryError`] unifies them for the
//! engine entry points.

use crate::config::ArmoryConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{AttachmentKind, GearSlot, ItemId, ItemState};

/// Lifecycle and capability violations on a single item.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("item {item} does not exist")]
    UnknownItem { item: ItemId },

    #[error("item {item} cannot be collected")]
    NotCollectible { item: ItemId },

    #[error("item {item} is already collected ({state})")]
    AlreadyCollected { item: ItemId, state: ItemState },

    #[error("item {item} is not collected ({state})")]
    NotCollected { item: ItemId, state: ItemState },

    /// Only freshly collected items can be filed into the inventory.
    #[error("item {item} must be collected before storing (currently {state})")]
    NotReadyToStore { item: ItemId, state: ItemState },

    #[error("item {item} cannot be stored")]
    NotStorable { item: ItemId },

    #[error("item {item} cannot be dropped")]
    NotDroppable { item: ItemId },

    #[error("item {item} is not usable")]
    NotUsable { item: ItemId },

    /// Item is filed in the inventory or mounted on a weapon and must be
    /// released from there first.
    #[error("item {item} is still stored or mounted")]
    InUse { item: ItemId },

    #[error("item {item} is a {actual}, expected a {expected}")]
    WrongKind {
        item: ItemId,
        expected: &'static str,
        actual: &'static str,
    },
}

impl GameError for ItemError {
    fn severity(&self) -> ErrorSeverity {
        use ItemError::*;
        match self {
            // An id the arena never issued (or already consumed) is a caller bug
            UnknownItem { .. } => ErrorSeverity::Internal,

            NotCollectible { .. }
            | AlreadyCollected { .. }
            | NotCollected { .. }
            | NotReadyToStore { .. }
            | NotStorable { .. }
            | NotDroppable { .. }
            | NotUsable { .. }
            | InUse { .. }
            | WrongKind { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use ItemError::*;
        match self {
            UnknownItem { .. } => "ITEM_UNKNOWN",
            NotCollectible { .. } => "ITEM_NOT_COLLECTIBLE",
            AlreadyCollected { .. } => "ITEM_ALREADY_COLLECTED",
            NotCollected { .. } => "ITEM_NOT_COLLECTED",
            NotReadyToStore { .. } => "ITEM_NOT_READY_TO_STORE",
            NotStorable { .. } => "ITEM_NOT_STORABLE",
            NotDroppable { .. } => "ITEM_NOT_DROPPABLE",
            NotUsable { .. } => "ITEM_NOT_USABLE",
            InUse { .. } => "ITEM_IN_USE",
            WrongKind { .. } => "ITEM_WRONG_KIND",
        }
    }

    fn subject(&self) -> Option<ItemId> {
        use ItemError::*;
        match self {
            UnknownItem { item }
            | NotCollectible { item }
            | AlreadyCollected { item, .. }
            | NotCollected { item, .. }
            | NotReadyToStore { item, .. }
            | NotStorable { item }
            | NotDroppable { item }
            | NotUsable { item }
            | InUse { item }
            | WrongKind { item, .. } => Some(*item),
        }
    }
}

/// Inventory bookkeeping failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("item {item} is not in the inventory")]
    NotInInventory { item: ItemId },

    #[error("item {item} is not among the common items")]
    NotInCommon { item: ItemId },

    #[error("weapon slot {slot} is out of range (slots: {})", ArmoryConfig::WEAPON_SLOTS)]
    SlotOutOfRange { slot: usize },

    #[error("could not evict {occupant} from weapon slot {slot}: {source}")]
    WeaponEvictionFailed {
        slot: usize,
        occupant: ItemId,
        source: Box<ArmoryError>,
    },

    #[error("could not evict {occupant} from the {slot} slot: {source}")]
    GearEvictionFailed {
        slot: GearSlot,
        occupant: ItemId,
        source: Box<ArmoryError>,
    },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        use InventoryError::*;
        match self {
            NotInInventory { .. } | NotInCommon { .. } => ErrorSeverity::Validation,

            // Slot indices come from code, and an occupant can always be dropped
            SlotOutOfRange { .. } | WeaponEvictionFailed { .. } | GearEvictionFailed { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use InventoryError::*;
        match self {
            NotInInventory { .. } => "INVENTORY_NOT_IN_INVENTORY",
            NotInCommon { .. } => "INVENTORY_NOT_IN_COMMON",
            SlotOutOfRange { .. } => "INVENTORY_SLOT_OUT_OF_RANGE",
            WeaponEvictionFailed { .. } => "INVENTORY_WEAPON_EVICTION_FAILED",
            GearEvictionFailed { .. } => "INVENTORY_GEAR_EVICTION_FAILED",
        }
    }

    fn subject(&self) -> Option<ItemId> {
        use InventoryError::*;
        match self {
            NotInInventory { item } | NotInCommon { item } => Some(*item),
            SlotOutOfRange { .. } => None,
            WeaponEvictionFailed { occupant, .. } | GearEvictionFailed { occupant, .. } => {
                Some(*occupant)
            }
        }
    }
}

/// Attachment binder failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttachError {
    #[error("attachment {attachment} is already mounted on {weapon}")]
    AlreadyMounted { attachment: ItemId, weapon: ItemId },

    #[error("attachment {attachment} is not mounted")]
    NotMounted { attachment: ItemId },

    #[error("{kind} {attachment} does not fit weapon {weapon}")]
    Incompatible {
        attachment: ItemId,
        weapon: ItemId,
        kind: AttachmentKind,
    },

    #[error("{kind} slot of weapon {weapon} is taken by {occupant}")]
    SlotOccupied {
        weapon: ItemId,
        kind: AttachmentKind,
        occupant: ItemId,
    },

    /// The two sides of a mount disagree.
    #[error("attachment {attachment} and weapon {weapon} disagree about their link")]
    BrokenLink { attachment: ItemId, weapon: ItemId },
}

impl GameError for AttachError {
    fn severity(&self) -> ErrorSeverity {
        use AttachError::*;
        match self {
            Incompatible { .. } | SlotOccupied { .. } => ErrorSeverity::Validation,
            AlreadyMounted { .. } | NotMounted { .. } => ErrorSeverity::Internal,
            BrokenLink { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use AttachError::*;
        match self {
            AlreadyMounted { .. } => "ATTACH_ALREADY_MOUNTED",
            NotMounted { .. } => "ATTACH_NOT_MOUNTED",
            Incompatible { .. } => "ATTACH_INCOMPATIBLE",
            SlotOccupied { .. } => "ATTACH_SLOT_OCCUPIED",
            BrokenLink { .. } => "ATTACH_BROKEN_LINK",
        }
    }

    fn subject(&self) -> Option<ItemId> {
        use AttachError::*;
        match self {
            AlreadyMounted { attachment, .. }
            | NotMounted { attachment }
            | Incompatible { attachment, .. }
            | BrokenLink { attachment, .. } => Some(*attachment),
            SlotOccupied { weapon, .. } => Some(*weapon),
        }
    }
}

/// Any error returned by an [`ArmoryEngine`](super::ArmoryEngine) operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArmoryError {
    #[error(transparent)]
    Item(#[from] ItemError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Attach(#[from] AttachError),
}

impl GameError for ArmoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ArmoryError::Item(e) => e.severity(),
            ArmoryError::Inventory(e) => e.severity(),
            ArmoryError::Attach(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ArmoryError::Item(e) => e.error_code(),
            ArmoryError::Inventory(e) => e.error_code(),
            ArmoryError::Attach(e) => e.error_code(),
        }
    }

    fn subject(&self) -> Option<ItemId> {
        match self {
            ArmoryError::Item(e) => e.subject(),
            ArmoryError::Inventory(e) => e.subject(),
            ArmoryError::Attach(e) => e.subject(),
        }
    }
}
