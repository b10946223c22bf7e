//! Armory operations.
//!
//! The [`ArmoryEngine`] is the only writer of [`ArmoryState`]. It borrows the
//! state together with the engine services for the duration of one call chain
//! and exposes the item lifecycle, inventory storage, attachment binding and
//! hand operations. Rejected operations leave state untouched and are logged
//! once at the public entry point.

mod binding;
mod errors;
mod hand;
mod lifecycle;
mod storage;
mod tick;

pub use binding::is_weapon_compatible;
pub use errors::{ArmoryError, AttachError, InventoryError, ItemError};
pub use lifecycle::{ShotReport, UseOutcome};
pub use tick::TickOutcome;

use crate::env::Env;
use crate::state::{Attachment, ArmoryState, Item, ItemId, Weapon};

/// Engine that owns every mutation of the armory state.
pub struct ArmoryEngine<'s, 'e> {
    state: &'s mut ArmoryState,
    env: Env<'e>,
}

impl<'s, 'e> ArmoryEngine<'s, 'e> {
    pub fn new(state: &'s mut ArmoryState, env: Env<'e>) -> Self {
        Self { state, env }
    }

    pub fn state(&self) -> &ArmoryState {
        self.state
    }

    // ===== lookups shared by the component modules =====

    fn item(&self, id: ItemId) -> Result<&Item, ArmoryError> {
        self.state
            .items
            .get(id)
            .ok_or(ItemError::UnknownItem { item: id }.into())
    }

    fn item_mut(&mut self, id: ItemId) -> Result<&mut Item, ArmoryError> {
        self.state
            .items
            .get_mut(id)
            .ok_or(ItemError::UnknownItem { item: id }.into())
    }

    fn weapon(&self, id: ItemId) -> Result<&Weapon, ArmoryError> {
        let item = self.item(id)?;
        item.as_weapon().ok_or_else(|| {
            ItemError::WrongKind {
                item: id,
                expected: "weapon",
                actual: item.kind().label(),
            }
            .into()
        })
    }

    fn attachment(&self, id: ItemId) -> Result<&Attachment, ArmoryError> {
        let item = self.item(id)?;
        item.as_attachment().ok_or_else(|| {
            ItemError::WrongKind {
                item: id,
                expected: "attachment",
                actual: item.kind().label(),
            }
            .into()
        })
    }

    fn weapon_mut(&mut self, id: ItemId) -> Result<&mut Weapon, ArmoryError> {
        let item = self.item_mut(id)?;
        let actual = item.kind().label();
        item.as_weapon_mut().ok_or(
            ItemError::WrongKind {
                item: id,
                expected: "weapon",
                actual,
            }
            .into(),
        )
    }

    fn attachment_mut(&mut self, id: ItemId) -> Result<&mut Attachment, ArmoryError> {
        let item = self.item_mut(id)?;
        let actual = item.kind().label();
        item.as_attachment_mut().ok_or(
            ItemError::WrongKind {
                item: id,
                expected: "attachment",
                actual,
            }
            .into(),
        )
    }
}
