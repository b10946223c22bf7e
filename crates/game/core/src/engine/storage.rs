//! Inventory slot assignment.

use crate::config::ArmoryConfig;
use crate::error::ReportExt;
use crate::event::ArmoryEvent;
use crate::state::{GearSlot, ItemId, ItemKind, ItemState, WeaponPlacement};

use super::{ArmoryEngine, ArmoryError, InventoryError, ItemError};

impl<'s, 'e> ArmoryEngine<'s, 'e> {
    /// Puts a collected weapon into a slot, evicting an occupant when both
    /// slots are full. Never fails for lack of space.
    ///
    /// Returns the slot the weapon landed in.
    pub fn add_weapon(&mut self, item: ItemId) -> Result<usize, ArmoryError> {
        self.check_storable(item, "weapon", |kind| matches!(kind, ItemKind::Weapon(_)))
            .and_then(|()| self.place_weapon(item))
            .reported("add_weapon")
    }

    /// Appends a collected item to the common items.
    pub fn add_common(&mut self, item: ItemId) -> Result<(), ArmoryError> {
        self.check_storable(item, "common", |kind| {
            matches!(kind, ItemKind::Common | ItemKind::Attachment(_))
        })
        .map(|()| self.place_common(item))
        .reported("add_common")
    }

    /// Stores gear in its singleton slot, dropping the previous occupant.
    pub fn store_gear(&mut self, item: ItemId) -> Result<GearSlot, ArmoryError> {
        self.store_gear_inner(item).reported("store_gear")
    }

    /// Exchanges the contents of two weapon slots. The held weapon stays held.
    pub fn swap_weapon_slots(&mut self, a: usize, b: usize) -> Result<(), ArmoryError> {
        self.swap_slots(a, b).reported("swap_weapon_slots")
    }

    fn check_storable(
        &self,
        id: ItemId,
        expected: &'static str,
        accepts: impl Fn(&ItemKind) -> bool,
    ) -> Result<(), ArmoryError> {
        let item = self.item(id)?;
        if !accepts(item.kind()) {
            return Err(ItemError::WrongKind {
                item: id,
                expected,
                actual: item.kind().label(),
            }
            .into());
        }
        if item.state() != ItemState::Collected {
            return Err(ItemError::NotReadyToStore {
                item: id,
                state: item.state(),
            }
            .into());
        }
        // Mounted attachments are carried by their weapon.
        if item.as_attachment().is_some_and(|a| a.is_mounted()) {
            return Err(ItemError::InUse { item: id }.into());
        }
        Ok(())
    }

    fn store_gear_inner(&mut self, id: ItemId) -> Result<GearSlot, ArmoryError> {
        let slot = match self.item(id)?.kind() {
            ItemKind::Gear(slot) => *slot,
            other => {
                return Err(ItemError::WrongKind {
                    item: id,
                    expected: "gear",
                    actual: other.label(),
                }
                .into());
            }
        };
        self.check_storable(id, "gear", |kind| matches!(kind, ItemKind::Gear(_)))?;
        self.place_gear(id, slot)?;
        Ok(slot)
    }

    pub(super) fn place_weapon(&mut self, id: ItemId) -> Result<usize, ArmoryError> {
        let placement = self
            .state
            .inventory
            .resolve_weapon_slot(self.state.hand.in_hand());
        let slot = placement.slot();

        if let WeaponPlacement::EvictFirst { occupant } = placement {
            tracing::debug!(
                weapon = %id,
                %occupant,
                "both weapon slots full with nothing in hand; replacing slot 0"
            );
        }
        if let Some(occupant) = placement.occupant() {
            self.remove_and_drop(occupant)
                .map_err(|source| InventoryError::WeaponEvictionFailed {
                    slot,
                    occupant,
                    source: Box::new(source),
                })?;
        }

        self.state.inventory.set_weapon_slot(slot, Some(id));
        self.item_mut(id)?.set_state(ItemState::Stored);
        self.state
            .emit(ArmoryEvent::WeaponAddedToSlot { item: id, slot });
        Ok(slot)
    }

    pub(super) fn place_common(&mut self, id: ItemId) {
        self.state.inventory.push_common(id);
        if let Some(item) = self.state.items.get_mut(id) {
            item.set_state(ItemState::Stored);
        }
        self.state.emit(ArmoryEvent::CommonItemAdded { item: id });
    }

    pub(super) fn place_gear(&mut self, id: ItemId, slot: GearSlot) -> Result<(), ArmoryError> {
        if let Some(occupant) = self.state.inventory.gear(slot) {
            self.remove_and_drop(occupant)
                .map_err(|source| InventoryError::GearEvictionFailed {
                    slot,
                    occupant,
                    source: Box::new(source),
                })?;
        }

        self.state.inventory.set_gear(slot, Some(id));
        self.item_mut(id)?.set_state(ItemState::Stored);
        self.state.emit(ArmoryEvent::GearStored { item: id, slot });
        Ok(())
    }

    fn swap_slots(&mut self, a: usize, b: usize) -> Result<(), ArmoryError> {
        for slot in [a, b] {
            if slot >= ArmoryConfig::WEAPON_SLOTS {
                return Err(InventoryError::SlotOutOfRange { slot }.into());
            }
        }
        self.state.inventory.swap_weapon_slots(a, b);
        self.state.emit(ArmoryEvent::WeaponSlotsSwapped { a, b });
        Ok(())
    }
}
