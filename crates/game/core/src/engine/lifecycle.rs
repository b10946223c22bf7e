//! Item state machine transitions.
//!
//! `OnGround → Collected → Stored/Held → Dropped → OnGround`. Each public
//! operation validates first and only then mutates, so a rejected call leaves
//! the item exactly as it was.

use crate::error::ReportExt;
use crate::event::ArmoryEvent;
use crate::state::{
    AttachmentKind, AttachmentSpec, Capabilities, ConsumableEffect, InventoryLocation, ItemId,
    ItemKind, ItemState,
};

use super::{ArmoryEngine, ArmoryError, InventoryError, ItemError};

/// Effects of a single shot, handed to presentation (recoil camera, muzzle
/// flash, audio). Never a hit test.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub weapon: ItemId,
    /// Recoil added by this shot after grip reduction.
    pub recoil_kick: f32,
    /// Muzzle flash intensity in `0.0..=1.0`.
    pub flash: f32,
    /// Shot loudness in `0.0..=1.0`.
    pub loudness: f32,
}

/// Result of using an item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseOutcome {
    Fired(ShotReport),
    /// The weapon is still cycling from its previous shot.
    Cycling,
    /// The item applied its effect and no longer exists.
    Consumed(ConsumableEffect),
}

impl<'s, 'e> ArmoryEngine<'s, 'e> {
    /// Takes a world item into the hand's custody and hides it.
    pub fn try_collect(&mut self, item: ItemId) -> Result<(), ArmoryError> {
        self.collect(item).reported("try_collect")
    }

    /// Files a collected item into the inventory collection for its kind.
    pub fn try_store(&mut self, item: ItemId) -> Result<(), ArmoryError> {
        self.store(item).reported("try_store")
    }

    /// Takes an item out of the inventory; it stays collected.
    pub fn try_remove(&mut self, item: ItemId) -> Result<(), ArmoryError> {
        self.remove(item).reported("try_remove")
    }

    pub fn try_remove_and_drop(&mut self, item: ItemId) -> Result<(), ArmoryError> {
        self.remove_and_drop(item).reported("try_remove_and_drop")
    }

    /// Places a collected item in front of the hand.
    pub fn drop(&mut self, item: ItemId) -> Result<(), ArmoryError> {
        self.release(item).reported("drop")
    }

    pub fn use_item(&mut self, item: ItemId) -> Result<UseOutcome, ArmoryError> {
        self.apply_use(item).reported("use_item")
    }

    pub(super) fn collect(&mut self, id: ItemId) -> Result<(), ArmoryError> {
        let item = self.item(id)?;
        if !item.has(Capabilities::COLLECTIBLE) {
            return Err(ItemError::NotCollectible { item: id }.into());
        }
        if item.state().is_collected() {
            return Err(ItemError::AlreadyCollected {
                item: id,
                state: item.state(),
            }
            .into());
        }

        let hand = self.state.hand.id();
        self.item_mut(id)?.pick_up(Some(hand));
        self.env.world.set_visible(id, false);
        tracing::trace!(item = %id, "collected");
        Ok(())
    }

    pub(super) fn store(&mut self, id: ItemId) -> Result<(), ArmoryError> {
        let item = self.item(id)?;
        if item.state() != ItemState::Collected {
            return Err(ItemError::NotReadyToStore {
                item: id,
                state: item.state(),
            }
            .into());
        }
        if !item.has(Capabilities::STORABLE) {
            return Err(ItemError::NotStorable { item: id }.into());
        }
        if item.as_attachment().is_some_and(|a| a.is_mounted()) {
            return Err(ItemError::InUse { item: id }.into());
        }

        match item.kind() {
            ItemKind::Weapon(_) => self.place_weapon(id).map(|_| ()),
            ItemKind::Gear(slot) => {
                let slot = *slot;
                self.place_gear(id, slot)
            }
            ItemKind::Common | ItemKind::Attachment(_) => {
                self.place_common(id);
                Ok(())
            }
            ItemKind::Consumable(_) => Err(ItemError::NotStorable { item: id }.into()),
        }
    }

    pub(super) fn remove(&mut self, id: ItemId) -> Result<(), ArmoryError> {
        self.item(id)?;
        let location = self
            .state
            .inventory
            .location_of(id)
            .ok_or(InventoryError::NotInInventory { item: id })?;

        match location {
            InventoryLocation::Common => {
                self.state.inventory.remove_common(id);
                self.state.emit(ArmoryEvent::CommonItemRemoved { item: id });
            }
            InventoryLocation::WeaponSlot(slot) => {
                if self.state.hand.in_hand() == Some(id) {
                    self.swap_in_hand(None);
                }
                self.state.inventory.set_weapon_slot(slot, None);
                self.state
                    .emit(ArmoryEvent::WeaponRemovedFromSlot { item: id, slot });
            }
            InventoryLocation::Gear(slot) => {
                self.state.inventory.set_gear(slot, None);
                self.state.emit(ArmoryEvent::GearRemoved { item: id, slot });
            }
        }

        self.item_mut(id)?.set_state(ItemState::Collected);
        Ok(())
    }

    pub(super) fn remove_and_drop(&mut self, id: ItemId) -> Result<(), ArmoryError> {
        // Check droppability up front so a failed drop never strands the item
        // outside the inventory.
        if !self.item(id)?.has(Capabilities::DROPPABLE) {
            return Err(ItemError::NotDroppable { item: id }.into());
        }
        self.remove(id)?;
        self.release(id)
    }

    pub(super) fn release(&mut self, id: ItemId) -> Result<(), ArmoryError> {
        let item = self.item(id)?;
        if !item.state().is_collected() {
            return Err(ItemError::NotCollected {
                item: id,
                state: item.state(),
            }
            .into());
        }
        if !item.has(Capabilities::DROPPABLE) {
            return Err(ItemError::NotDroppable { item: id }.into());
        }
        let mounted = item.as_attachment().is_some_and(|a| a.is_mounted());
        if mounted || self.state.inventory.holds(id) {
            return Err(ItemError::InUse { item: id }.into());
        }

        let position = self.state.hand.pose().ahead(self.state.config.drop_distance);
        self.env.world.parent(id, None);
        self.env.world.place(id, position);
        self.env.world.set_visible(id, true);
        self.item_mut(id)?.release(position);
        self.state.emit(ArmoryEvent::ItemDropped { item: id, position });
        Ok(())
    }

    fn apply_use(&mut self, id: ItemId) -> Result<UseOutcome, ArmoryError> {
        let item = self.item(id)?;
        if !item.has(Capabilities::USABLE) {
            return Err(ItemError::NotUsable { item: id }.into());
        }
        if !item.state().is_collected() {
            return Err(ItemError::NotCollected {
                item: id,
                state: item.state(),
            }
            .into());
        }

        match item.kind() {
            ItemKind::Weapon(_) => self.fire_weapon(id),
            ItemKind::Consumable(effect) => {
                let effect = *effect;
                self.consume(id, effect);
                Ok(UseOutcome::Consumed(effect))
            }
            _ => Err(ItemError::NotUsable { item: id }.into()),
        }
    }

    fn fire_weapon(&mut self, id: ItemId) -> Result<UseOutcome, ArmoryError> {
        let weapon = self.weapon(id)?;
        if !weapon.ready_to_fire() {
            tracing::trace!(weapon = %id, cooldown = weapon.cooldown(), "weapon cycling");
            return Ok(UseOutcome::Cycling);
        }

        let recoil_per_shot = weapon.data().recoil_per_shot;
        let grip = weapon.slot_for(AttachmentKind::Grip);
        let muzzle = weapon.slot_for(AttachmentKind::Muzzle);

        let mut report = ShotReport {
            weapon: id,
            recoil_kick: recoil_per_shot,
            flash: 1.0,
            loudness: 1.0,
        };
        if let Some(AttachmentSpec::Grip(grip)) = grip.and_then(|g| self.mounted_spec(g)) {
            report.recoil_kick *= 1.0 - grip.recoil_reduction.clamp(0.0, 1.0);
        }
        if let Some(AttachmentSpec::Muzzle(muzzle)) = muzzle.and_then(|m| self.mounted_spec(m)) {
            report.flash = 1.0 - muzzle.flash_reduction.clamp(0.0, 1.0);
            report.loudness = 1.0 - muzzle.sound_reduction.clamp(0.0, 1.0);
        }

        self.weapon_mut(id)?.register_shot(report.recoil_kick);
        self.state.emit(ArmoryEvent::WeaponFired {
            weapon: id,
            recoil_kick: report.recoil_kick,
            flash: report.flash,
            loudness: report.loudness,
        });
        Ok(UseOutcome::Fired(report))
    }

    fn mounted_spec(&self, attachment: ItemId) -> Option<AttachmentSpec> {
        self.state
            .items
            .attachment(attachment)
            .map(|a| a.data().spec)
    }

    /// Applies a consumable's effect and removes it from the arena.
    pub(super) fn consume(&mut self, id: ItemId, effect: ConsumableEffect) {
        self.state.items.remove(id);
        let nearby: Vec<ItemId> = self
            .state
            .hand
            .nearby()
            .iter()
            .copied()
            .filter(|item| *item != id)
            .collect();
        self.state.hand.replace_nearby(nearby);
        tracing::debug!(item = %id, ?effect, "consumed");
        self.state.emit(ArmoryEvent::ItemConsumed { item: id, effect });
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{ArmoryError, ItemError};
    use crate::event::ArmoryEvent;
    use crate::state::{ItemState, Vec3};
    use crate::testing::{self, Harness};

    #[test]
    fn collect_hides_and_clears_position() {
        let mut h = Harness::new();
        let ammo = h.spawn(testing::ammo(), Vec3::new(1.0, 0.0, 0.0));

        h.engine().try_collect(ammo).unwrap();

        let item = h.state.item(ammo).unwrap();
        assert_eq!(item.state(), ItemState::Collected);
        assert_eq!(item.position(), None);
        assert!(!h.world.is_visible(ammo));
    }

    #[test]
    fn double_collect_is_rejected() {
        let mut h = Harness::new();
        let ammo = h.spawn(testing::ammo(), Vec3::ZERO);
        h.engine().try_collect(ammo).unwrap();

        let err = h.engine().try_collect(ammo).unwrap_err();
        assert_eq!(
            err,
            ArmoryError::Item(ItemError::AlreadyCollected {
                item: ammo,
                state: ItemState::Collected
            })
        );
    }

    #[test]
    fn store_requires_fresh_collect() {
        let mut h = Harness::new();
        let ammo = h.spawn(testing::ammo(), Vec3::ZERO);

        assert!(matches!(
            h.engine().try_store(ammo),
            Err(ArmoryError::Item(ItemError::NotReadyToStore { .. }))
        ));

        h.engine().try_collect(ammo).unwrap();
        h.engine().try_store(ammo).unwrap();
        assert_eq!(h.state.item(ammo).unwrap().state(), ItemState::Stored);
        assert_eq!(h.state.inventory().common(), &[ammo]);
    }

    #[test]
    fn drop_twice_fails_second_time_without_moving() {
        let mut h = Harness::new();
        h.face(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 2.0));
        let ammo = h.spawn(testing::ammo(), Vec3::new(5.0, 0.0, 0.0));
        h.engine().try_collect(ammo).unwrap();

        h.engine().drop(ammo).unwrap();
        let expected = Vec3::new(0.0, 1.0, 1.5);
        assert_eq!(h.state.item(ammo).unwrap().position(), Some(expected));
        assert_eq!(h.world.position(ammo), Some(expected));

        h.face(Vec3::new(10.0, 0.0, 0.0), Vec3::FORWARD);
        assert!(matches!(
            h.engine().drop(ammo),
            Err(ArmoryError::Item(ItemError::NotCollected { .. }))
        ));
        assert_eq!(h.state.item(ammo).unwrap().position(), Some(expected));
        assert_eq!(h.world.position(ammo), Some(expected));
    }

    #[test]
    fn stored_item_must_be_removed_before_dropping() {
        let mut h = Harness::new();
        let ammo = h.spawn(testing::ammo(), Vec3::ZERO);
        h.engine().try_collect(ammo).unwrap();
        h.engine().try_store(ammo).unwrap();

        assert!(matches!(
            h.engine().drop(ammo),
            Err(ArmoryError::Item(ItemError::InUse { .. }))
        ));

        h.engine().try_remove_and_drop(ammo).unwrap();
        assert_eq!(h.state.item(ammo).unwrap().state(), ItemState::Dropped);
        assert!(h.state.inventory().common().is_empty());
        let events = h.state.drain_events();
        assert!(events.contains(&ArmoryEvent::CommonItemRemoved { item: ammo }));
    }

    #[test]
    fn remove_returns_item_to_collected() {
        let mut h = Harness::new();
        let helmet = h.spawn(testing::helmet(), Vec3::ZERO);
        h.engine().try_collect(helmet).unwrap();
        h.engine().try_store(helmet).unwrap();

        h.engine().try_remove(helmet).unwrap();
        assert_eq!(h.state.item(helmet).unwrap().state(), ItemState::Collected);
        assert!(!h.state.inventory().holds(helmet));
        assert!(matches!(
            h.engine().try_remove(helmet),
            Err(ArmoryError::Inventory(_))
        ));
    }

    #[test]
    fn common_items_are_not_usable() {
        let mut h = Harness::new();
        let ammo = h.spawn(testing::ammo(), Vec3::ZERO);
        h.engine().try_collect(ammo).unwrap();
        assert!(matches!(
            h.engine().use_item(ammo),
            Err(ArmoryError::Item(ItemError::NotUsable { .. }))
        ));
    }
}
