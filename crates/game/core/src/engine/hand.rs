//! Collector / hand operations: scanning, pickup, equip and fire.

use crate::config::ArmoryConfig;
use crate::error::{ReportExt, report};
use crate::event::ArmoryEvent;
use crate::state::{Capabilities, ItemId, ItemKind, ItemState};

use super::{ArmoryEngine, ArmoryError, InventoryError, UseOutcome};

impl<'s, 'e> ArmoryEngine<'s, 'e> {
    /// Refreshes the hand's list of collectible items in reach.
    ///
    /// The list is replaced, never accumulated; the order is the world's
    /// discovery order.
    pub fn scan(&mut self) -> &[ItemId] {
        let pose = self.state.hand.pose();
        let found = self.env.world.overlap_sphere(
            pose.position,
            self.state.hand.detection_radius(),
            self.state.config.item_layers,
        );

        let mut nearby: Vec<ItemId> = Vec::with_capacity(found.len());
        for id in found {
            let candidate = self
                .state
                .items
                .get(id)
                .is_some_and(|item| item.has(Capabilities::COLLECTIBLE) && !item.state().is_collected());
            if candidate && !nearby.contains(&id) {
                nearby.push(id);
            }
        }
        self.state.hand.replace_nearby(nearby);
        self.state.hand.nearby()
    }

    /// Picks up the first nearby item that can be collected and routes it.
    ///
    /// Returns `Ok(None)` when nothing in reach could be collected. If the
    /// inventory rejects the item, the collect is undone and the item stays in
    /// the world.
    pub fn pickup(&mut self) -> Result<Option<ItemId>, ArmoryError> {
        self.pick().reported("pickup")
    }

    /// Draws the weapon in `slot`, putting away the current one. An empty slot
    /// leaves the hand empty.
    pub fn select_slot(&mut self, slot: usize) -> Result<(), ArmoryError> {
        if slot >= ArmoryConfig::WEAPON_SLOTS {
            let err: ArmoryError = InventoryError::SlotOutOfRange { slot }.into();
            report("select_slot", &err);
            return Err(err);
        }
        let next = self.state.inventory.weapon_in(slot);
        self.swap_in_hand(next);
        Ok(())
    }

    /// Puts the item in hand back into its slot. Returns what was held.
    pub fn holster(&mut self) -> Option<ItemId> {
        let previous = self.state.hand.in_hand();
        self.swap_in_hand(None);
        previous
    }

    /// Uses the weapon in hand. `Ok(None)` with an empty hand.
    pub fn fire(&mut self) -> Result<Option<UseOutcome>, ArmoryError> {
        match self.state.hand.in_hand() {
            Some(weapon) => self.use_item(weapon).map(Some),
            None => Ok(None),
        }
    }

    fn pick(&mut self) -> Result<Option<ItemId>, ArmoryError> {
        let candidates = self.state.hand.nearby().to_vec();

        let mut picked = None;
        for id in candidates {
            let Some(item) = self.state.items.get(id) else {
                continue;
            };
            let snapshot = (item.state(), item.position(), item.collector());
            match self.collect(id) {
                Ok(()) => {
                    picked = Some((id, snapshot));
                    break;
                }
                Err(err) => tracing::trace!(item = %id, %err, "skipping pickup candidate"),
            }
        }
        let Some((id, (state, position, collector))) = picked else {
            return Ok(None);
        };

        let kind = self.item(id)?.kind().clone();
        match kind {
            ItemKind::Consumable(effect) => {
                self.consume(id, effect);
            }
            _ => {
                if let Err(err) = self.store(id) {
                    self.item_mut(id)?.restore(state, position, collector);
                    self.env.world.set_visible(id, true);
                    return Err(err);
                }
                let holdable = self.item(id)?.has(Capabilities::HOLDABLE);
                if holdable && self.state.hand.is_empty() {
                    self.swap_in_hand(Some(id));
                }
            }
        }

        let remaining: Vec<ItemId> = self
            .state
            .hand
            .nearby()
            .iter()
            .copied()
            .filter(|item| *item != id)
            .collect();
        self.state.hand.replace_nearby(remaining);
        tracing::debug!(item = %id, "picked up");
        Ok(Some(id))
    }

    /// Replaces the item in hand, ending any aim on the previous weapon.
    pub(super) fn swap_in_hand(&mut self, next: Option<ItemId>) {
        let previous = self.state.hand.in_hand();
        if previous == next {
            return;
        }
        if previous.is_some() && self.state.hand.is_aiming() {
            self.stop_aim_down_sight();
        }
        if let Some(prev) = previous
            && let Some(item) = self.state.items.get_mut(prev)
            && item.state() == ItemState::Held
        {
            item.set_state(ItemState::Stored);
        }

        self.state.hand.set_in_hand(next);
        if let Some(id) = next
            && let Some(item) = self.state.items.get_mut(id)
        {
            item.set_state(ItemState::Held);
        }
        self.state.emit(ArmoryEvent::InHandChanged {
            previous,
            current: next,
        });
    }
}
