//! Per-frame driver.

use crate::env::Env;
use crate::input::InputSnapshot;
use crate::state::{ArmoryState, ItemId, ItemState};

use super::{ArmoryEngine, ShotReport, UseOutcome};

/// What happened during one frame, besides the emitted events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickOutcome {
    pub picked: Option<ItemId>,
    pub shot: Option<ShotReport>,
}

impl<'s, 'e> ArmoryEngine<'s, 'e> {
    /// Runs one frame.
    ///
    /// Order: settle dropped items, advance weapon timers, rescan, then the
    /// input triggers (pickup, primary, secondary, holster, aim, fire).
    /// Rejected triggers are logged by the operation and skipped.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        for item in self.state.items.items_mut() {
            if item.state() == ItemState::Dropped {
                item.set_state(ItemState::OnGround);
            }
        }
        for weapon in self.state.items.weapons_mut() {
            weapon.advance(dt);
        }

        self.scan();

        if input.pickup {
            outcome.picked = self.pickup().ok().flatten();
        }
        for (pressed, slot) in [(input.primary_slot, 0), (input.secondary_slot, 1)] {
            if pressed && let Err(err) = self.select_slot(slot) {
                tracing::trace!(slot, %err, "slot selection skipped");
            }
        }
        if input.holster {
            self.holster();
        }

        if input.aim && !self.state.hand.is_aiming() {
            self.start_aim_down_sight();
        } else if !input.aim && self.state.hand.is_aiming() {
            self.stop_aim_down_sight();
        }

        if input.fire
            && let Ok(Some(UseOutcome::Fired(shot))) = self.fire()
        {
            outcome.shot = Some(shot);
        }

        outcome
    }
}

impl ArmoryState {
    /// Runs one frame against the given services.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32, env: Env<'_>) -> TickOutcome {
        ArmoryEngine::new(self, env).tick(input, dt)
    }
}

#[cfg(test)]
mod tests {
    use crate::env::AnimationFlag;
    use crate::input::InputSnapshot;
    use crate::state::{ItemState, Vec3};
    use crate::testing::{self, Harness};

    #[test]
    fn dropped_items_settle_on_next_tick() {
        let mut h = Harness::new();
        let ammo = h.collected(testing::ammo());
        h.engine().drop(ammo).unwrap();
        assert_eq!(h.state.item(ammo).unwrap().state(), ItemState::Dropped);

        h.tick(InputSnapshot::idle(), 0.016);
        assert_eq!(h.state.item(ammo).unwrap().state(), ItemState::OnGround);
    }

    #[test]
    fn pickup_trigger_collects_and_equips() {
        let mut h = Harness::new();
        let gun = h.spawn(testing::rifle("g"), Vec3::new(1.0, 0.0, 0.0));

        let outcome = h.tick(InputSnapshot::pickup(), 0.016);
        assert_eq!(outcome.picked, Some(gun));
        assert_eq!(h.state.hand().in_hand(), Some(gun));

        h.tick(InputSnapshot::idle(), 0.016);
        assert!(h.state.hand().nearby().is_empty());
    }

    #[test]
    fn aim_is_edge_detected_from_level_input() {
        let mut h = Harness::new();
        let gun = h.spawn(testing::rifle("g"), Vec3::ZERO);
        h.tick(InputSnapshot::pickup(), 0.016);

        h.tick(InputSnapshot::aim(), 0.016);
        assert!(h.state.hand().is_aiming());
        assert!(h.animation.flag(gun, AnimationFlag::Aiming));

        h.tick(InputSnapshot::idle(), 0.016);
        assert!(!h.state.hand().is_aiming());
        assert!(!h.animation.flag(gun, AnimationFlag::Aiming));
    }

    #[test]
    fn held_fire_respects_interval_and_recoil_recovers() {
        let mut h = Harness::new();
        let gun = h.spawn(testing::rifle("g"), Vec3::ZERO);
        h.tick(InputSnapshot::pickup(), 0.016);

        let first = h.tick(InputSnapshot::fire(), 0.05);
        assert!(first.shot.is_some());
        let second = h.tick(InputSnapshot::fire(), 0.05);
        assert!(second.shot.is_none());
        let third = h.tick(InputSnapshot::fire(), 0.06);
        assert!(third.shot.is_some());

        let recoil = h.state.items().weapon(gun).unwrap().recoil();
        assert!(recoil > 0.0);
        h.tick(InputSnapshot::idle(), 10.0);
        assert_eq!(h.state.items().weapon(gun).unwrap().recoil(), 0.0);
    }

    #[test]
    fn holster_then_draw_secondary() {
        let mut h = Harness::new();
        let gun = h.spawn(testing::rifle("g"), Vec3::ZERO);
        h.tick(InputSnapshot::pickup(), 0.016);

        h.tick(InputSnapshot::holster(), 0.016);
        assert!(h.state.hand().is_empty());
        h.tick(InputSnapshot::select_slot(0), 0.016);
        assert_eq!(h.state.hand().in_hand(), Some(gun));
        assert_eq!(h.state.item(gun).unwrap().state(), ItemState::Held);
    }
}
