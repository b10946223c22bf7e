//! Attachment binder.
//!
//! The only code that writes either side of the weapon/attachment link. Both
//! sides always change together, after every precondition has been checked.

use crate::env::{AnimationFlag, Mount};
use crate::error::ReportExt;
use crate::event::ArmoryEvent;
use crate::state::{
    AttachmentData, AttachmentKind, AttachmentSpec, ItemId, ItemState, SightData, WeaponData,
};

use super::{ArmoryEngine, ArmoryError, AttachError, InventoryError, ItemError};

/// True when the weapon's allow-list for the attachment's kind contains its
/// tag.
pub fn is_weapon_compatible(attachment: &AttachmentData, weapon: &WeaponData) -> bool {
    weapon.compat.allows(attachment.kind(), &attachment.tag)
}

/// Checked attach request, ready to apply.
struct AttachPlan {
    attachment: ItemId,
    weapon: ItemId,
    kind: AttachmentKind,
    sight: Option<SightData>,
    /// User attachment currently in the target slot.
    displaced: Option<ItemId>,
}

/// Checked detach request, ready to apply.
struct DetachPlan {
    attachment: ItemId,
    weapon: ItemId,
    kind: AttachmentKind,
    iron_sight: SightData,
}

impl<'s, 'e> ArmoryEngine<'s, 'e> {
    /// Mounts an attachment on a weapon.
    ///
    /// The attachment must be unmounted, compatible, and not filed in the
    /// inventory, and the weapon's slot for its kind must be free (the iron
    /// sight counts as free).
    pub fn attach_to_weapon(
        &mut self,
        attachment: ItemId,
        weapon: ItemId,
    ) -> Result<(), ArmoryError> {
        self.plan_attach(attachment, weapon)
            .and_then(|plan| {
                if let Some(occupant) = plan.displaced {
                    return Err(AttachError::SlotOccupied {
                        weapon,
                        kind: plan.kind,
                        occupant,
                    }
                    .into());
                }
                if self.state.inventory.holds(attachment) {
                    return Err(ItemError::InUse { item: attachment }.into());
                }
                self.apply_attach(plan)
            })
            .reported("attach_to_weapon")
    }

    /// Unmounts an attachment, clearing both sides of the link. The attachment
    /// stays collected and hidden.
    pub fn detach_from_weapon(&mut self, attachment: ItemId) -> Result<(), ArmoryError> {
        self.plan_detach(attachment)
            .and_then(|plan| self.apply_detach(plan))
            .reported("detach_from_weapon")
    }

    /// Drag-and-drop of a common item onto a weapon. A user attachment already
    /// in the target slot goes back to the common items.
    pub fn mount_attachment(
        &mut self,
        attachment: ItemId,
        weapon: ItemId,
    ) -> Result<(), ArmoryError> {
        self.mount(attachment, weapon).reported("mount_attachment")
    }

    /// Detaches an attachment and returns it to the common items.
    pub fn unmount_attachment(&mut self, attachment: ItemId) -> Result<(), ArmoryError> {
        self.plan_detach(attachment)
            .and_then(|plan| self.apply_detach(plan))
            .map(|()| self.place_common(attachment))
            .reported("unmount_attachment")
    }

    /// Aims through the in-hand weapon's current sight. No-op with an empty
    /// hand.
    pub fn start_aim_down_sight(&mut self) {
        let Some(weapon) = self.state.hand.in_hand() else {
            return;
        };
        let Some(sight) = self.current_sight(weapon) else {
            return;
        };
        self.env.camera.configure_aim(weapon, sight);
        self.env.camera.set_aim_priority(weapon, true);
        self.env
            .animation
            .set_flag(weapon, AnimationFlag::Aiming, true);
        self.state.hand.set_aiming(true);
        tracing::trace!(%weapon, zoom_fov = sight.zoom_fov, "aim down sight");
    }

    pub fn stop_aim_down_sight(&mut self) {
        if let Some(weapon) = self.state.hand.in_hand() {
            self.env.camera.set_aim_priority(weapon, false);
            self.env
                .animation
                .set_flag(weapon, AnimationFlag::Aiming, false);
        }
        self.state.hand.set_aiming(false);
    }

    /// Optic the weapon aims through: its mounted sight, else the iron sight.
    fn current_sight(&self, weapon: ItemId) -> Option<SightData> {
        let weapon = self.state.items.weapon(weapon)?;
        let mounted = weapon
            .sight()
            .mounted()
            .and_then(|sight| self.state.items.attachment(sight))
            .and_then(|sight| match sight.data().spec {
                AttachmentSpec::Sight(data) => Some(data),
                _ => None,
            });
        Some(mounted.unwrap_or(weapon.data().iron_sight))
    }

    fn mount(&mut self, attachment: ItemId, weapon: ItemId) -> Result<(), ArmoryError> {
        if !self.state.inventory.common().contains(&attachment) {
            self.item(attachment)?;
            return Err(InventoryError::NotInCommon { item: attachment }.into());
        }
        let plan = self.plan_attach(attachment, weapon)?;
        let displaced = match plan.displaced {
            Some(occupant) => Some(self.plan_detach(occupant)?),
            None => None,
        };

        if let Some(detach) = displaced {
            let occupant = detach.attachment;
            self.apply_detach(detach)?;
            self.place_common(occupant);
        }
        self.state.inventory.remove_common(attachment);
        self.state
            .emit(ArmoryEvent::CommonItemRemoved { item: attachment });
        self.apply_attach(plan)
    }

    fn plan_attach(&self, attachment: ItemId, weapon: ItemId) -> Result<AttachPlan, ArmoryError> {
        let mounted = self.attachment(attachment)?;
        if let Some(owner) = mounted.owner() {
            return Err(AttachError::AlreadyMounted {
                attachment,
                weapon: owner,
            }
            .into());
        }
        let target = self.weapon(weapon)?;
        let kind = mounted.kind();
        if !is_weapon_compatible(mounted.data(), target.data()) {
            return Err(AttachError::Incompatible {
                attachment,
                weapon,
                kind,
            }
            .into());
        }
        let sight = match mounted.data().spec {
            AttachmentSpec::Sight(data) => Some(data),
            _ => None,
        };

        Ok(AttachPlan {
            attachment,
            weapon,
            kind,
            sight,
            displaced: target.slot_for(kind),
        })
    }

    fn apply_attach(&mut self, plan: AttachPlan) -> Result<(), ArmoryError> {
        let AttachPlan {
            attachment,
            weapon,
            kind,
            sight,
            ..
        } = plan;

        self.weapon_mut(weapon)?.set_slot(kind, Some(attachment));
        self.attachment_mut(attachment)?.set_owner(Some(weapon));
        let hand = self.state.hand.id();
        let item = self.item_mut(attachment)?;
        if item.state().is_in_world() {
            item.pick_up(Some(hand));
        } else {
            item.set_state(ItemState::Collected);
        }

        self.env
            .world
            .parent(attachment, Some(Mount::new(weapon, kind)));
        self.env.world.set_visible(attachment, true);
        if let Some(sight) = sight {
            self.env.camera.configure_aim(weapon, sight);
        }
        tracing::debug!(%attachment, %weapon, %kind, "attachment mounted");
        self.state.emit(ArmoryEvent::AttachmentMounted {
            attachment,
            weapon,
            kind,
        });
        Ok(())
    }

    fn plan_detach(&self, attachment: ItemId) -> Result<DetachPlan, ArmoryError> {
        let mounted = self.attachment(attachment)?;
        let Some(weapon) = mounted.owner() else {
            return Err(AttachError::NotMounted { attachment }.into());
        };
        let kind = mounted.kind();
        let owner = self
            .state
            .items
            .weapon(weapon)
            .filter(|owner| owner.slot_for(kind) == Some(attachment))
            .ok_or(AttachError::BrokenLink { attachment, weapon })?;

        Ok(DetachPlan {
            attachment,
            weapon,
            kind,
            iron_sight: owner.data().iron_sight,
        })
    }

    fn apply_detach(&mut self, plan: DetachPlan) -> Result<(), ArmoryError> {
        let DetachPlan {
            attachment,
            weapon,
            kind,
            iron_sight,
        } = plan;

        self.weapon_mut(weapon)?.set_slot(kind, None);
        self.attachment_mut(attachment)?.set_owner(None);

        self.env.world.parent(attachment, None);
        self.env.world.set_visible(attachment, false);
        if kind == AttachmentKind::Sight {
            self.env.camera.configure_aim(weapon, iron_sight);
        }
        tracing::debug!(%attachment, %weapon, %kind, "attachment unmounted");
        self.state.emit(ArmoryEvent::AttachmentUnmounted {
            attachment,
            weapon,
            kind,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Mount;
    use crate::state::{AttachmentCompat, GripData, Vec3};
    use crate::testing::{self, Harness};

    #[test]
    fn compatibility_is_per_kind() {
        let weapon = testing::rifle_data().with_compat(AttachmentCompat {
            sights: vec!["rail".into()],
            grips: vec![],
            muzzles: vec![],
        });
        let sight = testing::sight_data("rail", 40.0);
        let grip = AttachmentData::new("rail", AttachmentSpec::Grip(GripData { recoil_reduction: 0.5 }));
        assert!(is_weapon_compatible(&sight, &weapon));
        assert!(!is_weapon_compatible(&grip, &weapon));
    }

    #[test]
    fn attach_links_both_sides_and_pushes_zoom() {
        let mut h = Harness::new();
        let rifle = h.collected(testing::rifle("r"));
        let scope = h.collected(testing::sight("rail", 30.0));

        h.engine().attach_to_weapon(scope, rifle).unwrap();

        let weapon = h.state.items().weapon(rifle).unwrap();
        assert_eq!(weapon.slot_for(AttachmentKind::Sight), Some(scope));
        assert_eq!(h.state.items().attachment(scope).unwrap().owner(), Some(rifle));
        assert_eq!(h.camera.zoom(rifle), Some(30.0));
        assert_eq!(
            h.world.parent_of(scope),
            Some(Mount::new(rifle, AttachmentKind::Sight))
        );
        assert!(h.world.is_visible(scope));
        assert!(h.state.items().broken_links().is_empty());
    }

    #[test]
    fn incompatible_attachment_changes_nothing() {
        let mut h = Harness::new();
        let rifle = h.collected(testing::rifle("r"));
        let odd = h.collected(testing::sight("dovetail", 20.0));
        let before = h.state.clone();

        let err = h.engine().attach_to_weapon(odd, rifle).unwrap_err();
        assert!(matches!(err, ArmoryError::Attach(AttachError::Incompatible { .. })));
        assert_eq!(h.state, before);
        assert_eq!(h.camera.zoom(rifle), None);
    }

    #[test]
    fn already_mounted_attachment_is_rejected() {
        let mut h = Harness::new();
        let r1 = h.collected(testing::rifle("r1"));
        let r2 = h.collected(testing::rifle("r2"));
        let grip = h.collected(testing::grip(0.5));
        h.engine().attach_to_weapon(grip, r1).unwrap();

        assert_eq!(
            h.engine().attach_to_weapon(grip, r2),
            Err(AttachError::AlreadyMounted {
                attachment: grip,
                weapon: r1
            }
            .into())
        );
        assert_eq!(h.state.items().weapon(r2).unwrap().slot_for(AttachmentKind::Grip), None);
    }

    #[test]
    fn occupied_slot_is_rejected_by_direct_attach() {
        let mut h = Harness::new();
        let rifle = h.collected(testing::rifle("r"));
        let g1 = h.collected(testing::grip(0.3));
        let g2 = h.collected(testing::grip(0.6));
        h.engine().attach_to_weapon(g1, rifle).unwrap();

        assert!(matches!(
            h.engine().attach_to_weapon(g2, rifle),
            Err(ArmoryError::Attach(AttachError::SlotOccupied { occupant, .. })) if occupant == g1
        ));
    }

    #[test]
    fn detach_unmounted_attachment_fails_without_touching_weapons() {
        let mut h = Harness::new();
        let rifle = h.collected(testing::rifle("r"));
        let grip = h.collected(testing::grip(0.5));
        let before = h.state.clone();

        assert_eq!(
            h.engine().detach_from_weapon(grip),
            Err(AttachError::NotMounted { attachment: grip }.into())
        );
        assert_eq!(h.state, before);
        assert_eq!(h.state.items().weapon(rifle).unwrap().mounted().count(), 0);
    }

    #[test]
    fn detaching_sight_restores_iron_sight() {
        let mut h = Harness::new();
        let rifle = h.collected(testing::rifle("r"));
        let scope = h.collected(testing::sight("rail", 30.0));
        h.engine().attach_to_weapon(scope, rifle).unwrap();

        h.engine().detach_from_weapon(scope).unwrap();

        let weapon = h.state.items().weapon(rifle).unwrap();
        assert_eq!(weapon.sight(), crate::state::SightMount::Iron);
        assert_eq!(h.state.items().attachment(scope).unwrap().owner(), None);
        assert_eq!(h.camera.zoom(rifle), Some(weapon.data().iron_sight.zoom_fov));
        assert_eq!(h.world.parent_of(scope), None);
        assert!(!h.world.is_visible(scope));
    }

    #[test]
    fn scenario_b_mounting_second_sight_returns_first_to_common() {
        let mut h = Harness::new();
        let rifle = h.collected(testing::rifle("w"));
        h.engine().add_weapon(rifle).unwrap();
        let s1 = h.collected(testing::sight("rail", 40.0));
        let s2 = h.collected(testing::sight("rail", 25.0));
        h.engine().add_common(s1).unwrap();
        h.engine().add_common(s2).unwrap();
        h.engine().mount_attachment(s1, rifle).unwrap();

        h.engine().mount_attachment(s2, rifle).unwrap();

        let weapon = h.state.items().weapon(rifle).unwrap();
        assert_eq!(weapon.slot_for(AttachmentKind::Sight), Some(s2));
        assert_eq!(h.state.items().attachment(s1).unwrap().owner(), None);
        assert_eq!(h.state.inventory().common(), &[s1]);
        assert_eq!(h.state.item(s1).unwrap().state(), ItemState::Stored);
        assert_eq!(h.camera.zoom(rifle), Some(25.0));
        assert!(h.state.items().broken_links().is_empty());
    }

    #[test]
    fn mount_requires_common_item() {
        let mut h = Harness::new();
        let rifle = h.collected(testing::rifle("w"));
        let grip = h.spawn(testing::grip(0.5), Vec3::ZERO);
        assert_eq!(
            h.engine().mount_attachment(grip, rifle),
            Err(InventoryError::NotInCommon { item: grip }.into())
        );
    }

    #[test]
    fn mounted_attachment_cannot_be_filed_in_inventory() {
        let mut h = Harness::new();
        let rifle = h.collected(testing::rifle("r"));
        let grip = h.collected(testing::grip(0.5));
        h.engine().attach_to_weapon(grip, rifle).unwrap();
        let before = h.state.clone();

        assert_eq!(h.engine().try_store(grip), Err(ItemError::InUse { item: grip }.into()));
        assert_eq!(h.engine().add_common(grip), Err(ItemError::InUse { item: grip }.into()));
        assert_eq!(h.state, before);
        assert!(h.state.inventory().common().is_empty());
        assert_eq!(h.state.items().attachment(grip).unwrap().owner(), Some(rifle));

        h.engine().unmount_attachment(grip).unwrap();
        assert_eq!(h.state.inventory().common(), &[grip]);
    }

    #[test]
    fn unmount_returns_attachment_to_common() {
        let mut h = Harness::new();
        let rifle = h.collected(testing::rifle("w"));
        let muzzle = h.collected(testing::muzzle(0.5, 0.5));
        h.engine().add_common(muzzle).unwrap();
        h.engine().mount_attachment(muzzle, rifle).unwrap();
        assert!(h.state.inventory().common().is_empty());

        h.engine().unmount_attachment(muzzle).unwrap();
        assert_eq!(h.state.inventory().common(), &[muzzle]);
        assert_eq!(h.state.items().weapon(rifle).unwrap().mounted().count(), 0);
    }

    #[test]
    fn aim_uses_mounted_sight_and_sets_flag() {
        let mut h = Harness::new();
        let rifle = h.collected(testing::rifle("w"));
        h.engine().add_weapon(rifle).unwrap();
        let scope = h.collected(testing::sight("rail", 15.0));
        h.engine().attach_to_weapon(scope, rifle).unwrap();
        h.engine().select_slot(0).unwrap();

        h.engine().start_aim_down_sight();
        assert!(h.state.hand().is_aiming());
        assert_eq!(h.camera.zoom(rifle), Some(15.0));
        assert!(h.camera.has_priority(rifle));
        assert!(h.animation.flag(rifle, AnimationFlag::Aiming));

        h.engine().stop_aim_down_sight();
        assert!(!h.state.hand().is_aiming());
        assert!(!h.camera.has_priority(rifle));
        assert!(!h.animation.flag(rifle, AnimationFlag::Aiming));
    }

    #[test]
    fn aim_without_weapon_is_a_no_op() {
        let mut h = Harness::new();
        h.engine().start_aim_down_sight();
        assert!(!h.state.hand().is_aiming());
    }
}
