//! Serializable snapshot of what the player carries.

use armory_core::{ArmoryState, AttachmentKind, GearSlot, ItemId, SightMount, WeaponClass};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeaponLoadout {
    pub slot: usize,
    pub name: String,
    pub class: WeaponClass,
    /// Mounted optic, or `"iron"`.
    pub sight: String,
    pub grip: Option<String>,
    pub muzzle: Option<String>,
    pub recoil: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GearLoadout {
    pub slot: GearSlot,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Loadout {
    pub in_hand: Option<String>,
    pub aiming: bool,
    pub weapons: Vec<WeaponLoadout>,
    pub gear: Vec<GearLoadout>,
    pub common: Vec<String>,
}

impl Loadout {
    pub fn of(state: &ArmoryState) -> Self {
        let name = |id: ItemId| {
            state
                .item(id)
                .map_or_else(|| id.to_string(), |item| item.name().to_string())
        };
        let inventory = state.inventory();

        let weapons = inventory
            .weapon_slots()
            .iter()
            .enumerate()
            .filter_map(|(slot, occupant)| {
                let id = (*occupant)?;
                let weapon = state.items().weapon(id)?;
                Some(WeaponLoadout {
                    slot,
                    name: name(id),
                    class: weapon.data().class,
                    sight: match weapon.sight() {
                        SightMount::Iron => "iron".to_string(),
                        SightMount::Mounted(sight) => name(sight),
                    },
                    grip: weapon.slot_for(AttachmentKind::Grip).map(name),
                    muzzle: weapon.slot_for(AttachmentKind::Muzzle).map(name),
                    recoil: weapon.recoil(),
                })
            })
            .collect();

        let gear = GearSlot::ALL
            .into_iter()
            .filter_map(|slot| {
                inventory.gear(slot).map(|id| GearLoadout {
                    slot,
                    name: name(id),
                })
            })
            .collect();

        Self {
            in_hand: state.hand().in_hand().map(name),
            aiming: state.hand().is_aiming(),
            weapons,
            gear,
            common: inventory.common().iter().copied().map(name).collect(),
        }
    }
}
