//! Item arena.
//!
//! Every item (in the world, carried, or mounted on a weapon) lives here and is
//! referenced elsewhere by [`ItemId`]. Ids are allocated sequentially and never
//! reused; an id disappears only when its item is consumed.

use std::collections::BTreeMap;

use super::{Attachment, Item, ItemDefinition, ItemId, ItemKind, Vec3, Weapon};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemArena {
    items: BTreeMap<ItemId, Item>,
    next_id: u32,
}

impl ItemArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns an item lying in the world and returns its id.
    pub fn spawn(&mut self, definition: ItemDefinition, position: Vec3) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.insert(id, Item::on_ground(id, definition, position));
        id
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn weapon(&self, id: ItemId) -> Option<&Weapon> {
        self.get(id)?.as_weapon()
    }

    pub fn attachment(&self, id: ItemId) -> Option<&Attachment> {
        self.get(id)?.as_attachment()
    }

    /// Items in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds the first item with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<ItemId> {
        self.iter().find(|item| item.name() == name).map(Item::id)
    }

    /// Returns every weapon/attachment pair whose two link sides disagree.
    ///
    /// Empty when the arena is consistent.
    pub fn broken_links(&self) -> Vec<(ItemId, ItemId)> {
        let mut broken = Vec::new();
        for item in self.iter() {
            match item.kind() {
                ItemKind::Attachment(attachment) => {
                    if let Some(owner) = attachment.owner() {
                        let points_back = self
                            .weapon(owner)
                            .is_some_and(|w| w.slot_for(attachment.kind()) == Some(item.id()));
                        if !points_back {
                            broken.push((owner, item.id()));
                        }
                    }
                }
                ItemKind::Weapon(weapon) => {
                    for mounted in weapon.mounted() {
                        let points_back = self
                            .attachment(mounted)
                            .is_some_and(|a| a.owner() == Some(item.id()));
                        if !points_back {
                            broken.push((item.id(), mounted));
                        }
                    }
                }
                _ => {}
            }
        }
        broken
    }

    pub(crate) fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(&id)
    }

    pub(crate) fn weapons_mut(&mut self) -> impl Iterator<Item = &mut Weapon> {
        self.items.values_mut().filter_map(Item::as_weapon_mut)
    }

    pub(crate) fn items_mut(&mut self) -> impl Iterator<Item = &mut Item> {
        self.items.values_mut()
    }

    pub(crate) fn remove(&mut self, id: ItemId) -> Option<Item> {
        self.items.remove(&id)
    }
}
