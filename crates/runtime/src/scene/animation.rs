use std::collections::BTreeMap;

use armory_core::{AnimationFlag, AnimationService, ItemId};

/// Boolean animator parameters per item.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    flags: BTreeMap<(ItemId, AnimationFlag), bool>,
}

impl Animator {
    pub fn flag(&self, item: ItemId, flag: AnimationFlag) -> bool {
        self.flags.get(&(item, flag)).copied().unwrap_or(false)
    }
}

impl AnimationService for Animator {
    fn set_flag(&mut self, item: ItemId, flag: AnimationFlag, value: bool) {
        tracing::trace!(%item, %flag, value, "animator flag");
        self.flags.insert((item, flag), value);
    }
}
