use crate::state::ItemId;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AnimationFlag {
    Aiming,
}

/// Boolean animator parameters on an item's representation.
pub trait AnimationService {
    fn set_flag(&mut self, item: ItemId, flag: AnimationFlag, value: bool);
}
