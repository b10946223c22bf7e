use bitflags::bitflags;

use crate::state::{AttachmentKind, ItemId, Vec3};

bitflags! {
    /// Collision layers used to filter proximity queries.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Layers: u32 {
        const ITEMS = 1 << 0;
        const WEAPONS = 1 << 1;
        const PLAYER = 1 << 2;
        const ENVIRONMENT = 1 << 3;
    }
}

impl Default for Layers {
    fn default() -> Self {
        Layers::ITEMS
    }
}

/// Attachment point on a weapon's world representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mount {
    pub weapon: ItemId,
    pub kind: AttachmentKind,
}

impl Mount {
    pub fn new(weapon: ItemId, kind: AttachmentKind) -> Self {
        Self { weapon, kind }
    }
}

/// Scene graph access: proximity queries and the transform/visibility of each
/// item's world representation.
pub trait WorldService {
    /// Items whose representation lies within `radius` of `center` on any of
    /// `layers`, nearest first.
    fn overlap_sphere(&self, center: Vec3, radius: f32, layers: Layers) -> Vec<ItemId>;

    /// Moves the item's representation to a world position.
    fn place(&mut self, item: ItemId, position: Vec3);

    fn set_visible(&mut self, item: ItemId, visible: bool);

    /// Parents the representation under a weapon mount at identity offset, or
    /// detaches it from any parent when `mount` is `None`.
    fn parent(&mut self, item: ItemId, mount: Option<Mount>);
}
