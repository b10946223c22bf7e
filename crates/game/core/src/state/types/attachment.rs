//! Weapon attachment types.
//!
//! An attachment is an item that modifies a weapon while mounted on it. The
//! mount is a two-sided link: the weapon's slot points at the attachment and the
//! attachment's `owner` points back at the weapon. Only the binder in
//! [`crate::engine`] writes either side.

use super::ItemId;

/// Mount point on a weapon.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttachmentKind {
    Sight,
    Grip,
    Muzzle,
}

/// Compatibility tag matched against a weapon's allow-lists.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CompatTag(pub String);

impl From<&str> for CompatTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

/// Optic parameters pushed into a weapon's aim camera.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SightData {
    /// Field of view while aiming down this sight (degrees).
    pub zoom_fov: f32,
    /// Seconds the camera takes to blend into the aim view.
    pub transition_time: f32,
}

impl SightData {
    pub fn new(zoom_fov: f32, transition_time: f32) -> Self {
        Self {
            zoom_fov,
            transition_time,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GripData {
    /// Fraction of recoil removed (0.0..=1.0).
    pub recoil_reduction: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MuzzleData {
    /// Fraction of muzzle flash removed (0.0..=1.0).
    pub flash_reduction: f32,
    /// Fraction of shot loudness removed (0.0..=1.0).
    pub sound_reduction: f32,
}

/// Kind-specific modifiers of an attachment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttachmentSpec {
    Sight(SightData),
    Grip(GripData),
    Muzzle(MuzzleData),
}

impl AttachmentSpec {
    pub fn kind(&self) -> AttachmentKind {
        match self {
            AttachmentSpec::Sight(_) => AttachmentKind::Sight,
            AttachmentSpec::Grip(_) => AttachmentKind::Grip,
            AttachmentSpec::Muzzle(_) => AttachmentKind::Muzzle,
        }
    }
}

/// Static attachment definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttachmentData {
    pub tag: CompatTag,
    pub spec: AttachmentSpec,
}

impl AttachmentData {
    pub fn new(tag: impl Into<CompatTag>, spec: AttachmentSpec) -> Self {
        Self {
            tag: tag.into(),
            spec,
        }
    }

    pub fn kind(&self) -> AttachmentKind {
        self.spec.kind()
    }
}

/// Runtime attachment: definition plus the weapon it is mounted on.
#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
    data: AttachmentData,
    owner: Option<ItemId>,
}

impl Attachment {
    pub fn new(data: AttachmentData) -> Self {
        Self { data, owner: None }
    }

    pub fn data(&self) -> &AttachmentData {
        &self.data
    }

    pub fn kind(&self) -> AttachmentKind {
        self.data.kind()
    }

    /// Weapon this attachment is mounted on.
    pub fn owner(&self) -> Option<ItemId> {
        self.owner
    }

    pub fn is_mounted(&self) -> bool {
        self.owner.is_some()
    }

    pub(crate) fn set_owner(&mut self, owner: Option<ItemId>) {
        self.owner = owner;
    }
}
