//! Collector / hand state.

use super::{HandId, HandPose, ItemId};

/// The player-attached collector: detects nearby items and holds at most one
/// weapon drawn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    id: HandId,
    pose: HandPose,
    detection_radius: f32,
    /// Result of the latest scan, in discovery order.
    nearby: Vec<ItemId>,
    in_hand: Option<ItemId>,
    aiming: bool,
}

impl Hand {
    pub fn new(id: HandId, detection_radius: f32) -> Self {
        Self {
            id,
            pose: HandPose::default(),
            detection_radius,
            nearby: Vec::new(),
            in_hand: None,
            aiming: false,
        }
    }

    pub fn id(&self) -> HandId {
        self.id
    }

    pub fn pose(&self) -> HandPose {
        self.pose
    }

    /// Hosts call this every frame with the camera/hand transform.
    pub fn set_pose(&mut self, pose: HandPose) {
        self.pose = pose;
    }

    pub fn detection_radius(&self) -> f32 {
        self.detection_radius
    }

    pub fn nearby(&self) -> &[ItemId] {
        &self.nearby
    }

    pub fn in_hand(&self) -> Option<ItemId> {
        self.in_hand
    }

    pub fn is_empty(&self) -> bool {
        self.in_hand.is_none()
    }

    pub fn is_aiming(&self) -> bool {
        self.aiming
    }

    pub(crate) fn replace_nearby(&mut self, nearby: Vec<ItemId>) {
        self.nearby = nearby;
    }

    pub(crate) fn set_in_hand(&mut self, item: Option<ItemId>) -> Option<ItemId> {
        std::mem::replace(&mut self.in_hand, item)
    }

    pub(crate) fn set_aiming(&mut self, aiming: bool) {
        self.aiming = aiming;
    }
}
