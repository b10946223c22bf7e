use crate::state::{ItemId, SightData};

/// Per-weapon aim camera.
pub trait CameraService {
    /// Sets the zoom field of view and blend time used while aiming `weapon`.
    fn configure_aim(&mut self, weapon: ItemId, sight: SightData);

    /// Raises (or lowers) the weapon's aim camera above the default view.
    fn set_aim_priority(&mut self, weapon: ItemId, active: bool);
}
