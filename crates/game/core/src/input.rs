/// Player input sampled once per frame.
///
/// Trigger fields are edges (true only on the frame the action fired); `fire`
/// and `aim` are levels (true for as long as the button is held).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputSnapshot {
    pub pickup: bool,
    pub primary_slot: bool,
    pub secondary_slot: bool,
    pub holster: bool,
    pub fire: bool,
    pub aim: bool,
}

impl InputSnapshot {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn pickup() -> Self {
        Self {
            pickup: true,
            ..Self::default()
        }
    }

    pub fn select_slot(slot: usize) -> Self {
        Self {
            primary_slot: slot == 0,
            secondary_slot: slot == 1,
            ..Self::default()
        }
    }

    pub fn holster() -> Self {
        Self {
            holster: true,
            ..Self::default()
        }
    }

    pub fn fire() -> Self {
        Self {
            fire: true,
            ..Self::default()
        }
    }

    pub fn aim() -> Self {
        Self {
            aim: true,
            ..Self::default()
        }
    }
}
