//! Scripted walk down the firing range.

use anyhow::{Context, Result};
use armory_core::{HandPose, InputSnapshot, Vec3};
use armory_runtime::Runtime;

const FRAME: f32 = 1.0 / 60.0;

#[derive(Clone, Copy, Debug)]
pub enum Step {
    /// Moves the hand to `z` on the range, facing down it.
    Walk(f32),
    Pickup,
    Select(usize),
    Holster,
    Mount {
        attachment: &'static str,
        weapon: &'static str,
    },
    /// Aims and holds the trigger for a number of frames.
    Burst(u32),
    Drop(&'static str),
}

/// Tour of the range level: collect, kit out the carbine, shoot, then fill
/// both slots and force an eviction.
pub const RANGE_TOUR: &[Step] = &[
    Step::Walk(0.0),
    Step::Pickup,
    Step::Walk(4.0),
    Step::Pickup,
    Step::Mount {
        attachment: "red_dot",
        weapon: "carbine",
    },
    Step::Walk(10.0),
    Step::Pickup,
    Step::Mount {
        attachment: "vertical_grip",
        weapon: "carbine",
    },
    Step::Burst(30),
    Step::Walk(13.0),
    Step::Pickup,
    Step::Select(1),
    Step::Walk(16.0),
    Step::Pickup,
    Step::Walk(19.0),
    Step::Pickup,
    Step::Walk(22.0),
    Step::Pickup,
    Step::Walk(25.0),
    Step::Pickup,
    Step::Holster,
    Step::Drop("ammo_box"),
];

pub fn run(runtime: &mut Runtime, steps: &[Step]) -> Result<()> {
    for step in steps {
        tracing::debug!(?step, frame = runtime.frame(), "script step");
        match *step {
            Step::Walk(z) => {
                runtime.set_hand_pose(HandPose::new(Vec3::new(0.0, 0.0, z), Vec3::FORWARD));
                runtime.tick(&InputSnapshot::idle(), FRAME);
            }
            Step::Pickup => {
                let outcome = runtime.tick(&InputSnapshot::pickup(), FRAME);
                match outcome.picked.and_then(|id| runtime.state().item(id)) {
                    Some(item) => tracing::info!(item = item.name(), "picked up"),
                    None => tracing::info!("nothing to pick up"),
                }
            }
            Step::Select(slot) => {
                runtime.tick(&InputSnapshot::select_slot(slot), FRAME);
            }
            Step::Holster => {
                runtime.tick(&InputSnapshot::holster(), FRAME);
            }
            Step::Mount { attachment, weapon } => {
                let attachment_id = runtime.find(attachment)?;
                let weapon_id = runtime.find(weapon)?;
                runtime
                    .apply(|engine| engine.mount_attachment(attachment_id, weapon_id))
                    .with_context(|| format!("mounting {attachment} on {weapon}"))?;
            }
            Step::Burst(frames) => {
                let mut input = InputSnapshot::aim();
                input.fire = true;
                let mut shots = 0;
                for _ in 0..frames {
                    if runtime.tick(&input, FRAME).shot.is_some() {
                        shots += 1;
                    }
                }
                runtime.tick(&InputSnapshot::idle(), FRAME);
                tracing::info!(shots, frames, "burst finished");
            }
            Step::Drop(name) => {
                let id = runtime.find(name)?;
                runtime
                    .apply(|engine| engine.try_remove_and_drop(id))
                    .with_context(|| format!("dropping {name}"))?;
            }
        }
    }
    Ok(())
}
