//! Per-frame simulation tick
//!
//! Advances the flight by one rendered frame: clock, kinematics, trail, legend.

use super::input::{ArrowKey, ControlDelta};
use super::legend::Legend;
use super::state::SimState;

/// What happened during a single tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// Refreshed HUD text
    pub legend: Legend,
    /// A cloud was dropped this tick
    pub cloud_added: bool,
}

/// Advance the simulation by one frame with `key` held.
///
/// `delta_frames` is the frame duration in 60 Hz frame units; only its
/// whole part moves the clock.
pub fn tick(state: &mut SimState, key: Option<ArrowKey>, delta_frames: f64) -> TickOutcome {
    let frame = state.clock.advance(delta_frames);

    let delta = ControlDelta::for_key(key);
    state.airplane.update(delta, state.viewport);

    let cloud_added = state.trail.maybe_append(frame, state.airplane.pos);

    TickOutcome {
        legend: Legend::new(state.airplane.speed, state.airplane.heading),
        cloud_added,
    }
}
