//! Simulation state and core flight types
//!
//! Everything the frame driver mutates each tick lives in [`SimState`].

use std::collections::VecDeque;
use std::f64::consts::FRAC_PI_2;

use glam::DVec2;
use serde::Serialize;

use super::input::ControlDelta;
use crate::consts::*;

/// Viewport size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Wrap one coordinate onto the torus.
///
/// Negative remainders are remapped to `extent - rem`, which lands past the far
/// edge rather than inside it. The next wrap folds it back in.
#[inline]
pub fn wrap_axis(value: f64, extent: f64) -> f64 {
    let rem = value % extent;
    if rem < 0.0 { extent - rem } else { rem }
}

/// The player's airplane.
///
/// Kept in double precision: heading and speed accumulate small steps every
/// frame and the legend shows them to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Airplane {
    /// Centre position in viewport pixels (y down)
    pub pos: DVec2,
    /// Accumulated heading (radians, unbounded, clockwise positive)
    pub heading: f64,
    /// Speed in pixels per frame, always within [MIN_SPEED, MAX_SPEED]
    pub speed: f64,
}

impl Airplane {
    /// A parked plane at `pos`, nose up
    pub fn new(pos: DVec2) -> Self {
        Self {
            pos,
            heading: 0.0,
            speed: MIN_SPEED,
        }
    }

    /// Apply control deltas and fly one frame across `viewport`
    pub fn update(&mut self, delta: ControlDelta, viewport: Viewport) {
        self.heading += delta.heading;
        self.speed = (self.speed + delta.speed).clamp(MIN_SPEED, MAX_SPEED);

        let dx = self.speed * (FRAC_PI_2 - self.heading).cos();
        let dy = self.speed * -(FRAC_PI_2 - self.heading).sin();
        self.pos = DVec2::new(
            wrap_axis(self.pos.x + dx, viewport.width),
            wrap_axis(self.pos.y + dy, viewport.height),
        );
    }

    /// Sprite rotation, taken straight from the heading
    pub fn rotation(&self) -> f64 {
        self.heading
    }
}

/// A cloud left behind the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrailMarker {
    pub pos: DVec2,
}

/// Bounded FIFO of clouds (oldest first)
#[derive(Debug, Clone, Default, Serialize)]
pub struct CloudTrail {
    markers: VecDeque<TrailMarker>,
    /// Total clouds dropped off the head since start
    evicted: u64,
}

impl CloudTrail {
    pub fn new() -> Self {
        Self {
            markers: VecDeque::with_capacity(TRAIL_CAPACITY + 1),
            evicted: 0,
        }
    }

    /// Drop a cloud at `pos` when `frame_index` lands on the trail interval.
    /// Returns true if a cloud was added.
    pub fn maybe_append(&mut self, frame_index: u64, pos: DVec2) -> bool {
        if frame_index % TRAIL_INTERVAL != 0 {
            return false;
        }
        self.push(TrailMarker { pos });
        true
    }

    /// Append at the tail, then trim one cloud from the head if over capacity
    pub fn push(&mut self, marker: TrailMarker) -> Option<TrailMarker> {
        self.markers.push_back(marker);
        if self.markers.len() > TRAIL_CAPACITY {
            self.evicted += 1;
            return self.markers.pop_front();
        }
        None
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Clouds from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &TrailMarker> {
        self.markers.iter()
    }

    pub fn newest(&self) -> Option<&TrailMarker> {
        self.markers.back()
    }

    pub fn oldest(&self) -> Option<&TrailMarker> {
        self.markers.front()
    }

    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}

/// Frame counter advanced by whole frame deltas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameClock {
    pub elapsed: u64,
}

impl FrameClock {
    /// Advance by `floor(delta_frames)`. Sub-frame deltas leave the clock unchanged.
    pub fn advance(&mut self, delta_frames: f64) -> u64 {
        // `as` saturates, so negative or NaN deltas add nothing
        self.elapsed += delta_frames.floor() as u64;
        self.elapsed
    }
}

/// Complete simulation state, owned by the frame driver
#[derive(Debug, Clone, Serialize)]
pub struct SimState {
    pub airplane: Airplane,
    pub trail: CloudTrail,
    pub clock: FrameClock,
    pub viewport: Viewport,
}

impl SimState {
    /// Plane parked at the centre of `viewport`
    pub fn new(viewport: Viewport) -> Self {
        Self {
            airplane: Airplane::new(viewport.center()),
            trail: CloudTrail::new(),
            clock: FrameClock::default(),
            viewport,
        }
    }
}
