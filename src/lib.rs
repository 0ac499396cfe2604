//! Sky Trail - fly a paper airplane around the browser viewport
//!
//! Core modules:
//! - `sim`: Per-frame simulation (input latch, kinematics, cloud trail, legend)
//! - `driver`: Frame driver and the render surface boundary
//! - `renderer`: WebGPU rendering pipeline
//! - `assets`: Named plane/cloud meshes
//! - `settings`: Display preferences

pub mod assets;
pub mod driver;
pub mod error;
pub mod headless;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod stats;

pub use assets::Assets;
pub use driver::{DriverPhase, FrameDriver, FrameView, RenderSurface};
pub use error::{AssetError, StartupError};
pub use settings::{QualityPreset, Settings};

use glam::Vec2;

/// Flight configuration constants
pub mod consts {
    /// Speed bounds (knots, applied as pixels per frame)
    pub const MIN_SPEED: f64 = 0.0;
    pub const MAX_SPEED: f64 = 25.0;

    /// Speed change per frame while Up/Down is held
    pub const SPEED_STEP: f64 = 0.1;
    /// Heading change per frame while Left/Right is held (radians)
    pub const YAW_STEP: f64 = 0.1;

    /// Maximum clouds kept in the trail
    pub const TRAIL_CAPACITY: usize = 100;
    /// A cloud is dropped when the frame clock is a multiple of this
    pub const TRAIL_INTERVAL: u64 = 2;
    /// Cloud size relative to the cloud asset's native size
    pub const CLOUD_SCALE: f32 = 0.025;

    /// Heading guide line, in pixels ahead of the plane centre
    pub const GUIDE_START: f32 = 25.0;
    pub const GUIDE_WIDTH: f32 = 10.0;
    pub const GUIDE_ALPHA: f32 = 0.4;

    /// Frame delta is measured in frames at this rate
    pub const REFERENCE_FPS: f64 = 60.0;
}

/// Rotate a sprite-local offset by `rotation` (screen space, y down, clockwise positive)
#[inline]
pub fn rotate_local(local: Vec2, rotation: f32) -> Vec2 {
    Vec2::from_angle(rotation).rotate(local)
}

/// Unit vector a sprite with the given rotation is facing (nose points up at 0)
#[inline]
pub fn heading_vector(rotation: f32) -> Vec2 {
    rotate_local(Vec2::NEG_Y, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_heading_vector_points_up_at_zero() {
        let v = heading_vector(0.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_heading_vector_turns_clockwise() {
        // Quarter turn right faces +x on a y-down screen
        let v = heading_vector(FRAC_PI_2);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
    }
}
