//! HUD legend text

/// Control hints shown under the canvas title
pub const INSTRUCTIONS: &str =
    "SPEED: UP / DOWN Arrow Keys (↑ ↓)\nYAW: LEFT / RIGHT Arrow Keys (← →)";

/// Speed/heading readout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    pub speed: String,
    pub heading: String,
}

impl Default for Legend {
    /// Text shown before the first frame
    fn default() -> Self {
        Self {
            speed: "Speed: 0.0 knots".to_string(),
            heading: "Yaw: 00.0 degrees".to_string(),
        }
    }
}

impl Legend {
    pub fn new(speed: f64, heading: f64) -> Self {
        Self {
            speed: format!("Speed: {:.1} knots", speed),
            heading: format!("Yaw: {:.1} degrees", heading_degrees(heading)),
        }
    }
}

/// Displayed heading in degrees, folded into [0, 360).
///
/// The remainder keeps the sign of the heading, so a left turn of 90°
/// reads the same as a right turn of 90°.
#[inline]
pub fn heading_degrees(heading: f64) -> f64 {
    (heading.to_degrees() % 360.0).abs()
}
