//! Flight simulation module
//!
//! All per-frame logic lives here. This module must stay pure:
//! - One tick per rendered frame
//! - State passed in explicitly, no globals
//! - No rendering or platform dependencies

pub mod input;
pub mod legend;
pub mod state;
pub mod tick;

pub use input::{ArrowKey, ControlDelta, InputLatch};
pub use legend::{INSTRUCTIONS, Legend, heading_degrees};
pub use state::{Airplane, CloudTrail, FrameClock, SimState, TrailMarker, Viewport, wrap_axis};
pub use tick::{TickOutcome, tick};
