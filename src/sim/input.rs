//! Keyboard input latch
//!
//! Holds at most one movement key. The latest key-down wins and any
//! key-up clears it, so holding two arrows only honours the last one.

use serde::Serialize;

use crate::consts::{SPEED_STEP, YAW_STEP};

/// Arrow keys that steer the plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    /// Map a `KeyboardEvent.code` value to an arrow key
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(ArrowKey::Up),
            "ArrowDown" => Some(ArrowKey::Down),
            "ArrowLeft" => Some(ArrowKey::Left),
            "ArrowRight" => Some(ArrowKey::Right),
            _ => None,
        }
    }

    /// The `KeyboardEvent.code` this key arrives as
    pub fn as_code(&self) -> &'static str {
        match self {
            ArrowKey::Up => "ArrowUp",
            ArrowKey::Down => "ArrowDown",
            ArrowKey::Left => "ArrowLeft",
            ArrowKey::Right => "ArrowRight",
        }
    }
}

/// Per-frame control deltas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlDelta {
    /// Heading change (radians)
    pub heading: f64,
    /// Speed change
    pub speed: f64,
}

impl ControlDelta {
    /// Deltas applied for one frame with `key` held
    pub fn for_key(key: Option<ArrowKey>) -> Self {
        match key {
            Some(ArrowKey::Up) => Self {
                heading: 0.0,
                speed: SPEED_STEP,
            },
            Some(ArrowKey::Down) => Self {
                heading: 0.0,
                speed: -SPEED_STEP,
            },
            Some(ArrowKey::Left) => Self {
                heading: -YAW_STEP,
                speed: 0.0,
            },
            Some(ArrowKey::Right) => Self {
                heading: YAW_STEP,
                speed: 0.0,
            },
            None => Self::default(),
        }
    }
}

/// Single-slot latch for the most recently pressed arrow key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InputLatch {
    active: Option<ArrowKey>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_key(&self) -> Option<ArrowKey> {
        self.active
    }

    /// Latch the key for `code`. Codes other than the four arrows leave the latch alone.
    pub fn on_key_down(&mut self, code: &str) {
        if let Some(key) = ArrowKey::from_code(code) {
            self.active = Some(key);
        }
    }

    /// Any key release clears the latch, whichever key it was
    pub fn on_key_up(&mut self, _code: &str) {
        self.active = None;
    }
}
