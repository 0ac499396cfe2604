//! In-memory render surface
//!
//! Records what would have been drawn. Used by the native binary and tests.

use glam::DVec2;

use crate::driver::{FrameView, RenderSurface};
use crate::sim::Viewport;

/// What the last presented frame contained
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub pos: DVec2,
    pub rotation: f64,
    pub speed: f64,
    pub clouds: usize,
    pub speed_text: String,
    pub heading_text: String,
}

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    viewport: Viewport,
    frames: u64,
    last: Option<FrameSnapshot>,
}

impl HeadlessSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            frames: 0,
            last: None,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&FrameSnapshot> {
        self.last.as_ref()
    }
}

impl RenderSurface for HeadlessSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn present(&mut self, frame: &FrameView<'_>) {
        self.frames += 1;
        self.last = Some(FrameSnapshot {
            pos: frame.airplane.pos,
            rotation: frame.airplane.rotation(),
            speed: frame.airplane.speed,
            clouds: frame.trail.len(),
            speed_text: frame.legend.speed.clone(),
            heading_text: frame.legend.heading.clone(),
        });
    }
}
