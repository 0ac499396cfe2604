//! Frame driver
//!
//! Owns the simulation state and input latch, runs one tick per rendered
//! frame and hands the result to a [`RenderSurface`].

use crate::sim::{Airplane, CloudTrail, InputLatch, Legend, SimState, Viewport, tick};

/// Where the driver sends each finished frame
pub trait RenderSurface {
    /// Current drawable size in CSS pixels
    fn viewport(&self) -> Viewport;
    /// Draw the plane, clouds and legend for this frame
    fn present(&mut self, frame: &FrameView<'_>);
}

/// Read-only view of one finished frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub airplane: &'a Airplane,
    pub trail: &'a CloudTrail,
    pub legend: &'a Legend,
}

/// Driver lifecycle. There is no terminal state; the host tears us down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverPhase {
    /// Before the first frame
    Idle,
    /// Ticking once per frame
    Running,
}

pub struct FrameDriver {
    phase: DriverPhase,
    state: SimState,
    latch: InputLatch,
    legend: Legend,
}

impl FrameDriver {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            phase: DriverPhase::Idle,
            state: SimState::new(viewport),
            latch: InputLatch::new(),
            legend: Legend::default(),
        }
    }

    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn latch(&self) -> &InputLatch {
        &self.latch
    }

    pub fn on_key_down(&mut self, code: &str) {
        self.latch.on_key_down(code);
    }

    pub fn on_key_up(&mut self, code: &str) {
        self.latch.on_key_up(code);
    }

    /// Run one frame: tick the simulation, then present it.
    ///
    /// `delta_frames` is the time since the previous frame in 60 Hz frame units.
    pub fn on_frame<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, delta_frames: f64) {
        if self.phase == DriverPhase::Idle {
            log::debug!("Frame driver running");
            self.phase = DriverPhase::Running;
        }

        self.state.viewport = surface.viewport();

        let evicted_before = self.state.trail.evicted();
        let outcome = tick(&mut self.state, self.latch.current_key(), delta_frames);
        self.legend = outcome.legend;

        if outcome.cloud_added && self.state.trail.evicted() != evicted_before {
            log::debug!("Cloud trail full, {} evicted", self.state.trail.evicted());
        }

        surface.present(&FrameView {
            airplane: &self.state.airplane,
            trail: &self.state.trail,
            legend: &self.legend,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TRAIL_CAPACITY;
    use crate::headless::HeadlessSurface;

    fn setup() -> (FrameDriver, HeadlessSurface) {
        let viewport = Viewport::new(800.0, 600.0);
        (FrameDriver::new(viewport), HeadlessSurface::new(viewport))
    }

    #[test]
    fn test_idle_until_first_frame() {
        let (mut driver, mut surface) = setup();
        assert_eq!(driver.phase(), DriverPhase::Idle);
        assert_eq!(driver.legend(), &Legend::default());

        driver.on_frame(&mut surface, 1.0);
        assert_eq!(driver.phase(), DriverPhase::Running);
        assert_eq!(surface.frames_presented(), 1);
    }

    #[test]
    fn test_presents_once_per_frame() {
        let (mut driver, mut surface) = setup();
        for _ in 0..7 {
            driver.on_frame(&mut surface, 1.0);
        }
        assert_eq!(surface.frames_presented(), 7);
        assert_eq!(driver.state().clock.elapsed, 7);
    }

    #[test]
    fn test_held_key_accelerates() {
        let (mut driver, mut surface) = setup();
        driver.on_key_down("ArrowUp");
        for _ in 0..10 {
            driver.on_frame(&mut surface, 1.0);
        }
        let snapshot = surface.last_frame().unwrap();
        assert!((snapshot.speed - 1.0).abs() < 1e-4);
        assert_eq!(snapshot.speed_text, "Speed: 1.0 knots");
    }

    #[test]
    fn test_release_stops_changes() {
        let (mut driver, mut surface) = setup();
        driver.on_key_down("ArrowUp");
        driver.on_frame(&mut surface, 1.0);
        driver.on_key_up("ArrowUp");
        assert_eq!(driver.latch().current_key(), None);

        let speed = driver.state().airplane.speed;
        let heading = driver.state().airplane.heading;
        let elapsed = driver.state().clock.elapsed;
        driver.on_frame(&mut surface, 1.0);

        assert_eq!(driver.state().airplane.speed, speed);
        assert_eq!(driver.state().airplane.heading, heading);
        assert_eq!(driver.state().clock.elapsed, elapsed + 1);
    }

    #[test]
    fn test_viewport_read_every_frame() {
        let (mut driver, mut surface) = setup();
        driver.on_frame(&mut surface, 1.0);

        surface.set_viewport(Viewport::new(100.0, 100.0));
        driver.on_frame(&mut surface, 1.0);

        assert_eq!(driver.state().viewport, Viewport::new(100.0, 100.0));
        // Parked plane at (400, 300) folds onto the smaller viewport
        let pos = driver.state().airplane.pos;
        assert!(pos.x < 100.0 && pos.y < 100.0);
    }

    #[test]
    fn test_trail_visible_to_surface() {
        let (mut driver, mut surface) = setup();
        for _ in 0..10 {
            driver.on_frame(&mut surface, 1.0);
        }
        assert_eq!(surface.last_frame().unwrap().clouds, 5);
    }

    #[test]
    fn test_full_trail_keeps_evicting() {
        let (mut driver, mut surface) = setup();
        for _ in 0..(2 * TRAIL_CAPACITY + 20) {
            driver.on_frame(&mut surface, 1.0);
        }
        assert_eq!(surface.last_frame().unwrap().clouds, TRAIL_CAPACITY);
        assert_eq!(driver.state().trail.evicted(), 10);
    }
}
