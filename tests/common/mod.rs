//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use sidedrawer::panel::RecordingPanel;
use sidedrawer::{DrawerConfig, DrawerController, EventResult, PointerEvent};

pub type TestController = DrawerController<Option<RecordingPanel>>;

/// Controller with default config over a recording panel
pub fn test_controller(width: f64, open: bool) -> TestController {
    DrawerController::new(
        Some(RecordingPanel::new(width, open)),
        DrawerConfig::default(),
    )
}

/// Drives a controller on a synthetic clock
pub struct Driver {
    pub controller: TestController,
    pub base: Instant,
    pub elapsed: Duration,
}

impl Driver {
    pub fn new(width: f64, open: bool) -> Self {
        Self::with_controller(test_controller(width, open))
    }

    pub fn with_controller(controller: TestController) -> Self {
        Self {
            controller,
            base: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn now(&self) -> Instant {
        self.base + self.elapsed
    }

    /// Advance the clock and let any due settle finalize
    pub fn advance(&mut self, ms: u64) -> bool {
        self.elapsed += Duration::from_millis(ms);
        let now = self.now();
        self.controller.poll(now)
    }

    pub fn send(&mut self, event: PointerEvent) -> EventResult {
        let now = self.now();
        self.controller.handle_event(event, now)
    }

    pub fn down(&mut self, id: u64, x: f64, y: f64) -> EventResult {
        self.send(PointerEvent::down(id, x, y))
    }

    pub fn move_to(&mut self, id: u64, x: f64, y: f64) -> EventResult {
        self.send(PointerEvent::moved(id, x, y))
    }

    pub fn up(&mut self, id: u64) -> EventResult {
        self.send(PointerEvent::up(id))
    }

    pub fn cancel(&mut self, id: u64) -> EventResult {
        self.send(PointerEvent::cancel(id))
    }

    pub fn panel(&self) -> &RecordingPanel {
        self.controller.panel().expect("panel present")
    }

    pub fn panel_mut(&mut self) -> &mut RecordingPanel {
        self.controller.panel_mut().expect("panel present")
    }
}

/// Approximate float comparison for progress values
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {} to be close to {}",
        actual,
        expected
    );
}
