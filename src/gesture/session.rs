//! Per-pointer gesture session state

use crate::config::DrawerConfig;
use crate::geometry::{clamp_offset, progress, resting_offset, CommitDecision};
use crate::pointer::{Point, PointerId};

/// Phase of a gesture session
///
/// Transitions only move forward: `Pending -> Dragging` or
/// `Pending -> Cancelled`. A session ends (is dropped) from any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Down seen, inside the dead zone; no visual effect yet
    Pending,
    /// Horizontal intent confirmed; the panel follows the pointer
    Dragging,
    /// Vertical movement won the axis lock; ignored until release
    Cancelled,
}

/// Result of feeding one move sample to a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// Session was already cancelled
    Ignored,
    /// Drag is held by a second pointer; the panel stays where it is
    Frozen,
    /// Still inside the dead zone
    Pending,
    /// Vertical movement dominated; the session just cancelled
    AxisCancelled,
    /// Live position update
    Dragging {
        offset: f64,
        progress: f64,
        /// True on the move that crossed the drag threshold
        started: bool,
    },
}

/// One active single-pointer gesture against the panel
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    pointer: PointerId,
    start: Point,
    width: f64,
    start_offset: f64,
    last_offset: f64,
    phase: GesturePhase,
    from_open_panel: bool,
    frozen: bool,
}

impl GestureSession {
    /// Start a pending session; `width` is fixed for the session's lifetime
    pub fn begin(pointer: PointerId, start: Point, width: f64, open: bool) -> Self {
        let start_offset = resting_offset(open, width);
        Self {
            pointer,
            start,
            width,
            start_offset,
            last_offset: start_offset,
            phase: GesturePhase::Pending,
            from_open_panel: open,
            frozen: false,
        }
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Whether the gesture began on an open panel (it can only close it)
    pub fn originates_from_open_panel(&self) -> bool {
        self.from_open_panel
    }

    /// Whether a second pointer stopped this drag from tracking
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Stop following the pointer, keeping `last_offset` for the release
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Feed the latest pointer position
    pub fn track(&mut self, position: Point, config: &DrawerConfig) -> MoveOutcome {
        if self.frozen {
            return MoveOutcome::Frozen;
        }

        let delta_x = position.x - self.start.x;
        let delta_y = position.y - self.start.y;

        let started = match self.phase {
            GesturePhase::Cancelled => return MoveOutcome::Ignored,
            GesturePhase::Pending => {
                if delta_y.abs() > config.vertical_cancel && delta_y.abs() > delta_x.abs() {
                    self.phase = GesturePhase::Cancelled;
                    return MoveOutcome::AxisCancelled;
                }
                if delta_x.abs() < config.drag_start {
                    return MoveOutcome::Pending;
                }
                self.phase = GesturePhase::Dragging;
                true
            }
            GesturePhase::Dragging => false,
        };

        // Clamping to [-width, 0] keeps an open-panel gesture close-only and
        // a closed-panel gesture open-only.
        let offset = clamp_offset(self.start_offset + delta_x, self.width);
        self.last_offset = offset;

        MoveOutcome::Dragging {
            offset,
            progress: progress(offset, self.width),
            started,
        }
    }

    /// Decision for a normal release
    pub fn commit(&self, config: &DrawerConfig) -> CommitDecision {
        CommitDecision::from_release(self.last_offset, self.width, config.commit_ratio)
    }

    /// Decision that restores the pre-gesture resting state
    pub fn revert(&self) -> CommitDecision {
        CommitDecision::resting(self.from_open_panel, self.width)
    }
}
