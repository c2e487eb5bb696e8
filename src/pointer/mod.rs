//! Abstract single-pointer event stream
//!
//! The controller never sees touch- or mouse-specific event shapes. Hosts
//! translate their native input into [`PointerEvent`]s; see
//! [`winit_adapter`] for the winit translation.

pub mod winit_adapter;

use serde::{Deserialize, Serialize};

/// A point in viewport coordinates (logical pixels, origin top-left)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Host-assigned identifier for one pointer (finger, mouse, pen)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerId(pub u64);

/// One event from the host's pointer stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { id: PointerId, position: Point },
    Move { id: PointerId, position: Point },
    Up { id: PointerId },
    Cancel { id: PointerId },
}

impl PointerEvent {
    pub fn down(id: u64, x: f64, y: f64) -> Self {
        PointerEvent::Down {
            id: PointerId(id),
            position: Point::new(x, y),
        }
    }

    pub fn moved(id: u64, x: f64, y: f64) -> Self {
        PointerEvent::Move {
            id: PointerId(id),
            position: Point::new(x, y),
        }
    }

    pub fn up(id: u64) -> Self {
        PointerEvent::Up { id: PointerId(id) }
    }

    pub fn cancel(id: u64) -> Self {
        PointerEvent::Cancel { id: PointerId(id) }
    }

    /// Collapse a batch of coalesced move samples into one event
    ///
    /// Only the most recent sample matters. Returns `None` for an empty batch.
    pub fn coalesced_move(id: PointerId, samples: &[Point]) -> Option<Self> {
        samples
            .last()
            .map(|&position| PointerEvent::Move { id, position })
    }

    pub fn id(&self) -> PointerId {
        match *self {
            PointerEvent::Down { id, .. }
            | PointerEvent::Move { id, .. }
            | PointerEvent::Up { id }
            | PointerEvent::Cancel { id } => id,
        }
    }
}

/// What the host should do with an event after the controller saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The drawer owns this input; suppress default scroll/navigation
    Consumed,
    /// Not handled here; the host keeps its default behavior
    Bubble,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesced_move_keeps_latest_sample() {
        let samples = [Point::new(1.0, 1.0), Point::new(5.0, 2.0), Point::new(9.0, 3.0)];
        let event = PointerEvent::coalesced_move(PointerId(4), &samples);
        assert_eq!(event, Some(PointerEvent::moved(4, 9.0, 3.0)));
    }

    #[test]
    fn test_coalesced_move_empty_batch() {
        assert_eq!(PointerEvent::coalesced_move(PointerId(4), &[]), None);
    }
}
