//! Gesture interpretation
//!
//! - `session` - one pointer's gesture: dead zone, axis lock, live offset
//! - `tracker` - pointer bookkeeping, eligibility, release/interrupt handling

mod session;
mod tracker;

pub use session::{GesturePhase, GestureSession, MoveOutcome};
pub use tracker::{InputTracker, TrackerEvent};
