//! Panel system - the narrow interface the drawer drives
//!
//! The controller never queries the UI toolkit directly. Everything it needs
//! from the slide-in panel and its backdrop overlay goes through
//! [`PanelAdapter`], and the panel is looked up per event through
//! [`PanelResolver`] so a missing panel simply means "do nothing".
//!
//! ## Architecture
//!
//! - `PanelAdapter`: width, open flag, visual offset, overlay intensity,
//!   transition affordance, containment test
//! - `PanelResolver`: yields the adapter if the panel/overlay pair exists
//! - `RecordingPanel`: in-memory adapter that logs every write (replay tool
//!   and tests)

mod adapter;
mod recording;

pub use adapter::{PanelAdapter, PanelResolver};
pub use recording::{PanelRegion, PanelWrite, RecordingPanel};
