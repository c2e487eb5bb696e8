//! Swipe drawer - gesture controller for a slide-in side panel
//!
//! This crate interprets a single-pointer gesture stream against one panel
//! and drives that panel between its open and closed resting positions:
//! edge-swipe to open, swipe on the open panel to close.

pub mod config;
pub mod controller;
pub mod geometry;
pub mod gesture;
pub mod panel;
pub mod paths;
pub mod pointer;
pub mod replay;
pub mod settle;
pub mod tracing;

// Re-export commonly used types
pub use config::DrawerConfig;
pub use controller::DrawerController;
pub use panel::{PanelAdapter, PanelResolver};
pub use pointer::{EventResult, Point, PointerEvent, PointerId};
