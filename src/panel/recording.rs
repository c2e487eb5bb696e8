//! In-memory panel that records every write
//!
//! Used by the trace replay tool and by tests as a stand-in for a real UI.

use serde::{Deserialize, Serialize};

use super::adapter::PanelAdapter;
use crate::pointer::Point;

/// Rectangle the open panel occupies, in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PanelRegion {
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// One mutation applied through the adapter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "write", content = "value", rename_all = "snake_case")]
pub enum PanelWrite {
    Offset(f64),
    Intensity(f64),
    Transition(bool),
    ClearInline,
    Open(bool),
}

/// Panel double with observable state
#[derive(Debug, Clone)]
pub struct RecordingPanel {
    pub width: f64,
    pub open: bool,
    /// Region for the containment test; `None` means a full-height strip
    /// `[0, width]` anchored at the leading edge
    pub region: Option<PanelRegion>,
    pub offset: Option<f64>,
    pub intensity: Option<f64>,
    pub transition_enabled: bool,
    pub writes: Vec<PanelWrite>,
}

impl RecordingPanel {
    pub fn new(width: f64, open: bool) -> Self {
        Self {
            width,
            open,
            region: None,
            offset: None,
            intensity: None,
            transition_enabled: true,
            writes: Vec::new(),
        }
    }

    pub fn with_region(mut self, region: PanelRegion) -> Self {
        self.region = Some(region);
        self
    }

    /// Writes recorded since the last call, draining the log
    pub fn take_writes(&mut self) -> Vec<PanelWrite> {
        std::mem::take(&mut self.writes)
    }

    /// Whether the panel sits at its stylesheet resting position with no
    /// inline overrides left behind
    pub fn is_at_rest(&self) -> bool {
        self.offset.is_none() && self.intensity.is_none() && self.transition_enabled
    }
}

impl PanelAdapter for RecordingPanel {
    fn width(&self) -> f64 {
        self.width
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
        self.writes.push(PanelWrite::Open(open));
    }

    fn set_visual_offset(&mut self, offset: f64) {
        self.offset = Some(offset);
        self.writes.push(PanelWrite::Offset(offset));
    }

    fn set_overlay_intensity(&mut self, intensity: f64) {
        self.intensity = Some(intensity);
        self.writes.push(PanelWrite::Intensity(intensity));
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        self.transition_enabled = enabled;
        self.writes.push(PanelWrite::Transition(enabled));
    }

    fn clear_inline_style(&mut self) {
        self.offset = None;
        self.intensity = None;
        self.transition_enabled = true;
        self.writes.push(PanelWrite::ClearInline);
    }

    fn contains_point(&self, point: Point) -> bool {
        match self.region {
            Some(region) => region.contains(point),
            None => point.x >= 0.0 && point.x <= self.width,
        }
    }
}
