//! Gesture trace replay
//!
//! Feeds a recorded pointer trace through a [`DrawerController`] driving a
//! [`RecordingPanel`], and reports what the drawer wrote to the panel after
//! each input and each settle completion.
//!
//! Trace format (YAML or JSON):
//!
//! ```yaml
//! panel:
//!   width: 300
//!   open: false
//! events:
//!   - { at_ms: 0, kind: down, id: 1, x: 10, y: 200 }
//!   - { at_ms: 16, kind: move, id: 1, x: 200, y: 204 }
//!   - { at_ms: 32, kind: up, id: 1 }
//! ```

use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::DrawerConfig;
use crate::controller::DrawerController;
use crate::panel::{PanelRegion, PanelWrite, RecordingPanel};
use crate::pointer::{Point, PointerEvent, PointerId};

/// Initial panel for a replay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracePanel {
    pub width: f64,
    #[serde(default)]
    pub open: bool,
    #[serde(default)]
    pub region: Option<PanelRegion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One recorded pointer event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEvent {
    pub at_ms: u64,
    pub kind: TraceKind,
    pub id: u64,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl TraceEvent {
    fn position(&self) -> Result<Point> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!(
                "{:?} event at {}ms needs both x and y",
                self.kind,
                self.at_ms
            ),
        }
    }

    pub fn to_pointer_event(&self) -> Result<PointerEvent> {
        let id = PointerId(self.id);
        Ok(match self.kind {
            TraceKind::Down => PointerEvent::Down {
                id,
                position: self.position()?,
            },
            TraceKind::Move => PointerEvent::Move {
                id,
                position: self.position()?,
            },
            TraceKind::Up => PointerEvent::Up { id },
            TraceKind::Cancel => PointerEvent::Cancel { id },
        })
    }

    fn label(&self) -> String {
        match (self.kind, self.x, self.y) {
            (TraceKind::Down | TraceKind::Move, Some(x), Some(y)) => {
                format!("{:?} #{} ({}, {})", self.kind, self.id, x, y).to_lowercase()
            }
            _ => format!("{:?} #{}", self.kind, self.id).to_lowercase(),
        }
    }
}

/// A recorded gesture trace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    pub panel: TracePanel,
    #[serde(default)]
    pub events: Vec<TraceEvent>,
}

impl Trace {
    /// Load a trace; `.json` files are JSON, anything else is YAML
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read trace {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let trace: Trace = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON trace {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML trace {}", path.display()))?
        };
        Ok(trace)
    }
}

/// What happened at one point of the replay
#[derive(Debug, Clone, Serialize)]
pub struct ReplayStep {
    pub at_ms: u64,
    /// Input that caused the writes (`settle` for timer completions)
    pub input: String,
    pub consumed: bool,
    pub writes: Vec<PanelWrite>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    pub final_open: bool,
    pub at_rest: bool,
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            let marker = if step.consumed { "*" } else { " " };
            write!(f, "{:>6}ms {} {:<28}", step.at_ms, marker, step.input)?;
            let writes: Vec<String> = step.writes.iter().map(describe_write).collect();
            if writes.is_empty() {
                writeln!(f, "-")?;
            } else {
                writeln!(f, "{}", writes.join(", "))?;
            }
        }
        writeln!(
            f,
            "final: {} ({})",
            if self.final_open { "open" } else { "closed" },
            if self.at_rest { "at rest" } else { "inline style set" }
        )
    }
}

fn describe_write(write: &PanelWrite) -> String {
    match write {
        PanelWrite::Offset(px) => format!("offset={:.1}", px),
        PanelWrite::Intensity(v) => format!("overlay={:.3}", v),
        PanelWrite::Transition(on) => format!("transition={}", on),
        PanelWrite::ClearInline => "clear".to_string(),
        PanelWrite::Open(open) => format!("open={}", open),
    }
}

/// Replay a trace against a fresh recording panel
pub fn replay(trace: &Trace, config: DrawerConfig) -> Result<ReplayReport> {
    let mut panel = RecordingPanel::new(trace.panel.width, trace.panel.open);
    panel.region = trace.panel.region;
    let mut controller = DrawerController::new(Some(panel), config);

    let mut events: Vec<&TraceEvent> = trace.events.iter().collect();
    events.sort_by_key(|event| event.at_ms);

    let base = Instant::now();
    let mut steps = Vec::new();

    for event in events {
        let pointer_event = event.to_pointer_event()?;
        let now = base + Duration::from_millis(event.at_ms);

        if let Some(step) = poll_settle(&mut controller, base, now) {
            steps.push(step);
        }

        let result = controller.handle_event(pointer_event, now);
        steps.push(ReplayStep {
            at_ms: event.at_ms,
            input: event.label(),
            consumed: result.is_consumed(),
            writes: take_writes(&mut controller),
        });
    }

    if let Some(deadline) = controller.next_deadline() {
        if let Some(step) = poll_settle(&mut controller, base, deadline) {
            steps.push(step);
        }
    }

    let panel = controller
        .panel()
        .context("Replay panel disappeared")?;
    tracing::debug!(steps = steps.len(), open = panel.open, "Replay finished");

    Ok(ReplayReport {
        final_open: panel.open,
        at_rest: panel.is_at_rest(),
        steps,
    })
}

fn poll_settle(
    controller: &mut DrawerController<Option<RecordingPanel>>,
    base: Instant,
    now: Instant,
) -> Option<ReplayStep> {
    let deadline = controller.next_deadline()?;
    if !controller.poll(now) {
        return None;
    }
    Some(ReplayStep {
        at_ms: deadline.duration_since(base).as_millis() as u64,
        input: "settle".to_string(),
        consumed: false,
        writes: take_writes(controller),
    })
}

fn take_writes(controller: &mut DrawerController<Option<RecordingPanel>>) -> Vec<PanelWrite> {
    controller
        .panel_mut()
        .map(RecordingPanel::take_writes)
        .unwrap_or_default()
}
