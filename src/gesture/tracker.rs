//! Single-pointer input tracker
//!
//! Classifies the raw pointer stream into drawer gestures. The tracker owns
//! the [`GestureSession`] but never touches the panel directly; it reports a
//! [`TrackerEvent`] and the controller applies it.

use crate::config::DrawerConfig;
use crate::geometry::CommitDecision;
use crate::panel::PanelAdapter;
use crate::pointer::{Point, PointerId};

use super::session::{GesturePhase, GestureSession, MoveOutcome};

/// What the controller should do after the tracker saw an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerEvent {
    /// Not relevant to the drawer
    Ignored,
    /// A pending session started
    Started,
    /// Session exists but nothing visible happens yet
    Pending,
    /// Axis lock chose vertical; the session is inert until release
    Cancelled,
    /// The panel should follow the pointer
    Drag {
        offset: f64,
        progress: f64,
        started: bool,
    },
    /// A second pointer holds the drag; the panel stays put until the
    /// primary pointer lifts
    Frozen,
    /// Drag released; settle to the decision
    Release { decision: CommitDecision, width: f64 },
    /// Drag interrupted; settle back to the pre-gesture state
    Revert { decision: CommitDecision, width: f64 },
    /// Session ended before any drag; no panel mutation
    Discarded,
}

/// Tracks pointers and the (at most one) active gesture session
#[derive(Debug)]
pub struct InputTracker {
    config: DrawerConfig,
    pointers: Vec<PointerId>,
    session: Option<GestureSession>,
}

impl InputTracker {
    pub fn new(config: DrawerConfig) -> Self {
        Self {
            config,
            pointers: Vec::new(),
            session: None,
        }
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Number of pointers currently down
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Register a pointer going down without evaluating a gesture
    ///
    /// Used when no panel resolves, so a later second pointer is still
    /// counted correctly. Returns the event for any session this affects.
    pub fn observe_down(&mut self, id: PointerId) -> TrackerEvent {
        if self.pointers.contains(&id) {
            return TrackerEvent::Ignored;
        }
        self.pointers.push(id);

        if self.pointers.len() > 1 {
            return self.on_extra_pointer();
        }
        TrackerEvent::Ignored
    }

    /// Handle a pointer going down
    ///
    /// `open` is the panel state the gesture should start from; it differs
    /// from `panel.is_open()` only while a settle is still in flight.
    pub fn on_pointer_down<P: PanelAdapter + ?Sized>(
        &mut self,
        id: PointerId,
        position: Point,
        panel: &P,
        open: bool,
    ) -> TrackerEvent {
        if self.pointers.contains(&id) {
            return TrackerEvent::Ignored;
        }
        self.pointers.push(id);

        if self.pointers.len() > 1 {
            return self.on_extra_pointer();
        }

        if !open && position.x > self.config.edge_zone {
            tracing::trace!(x = position.x, "Down outside edge zone");
            return TrackerEvent::Ignored;
        }
        if open && !panel.contains_point(position) {
            tracing::trace!(x = position.x, y = position.y, "Down outside open panel");
            return TrackerEvent::Ignored;
        }

        let width = panel.width().max(1.0);
        tracing::debug!(?id, x = position.x, y = position.y, width, open, "Gesture pending");
        self.session = Some(GestureSession::begin(id, position, width, open));
        TrackerEvent::Started
    }

    /// Handle the latest position of a pointer
    pub fn on_pointer_move(&mut self, id: PointerId, position: Point) -> TrackerEvent {
        let Some(session) = self.session.as_mut().filter(|s| s.pointer() == id) else {
            return TrackerEvent::Ignored;
        };

        match session.track(position, &self.config) {
            MoveOutcome::Ignored => TrackerEvent::Ignored,
            MoveOutcome::Frozen => TrackerEvent::Frozen,
            MoveOutcome::Pending => TrackerEvent::Pending,
            MoveOutcome::AxisCancelled => {
                tracing::debug!(?id, "Gesture cancelled by vertical movement");
                TrackerEvent::Cancelled
            }
            MoveOutcome::Dragging {
                offset,
                progress,
                started,
            } => {
                if started {
                    tracing::debug!(?id, offset, "Drag started");
                } else {
                    tracing::trace!(offset, progress, "Drag");
                }
                TrackerEvent::Drag {
                    offset,
                    progress,
                    started,
                }
            }
        }
    }

    /// Handle a pointer lifting
    pub fn on_pointer_up(&mut self, id: PointerId) -> TrackerEvent {
        self.release_pointer(id);
        let Some(session) = self.take_session(id) else {
            return TrackerEvent::Ignored;
        };

        match session.phase() {
            GesturePhase::Dragging => {
                let decision = session.commit(&self.config);
                tracing::debug!(
                    last_offset = session.last_offset(),
                    open = decision.open,
                    "Drag released"
                );
                TrackerEvent::Release {
                    decision,
                    width: session.width(),
                }
            }
            GesturePhase::Pending | GesturePhase::Cancelled => TrackerEvent::Discarded,
        }
    }

    /// Handle a platform-level interruption of a pointer
    ///
    /// Never commits: a dragging session reverts to where it started.
    pub fn on_pointer_cancel(&mut self, id: PointerId) -> TrackerEvent {
        self.release_pointer(id);
        let Some(session) = self.take_session(id) else {
            return TrackerEvent::Ignored;
        };
        Self::interrupt(session)
    }

    /// Forget all pointers and interrupt the active session, if any
    pub fn abort(&mut self) -> TrackerEvent {
        self.pointers.clear();
        match self.session.take() {
            Some(session) => Self::interrupt(session),
            None => TrackerEvent::Ignored,
        }
    }

    fn release_pointer(&mut self, id: PointerId) {
        self.pointers.retain(|p| *p != id);
    }

    fn take_session(&mut self, id: PointerId) -> Option<GestureSession> {
        if self.session.as_ref().is_some_and(|s| s.pointer() == id) {
            self.session.take()
        } else {
            None
        }
    }

    /// A dragging session freezes at its last offset and commits normally
    /// once its own pointer lifts. Anything earlier is dropped.
    fn on_extra_pointer(&mut self) -> TrackerEvent {
        let pointers = self.pointers.len();
        let Some(session) = self.session.as_mut() else {
            return TrackerEvent::Ignored;
        };

        if session.phase() != GesturePhase::Dragging {
            tracing::debug!(pointers, "Second pointer down, dropping pending gesture");
            self.session = None;
            return TrackerEvent::Discarded;
        }

        if !session.is_frozen() {
            tracing::debug!(
                pointers,
                last_offset = session.last_offset(),
                "Second pointer down, freezing drag"
            );
            session.freeze();
        }
        TrackerEvent::Frozen
    }

    fn interrupt(session: GestureSession) -> TrackerEvent {
        match session.phase() {
            GesturePhase::Dragging => TrackerEvent::Revert {
                decision: session.revert(),
                width: session.width(),
            },
            GesturePhase::Pending | GesturePhase::Cancelled => TrackerEvent::Discarded,
        }
    }
}
