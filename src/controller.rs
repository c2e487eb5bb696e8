//! Drawer controller - public lifecycle for the swipe drawer
//!
//! Wires the input tracker, geometry and settle animator onto a panel:
//!
//! 1. `new()` with a panel resolver and config
//! 2. `handle_event()` for every pointer event from the host
//! 3. `poll()` from the frame loop (or `complete_settle()` from a host timer)
//! 4. `dispose()` to detach, leaving the panel at rest
//!
//! Everything runs on the host's event thread. Failure modes (no panel,
//! ineligible touch, vertical scroll) degrade to doing nothing. A second
//! finger during a drag holds the panel where it is until the first lifts.

use std::time::Instant;

use crate::config::DrawerConfig;
use crate::gesture::{GestureSession, InputTracker, TrackerEvent};
use crate::panel::{PanelAdapter, PanelResolver};
use crate::pointer::{EventResult, Point, PointerEvent, PointerId};
use crate::settle::{SettleAnimator, SettleTicket};

pub struct DrawerController<R: PanelResolver> {
    resolver: R,
    tracker: InputTracker,
    animator: SettleAnimator,
}

impl<R: PanelResolver> DrawerController<R> {
    pub fn new(resolver: R, config: DrawerConfig) -> Self {
        let animator = SettleAnimator::new(config.settle_duration());
        Self {
            resolver,
            tracker: InputTracker::new(config),
            animator,
        }
    }

    pub fn config(&self) -> &DrawerConfig {
        self.tracker.config()
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut R {
        &mut self.resolver
    }

    /// The active gesture session, if any
    pub fn session(&self) -> Option<&GestureSession> {
        self.tracker.session()
    }

    pub fn is_settling(&self) -> bool {
        self.animator.is_settling()
    }

    /// Ticket of the settle in flight; pass it to
    /// [`complete_settle`](Self::complete_settle) when the host timer fires
    pub fn pending_ticket(&self) -> Option<SettleTicket> {
        self.animator.ticket()
    }

    /// When the host should next call [`poll`](Self::poll)
    pub fn next_deadline(&self) -> Option<Instant> {
        self.animator.next_deadline()
    }

    /// Current settle generation token
    pub fn generation(&self) -> u64 {
        self.animator.generation()
    }

    /// Feed one pointer event
    ///
    /// Returns [`EventResult::Consumed`] when the host should suppress its
    /// default handling (scrolling, navigation) for this event.
    pub fn handle_event(&mut self, event: PointerEvent, now: Instant) -> EventResult {
        match event {
            PointerEvent::Down { id, position } => self.on_down(id, position),
            PointerEvent::Move { id, position } => self.on_move(id, position),
            PointerEvent::Up { id } => {
                let event = self.tracker.on_pointer_up(id);
                self.apply_end(event, now)
            }
            PointerEvent::Cancel { id } => {
                let event = self.tracker.on_pointer_cancel(id);
                self.apply_end(event, now)
            }
        }
    }

    /// Feed a batch of coalesced move samples; only the latest one counts
    pub fn handle_move_batch(
        &mut self,
        id: PointerId,
        samples: &[Point],
        now: Instant,
    ) -> EventResult {
        match PointerEvent::coalesced_move(id, samples) {
            Some(event) => self.handle_event(event, now),
            None => EventResult::Bubble,
        }
    }

    /// Finalize the in-flight settle if it is due; returns whether it did
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.animator.is_settling() {
            return false;
        }
        match self.resolver.resolve() {
            Some(panel) => self.animator.poll(panel, now),
            None => false,
        }
    }

    /// Host timer callback for a settle scheduled earlier
    pub fn complete_settle(&mut self, ticket: SettleTicket) -> bool {
        match self.resolver.resolve() {
            Some(panel) => self.animator.complete(panel, ticket),
            None => false,
        }
    }

    /// Detach the controller
    ///
    /// An active drag reverts and any settle finishes immediately, so the
    /// panel is left at rest. Returns the resolver.
    pub fn dispose(mut self) -> R {
        let event = self.tracker.abort();
        match self.resolver.resolve() {
            Some(panel) => {
                if let TrackerEvent::Revert { decision, width } = event {
                    self.animator.settle(panel, decision, width, Instant::now());
                }
                self.animator.finish(panel);
            }
            None => self.animator.cancel(),
        }
        tracing::debug!("Drawer controller disposed");
        self.resolver
    }

    fn on_down(&mut self, id: PointerId, position: Point) -> EventResult {
        let Some(panel) = self.resolver.resolve() else {
            let event = self.tracker.observe_down(id);
            tracing::debug!(?id, ?event, "Panel unavailable at pointer down");
            return match event {
                TrackerEvent::Frozen => EventResult::Consumed,
                _ => EventResult::Bubble,
            };
        };

        // A settle in flight already decided where the panel ends up
        let open = self
            .animator
            .pending_decision()
            .map_or_else(|| panel.is_open(), |decision| decision.open);

        match self.tracker.on_pointer_down(id, position, &*panel, open) {
            TrackerEvent::Started => {
                self.animator.preempt(panel);
                EventResult::Bubble
            }
            // The drag stays owned by the primary pointer
            TrackerEvent::Frozen => EventResult::Consumed,
            _ => EventResult::Bubble,
        }
    }

    fn on_move(&mut self, id: PointerId, position: Point) -> EventResult {
        let Some(panel) = self.resolver.resolve() else {
            return EventResult::Bubble;
        };

        match self.tracker.on_pointer_move(id, position) {
            TrackerEvent::Drag {
                offset,
                progress,
                started,
            } => {
                if started {
                    panel.set_transition_enabled(false);
                }
                panel.set_visual_offset(offset);
                panel.set_overlay_intensity(progress);
                EventResult::Consumed
            }
            TrackerEvent::Frozen => EventResult::Consumed,
            _ => EventResult::Bubble,
        }
    }

    fn apply_end(&mut self, event: TrackerEvent, now: Instant) -> EventResult {
        let (TrackerEvent::Release { decision, width } | TrackerEvent::Revert { decision, width }) =
            event
        else {
            return EventResult::Bubble;
        };

        match self.resolver.resolve() {
            Some(panel) => {
                self.animator.settle(panel, decision, width, now);
                EventResult::Consumed
            }
            None => {
                tracing::debug!("Panel unavailable at release, dropping settle");
                EventResult::Bubble
            }
        }
    }
}

impl<P: PanelAdapter> DrawerController<Option<P>> {
    /// Controller with the default config over a panel that is present
    pub fn with_panel(panel: P) -> Self {
        Self::new(Some(panel), DrawerConfig::default())
    }

    pub fn panel(&self) -> Option<&P> {
        self.resolver.as_ref()
    }

    pub fn panel_mut(&mut self) -> Option<&mut P> {
        self.resolver.as_mut()
    }
}
