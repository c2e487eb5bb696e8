//! Settle animator
//!
//! Moves a released panel to its resting open/closed position. The host
//! eases the move (transition affordance enabled); after the settle duration
//! a finalize step drops the inline style and flips the persistent open flag.
//!
//! The finalize step is the one asynchronous completion in the drawer. Every
//! settle captures a generation token, and finalize is a no-op once the token
//! has moved on, so a stale timer can never clobber a newer gesture.

use std::time::{Duration, Instant};

use crate::geometry::{progress, CommitDecision};
use crate::panel::PanelAdapter;

/// Handle for one scheduled finalize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    pub generation: u64,
    pub deadline: Instant,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    ticket: SettleTicket,
    decision: CommitDecision,
}

#[derive(Debug)]
pub struct SettleAnimator {
    duration: Duration,
    generation: u64,
    in_flight: Option<InFlight>,
}

impl SettleAnimator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            generation: 0,
            in_flight: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current generation token
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_settling(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Outcome of the settle in flight, if any
    pub fn pending_decision(&self) -> Option<CommitDecision> {
        self.in_flight.map(|f| f.decision)
    }

    /// Ticket of the settle in flight, for hosts that run their own timer
    pub fn ticket(&self) -> Option<SettleTicket> {
        self.in_flight.map(|f| f.ticket)
    }

    /// When the in-flight settle wants to finalize
    pub fn next_deadline(&self) -> Option<Instant> {
        self.in_flight.map(|f| f.ticket.deadline)
    }

    /// Start settling toward `decision`, superseding any settle in flight
    pub fn settle<P: PanelAdapter + ?Sized>(
        &mut self,
        panel: &mut P,
        decision: CommitDecision,
        width: f64,
        now: Instant,
    ) -> SettleTicket {
        self.generation += 1;
        let ticket = SettleTicket {
            generation: self.generation,
            deadline: now + self.duration,
        };

        panel.set_transition_enabled(true);
        panel.set_visual_offset(decision.target_offset);
        panel.set_overlay_intensity(progress(decision.target_offset, width));

        tracing::debug!(
            generation = ticket.generation,
            target = decision.target_offset,
            open = decision.open,
            "Settle scheduled"
        );
        self.in_flight = Some(InFlight { ticket, decision });
        ticket
    }

    /// Timer callback for `ticket`; returns whether it finalized
    ///
    /// Stale tickets (superseded or preempted) are ignored.
    pub fn complete<P: PanelAdapter + ?Sized>(
        &mut self,
        panel: &mut P,
        ticket: SettleTicket,
    ) -> bool {
        match self.in_flight {
            Some(f) if f.ticket == ticket => {
                self.in_flight = None;
                Self::finalize(panel, f.decision);
                true
            }
            _ => {
                tracing::trace!(
                    stale = ticket.generation,
                    current = self.generation,
                    "Ignoring stale settle completion"
                );
                false
            }
        }
    }

    /// Finalize the in-flight settle if its deadline has passed
    pub fn poll<P: PanelAdapter + ?Sized>(&mut self, panel: &mut P, now: Instant) -> bool {
        match self.in_flight {
            Some(f) if f.ticket.deadline <= now => self.complete(panel, f.ticket),
            _ => false,
        }
    }

    /// Invalidate the in-flight settle and jump straight to its resting state
    ///
    /// Any ticket handed out so far becomes stale.
    pub fn finish<P: PanelAdapter + ?Sized>(&mut self, panel: &mut P) -> Option<CommitDecision> {
        let f = self.in_flight.take()?;
        self.generation += 1;
        Self::finalize(panel, f.decision);
        Some(f.decision)
    }

    /// Preempt for a new gesture by finishing now
    ///
    /// Transitions stay as the finalize left them; the first drag frame
    /// turns them off, so a gesture that never drags leaves no override.
    pub fn preempt<P: PanelAdapter + ?Sized>(&mut self, panel: &mut P) -> Option<CommitDecision> {
        let decision = self.finish(panel)?;
        tracing::debug!(generation = self.generation, "Settle preempted");
        Some(decision)
    }

    /// Invalidate the in-flight settle without touching any panel
    pub fn cancel(&mut self) {
        if self.in_flight.take().is_some() {
            self.generation += 1;
        }
    }

    fn finalize<P: PanelAdapter + ?Sized>(panel: &mut P, decision: CommitDecision) {
        panel.clear_inline_style();
        panel.set_open(decision.open);
        tracing::debug!(open = decision.open, "Settle finalized");
    }
}
