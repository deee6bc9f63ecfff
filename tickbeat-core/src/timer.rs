//! Software Timer Engine
//!
//! ## Overview
//!
//! A [`SoftTimer`] is a caller-owned object checked against the clock
//! service once per scheduler iteration. The engine holds no registry and
//! no hidden ownership: the caller allocates the storage, decides when each
//! timer is managed, and releases or reuses the storage when done. Callers
//! that need a deterministic firing order across several timers impose it
//! by the order of their [`SoftTimer::manage`] calls.
//!
//! ## Lifecycle
//!
//! ```text
//! new() ──► Disabled ──set_state──► Enabled ──manage──► matured
//!                ▲                     │  ▲                │
//!                │                 set_state              │ reload > 0
//!                │                     ▼  │                ▼
//!                └──────────────────  Paused          rearmed (Enabled)
//! ```
//!
//! The constructor stores the caller-supplied initial duration *verbatim*
//! into the deadline field; it does not add "now". A timer enabled straight
//! out of the constructor will therefore almost certainly report immediate
//! maturation. The one valid path to Enabled is [`SoftTimer::arm`]
//! (now-relative) followed by [`SoftTimer::set_state`].
//!
//! ## Maturation
//!
//! A timer matures when `clock.time_left(deadline) <= 0`, which stays
//! correct across tick rollover. With `reload > 0` the timer rearms itself
//! to `now + reload` and stays Enabled. With `reload == 0` (one-shot) the
//! deadline is left alone, so every subsequent `manage` call re-reports
//! maturation (and re-posts the event) until the caller disables or re-arms
//! it; "fire once then quietly idle" is the caller's job to express.
//!
//! Pausing does not tread water: it does not make the deadline keep pace
//! with the current time. Resuming a timer whose target has passed reports
//! immediate maturation.

use crate::clock::ClockService;
use crate::errors::TickResult;
use crate::events::{Event, EventId, EventSink, EVENT_NONE};
use crate::time::{Tick, TickSource};

/// Operating states for a software timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Not checked for maturation
    Disabled,
    /// Live: checked and (if configured) rearmed on maturation
    Enabled,
    /// Not checked; the deadline does not advance while paused
    Paused,
}

/// Caller-owned software timer
///
/// The optional sink reference and event id configure the maturation
/// notification; id [`EVENT_NONE`] matures silently.
pub struct SoftTimer<'a> {
    /// Absolute target tick, not a duration
    deadline: Tick,
    /// Rearm duration in ticks; 0 means one-shot
    reload: Tick,
    sink: Option<&'a dyn EventSink>,
    event_id: EventId,
    state: TimerState,
}

impl<'a> SoftTimer<'a> {
    /// Create a timer, forced to Disabled
    ///
    /// `initial` lands in the deadline field unchanged; see the module docs
    /// for why enabling without [`arm`](Self::arm) is almost never what you
    /// want.
    pub fn new(
        initial: Tick,
        reload: Tick,
        sink: Option<&'a dyn EventSink>,
        event_id: EventId,
    ) -> Self {
        Self {
            deadline: initial,
            reload,
            sink,
            event_id,
            state: TimerState::Disabled,
        }
    }

    /// Unconditional state transition
    ///
    /// No validation of transition legality; any state may move to any
    /// other.
    pub fn set_state(&mut self, state: TimerState) {
        self.state = state;
    }

    /// Current state
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Absolute target tick
    pub fn deadline(&self) -> Tick {
        self.deadline
    }

    /// Arm relative to now: deadline becomes `clock.now() + duration`
    ///
    /// Rejects non-positive durations, leaving the timer unmodified. Does
    /// not change the timer's state.
    pub fn arm<S: TickSource>(
        &mut self,
        clock: &ClockService<'_, S>,
        duration: Tick,
    ) -> TickResult<()> {
        clock.set_timer(&mut self.deadline, duration)
    }

    /// Per-iteration maturation check
    ///
    /// No-op unless Enabled. On maturation the original target tick is
    /// captured for the notification payload before any rearm, so a
    /// subscriber always sees the tick the timer was aiming at, not the
    /// rearmed one.
    pub fn manage<S: TickSource>(&mut self, clock: &ClockService<'_, S>) {
        if self.state != TimerState::Enabled {
            return;
        }
        if clock.time_left(self.deadline) > 0 {
            return;
        }

        let matured_at = self.deadline;

        if self.reload > 0 {
            // reload >= 1, so rearming cannot fail
            let _ = clock.set_timer(&mut self.deadline, self.reload);
        }

        if self.event_id == EVENT_NONE {
            return;
        }
        if let Some(sink) = self.sink {
            // Best-effort: posting failure is not retried and not
            // escalated; the maturing timer must never stall the loop.
            let _ = sink.post(Event::new(self.event_id, matured_at as u32));
        }
    }
}
