//! Clock Service: the single tick authority
//!
//! ## Overview
//!
//! One `ClockService` instance per system owns "what time is it" for every
//! other module. A host scheduler loop calls [`ClockService::poll`] exactly
//! once per iteration; everything else reads the cached value through
//! [`ClockService::now`] or derives a maturation test from
//! [`ClockService::time_left`]. Splitting the sampling call from the
//! read-only accessor keeps heartbeat emission and diagnostics on the
//! scheduler's cadence while letting timers query time cheaply and often.
//!
//! ## Heartbeat
//!
//! When a sink is configured, every observed change of the raw tick posts
//! one heartbeat event carrying the raw value. Consumers that want a
//! periodic wake signal subscribe to that event instead of polling the
//! clock themselves.
//!
//! ## Missed-Tick Diagnostics
//!
//! For a loop that is supposed to run at least once per tick, the gap
//! between two consecutive polls measures scheduler health: a polled system
//! that reports gaps above 1 is falling behind. The service records the
//! worst gap ever observed; it is never reset during normal operation.
//!
//! ## State Ownership
//!
//! All clock state (baseline offset, last sample, high-water mark,
//! heartbeat configuration) lives in this object, constructed once at
//! startup and passed by reference to whoever needs it. There are no
//! module-level globals.

use crate::errors::{TickError, TickResult};
use crate::events::{Event, EventId, EventSink};
use crate::time::{Tick, TickSource};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Tick authority for one system
///
/// Borrows its tick source and (optionally) a heartbeat sink for its whole
/// lifetime. The heartbeat destination is fixed at construction; build a
/// new service to change it.
pub struct ClockService<'a, S: TickSource> {
    source: &'a S,
    sink: Option<&'a dyn EventSink>,
    heartbeat_id: EventId,

    /// Raw reading captured at construction; `poll` reports time relative
    /// to this baseline.
    offset: Tick,
    /// Most recent raw sample, `None` until the first poll.
    last_tick: Option<Tick>,
    /// Worst observed gap between two consecutive polls.
    max_missed: Tick,
}

impl<'a, S: TickSource> ClockService<'a, S> {
    /// Create the clock service and capture the zero-offset baseline
    ///
    /// Passing `None` for the sink skips heartbeat emission entirely.
    pub fn new(source: &'a S, sink: Option<&'a dyn EventSink>, heartbeat_id: EventId) -> Self {
        Self {
            source,
            sink,
            heartbeat_id,
            offset: source.now(),
            last_tick: None,
            max_missed: 0,
        }
    }

    /// Sample the tick source once; call exactly once per scheduler iteration
    ///
    /// On a change from the previously observed value this updates the
    /// missed-tick high-water mark (skipped on the very first observation,
    /// which has no prior baseline) and posts the heartbeat. Returns the
    /// number of ticks elapsed since construction.
    pub fn poll(&mut self) -> Tick {
        let raw = self.source.now();

        if self.last_tick != Some(raw) {
            if let Some(prev) = self.last_tick {
                let gap = raw.wrapping_sub(prev);
                if gap > self.max_missed {
                    self.max_missed = gap;
                    log_warn!("missed ticks: new worst-case poll gap of {} ticks", gap);
                }
            }
            self.last_tick = Some(raw);

            if let Some(sink) = self.sink {
                // Best-effort: a full queue drops the heartbeat, the clock
                // carries on.
                let _ = sink.post(Event::new(self.heartbeat_id, raw as u32));
            }
        }

        raw.wrapping_sub(self.offset)
    }

    /// Most recent raw tick value, without re-sampling the source
    ///
    /// Before the first [`poll`](Self::poll) this is the baseline captured
    /// at construction.
    pub fn now(&self) -> Tick {
        self.last_tick.unwrap_or(self.offset)
    }

    /// Ticks until `deadline`, correct across rollover
    ///
    /// Zero or negative means the deadline has been reached or passed. This
    /// is the only valid way to test a deadline; comparing raw values
    /// directly breaks at the wrap boundary.
    pub fn time_left(&self, deadline: Tick) -> Tick {
        deadline.wrapping_sub(self.now())
    }

    /// Arm a raw deadline slot `duration` ticks from now
    ///
    /// Rejects non-positive durations and leaves the slot untouched. The
    /// target is computed from the last sampled value, so arming is stable
    /// within one scheduler iteration.
    pub fn set_timer(&self, deadline: &mut Tick, duration: Tick) -> TickResult<()> {
        if duration < 1 {
            return Err(TickError::BadParameter);
        }

        *deadline = self.now().wrapping_add(duration);
        Ok(())
    }

    /// Worst observed gap between two consecutive polls
    pub fn max_missed_ticks(&self) -> Tick {
        self.max_missed
    }
}
