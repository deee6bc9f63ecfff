//! Timekeeping core for TickBeat
//!
//! A minimal tick clock, software-timer engine and critical-section
//! nesting counter for cooperatively scheduled embedded software.
//!
//! Key constraints:
//! - Single logical execution context (main loop plus ISRs)
//! - No heap allocation, no blocking, no internal threading
//! - Tick arithmetic stays correct across counter rollover
//!
//! ```no_run
//! use tickbeat_core::{ClockService, SoftTimer, TimerState, BufferSink};
//!
//! let source = tickbeat_core::time::SimTicks::new();
//! let sink = BufferSink::<16>::new();
//! let mut clock = ClockService::new(&source, Some(&sink), 1);
//!
//! let mut blink = SoftTimer::new(0, 250, Some(&sink), 2);
//! blink.arm(&clock, 250).unwrap();
//! blink.set_state(TimerState::Enabled);
//!
//! loop {
//!     clock.poll();
//!     blink.manage(&clock);
//!     // drain the sink, run the rest of the application...
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod clock;
pub mod critical;
pub mod errors;
pub mod events;
pub mod time;
pub mod timer;

// Public API
pub use clock::ClockService;
pub use critical::CriticalSection;
pub use errors::{TickError, TickResult};
pub use events::{BufferSink, Event, EventId, EventSink, PostError, EVENT_NONE};
pub use time::{Tick, TickSource};
pub use timer::{SoftTimer, TimerState};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
