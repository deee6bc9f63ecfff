//! Error Types for the Timekeeping Core
//!
//! ## Design Philosophy
//!
//! TickBeat's error system follows the same constraints as the rest of the
//! crate:
//!
//! 1. **Small Size**: The enum is a bare discriminant, since errors are
//!    returned from hot polling paths.
//!
//! 2. **No Heap Allocation**: No String, no boxed sources. Deterministic
//!    memory usage on targets without an allocator.
//!
//! 3. **Copy Semantics**: Errors implement Copy for efficient return from
//!    functions without move semantics complications.
//!
//! ## Error Taxonomy
//!
//! - `BadParameter`: the caller handed in a value the operation cannot act
//!   on. The only reachable case today is a non-positive arm duration;
//!   the null-pointer cases of older C-style APIs are unrepresentable here
//!   because references cannot be null.
//! - `NotInitialized`: reserved. Construction subsumes initialization in
//!   this crate, so no current code path raises it; it is kept so the
//!   status-code taxonomy of the public contract stays stable.
//!
//! Sink failures are deliberately *not* part of this enum: posting an event
//! is a best-effort operation whose result the core discards (see
//! [`crate::events::EventSink`]).

use thiserror_no_std::Error;

/// Result type for clock and timer operations
pub type TickResult<T> = Result<T, TickError>;

/// Errors returned by the timekeeping core - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickError {
    /// Component used before initialization (reserved, no current path)
    #[error("component used before initialization")]
    NotInitialized,

    /// Caller-supplied parameter is unusable (e.g. non-positive duration)
    #[error("bad parameter")]
    BadParameter,
}

#[cfg(feature = "defmt")]
impl defmt::Format for TickError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotInitialized => defmt::write!(fmt, "not initialized"),
            Self::BadParameter => defmt::write!(fmt, "bad parameter"),
        }
    }
}
