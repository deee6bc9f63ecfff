//! Critical-Section Nesting Counter
//!
//! ## Overview
//!
//! On single-core, interrupt-capable targets, a read-modify-write sequence
//! that spans a potential interrupt boundary needs bracketing. This module
//! provides the bookkeeping for that bracket: a reentrant nesting counter
//! the embedding application pairs with its actual interrupt mask (or
//! whatever protection mechanism the target offers). Nested
//! protect/release pairs are counted, not boolean-flagged, so the clock
//! service's poll and a timer's manage may themselves run inside an outer
//! protected region.
//!
//! ## Counter Semantics
//!
//! The counter is a signed 32-bit value starting at 0. `protect` increments
//! and `release` decrements, each returning the new value. Two properties
//! are data-range contracts, not error conditions:
//!
//! - **No floor at zero.** An unmatched release drives the counter
//!   negative; a negative value is how caller misuse becomes visible.
//! - **Wrap at the width boundary.** Incrementing past `i32::MAX` lands on
//!   `i32::MIN` (and symmetrically for decrement). The boundary is defined
//!   wrap behavior, though reaching it outside test conditions signals a
//!   usage bug.
//!
//! ## Singleton Usage
//!
//! The counter uses an atomic, so the intended application-level singleton
//! can be a plain `static`:
//!
//! ```rust
//! use tickbeat_core::critical::CriticalSection;
//!
//! static CRIT: CriticalSection = CriticalSection::new();
//!
//! fn update_shared_state() {
//!     CRIT.protect(0);
//!     // non-atomic read-modify-write here
//!     CRIT.release(0);
//! }
//! ```

use core::sync::atomic::{AtomicI32, Ordering};

/// Reentrant critical-section nesting counter
pub struct CriticalSection {
    depth: AtomicI32,
}

impl CriticalSection {
    /// Create a counter at depth 0
    ///
    /// Const so it can live in a `static`.
    pub const fn new() -> Self {
        Self {
            depth: AtomicI32::new(0),
        }
    }

    /// Enter a protected region; returns the new nesting depth
    ///
    /// `level` is accepted to differentiate protection domains but is not
    /// currently used; a single global counter serves every domain.
    pub fn protect(&self, _level: u8) -> i32 {
        // AcqRel so the bracketed accesses cannot drift outside the bracket
        self.depth.fetch_add(1, Ordering::AcqRel).wrapping_add(1)
    }

    /// Leave a protected region; returns the new nesting depth
    ///
    /// Symmetric to [`protect`](Self::protect); no clamp at zero.
    pub fn release(&self, _level: u8) -> i32 {
        self.depth.fetch_sub(1, Ordering::AcqRel).wrapping_sub(1)
    }

    /// Current nesting depth
    pub fn depth(&self) -> i32 {
        self.depth.load(Ordering::Acquire)
    }
}

impl Default for CriticalSection {
    fn default() -> Self {
        Self::new()
    }
}
