//! Property tests for rollover-safe tick arithmetic
//!
//! The load-bearing numeric contract of the whole crate: maturation is
//! decided by the wrapping difference of two tick readings, never by raw
//! relational comparison, so it must hold for any starting tick, including
//! the ones straddling the wrap boundary.

use proptest::prelude::*;

use tickbeat_core::{
    time::{elapsed_ticks, FixedTicks, Tick},
    BufferSink, ClockService, SoftTimer, TimerState, EVENT_NONE,
};

proptest! {
    #[test]
    fn maturation_matches_elapsed_ticks(
        start in any::<Tick>(),
        duration in 1..=Tick::MAX / 2,
        probe in 0..=Tick::MAX / 2,
    ) {
        let source = FixedTicks::new(start);
        let mut clock = ClockService::new(&source, None, EVENT_NONE);
        clock.poll();

        let sink = BufferSink::<2>::new();
        let mut timer = SoftTimer::new(0, 0, Some(&sink), 9);
        timer.arm(&clock, duration).unwrap();
        timer.set_state(TimerState::Enabled);

        source.set(start.wrapping_add(probe));
        clock.poll();
        timer.manage(&clock);

        // Matured exactly when the probe distance reaches the duration
        let expect_matured = probe >= duration;
        prop_assert_eq!(!sink.is_empty(), expect_matured);

        if expect_matured {
            let target = start.wrapping_add(duration);
            prop_assert_eq!(sink.pop(), Some(tickbeat_core::Event::new(9, target as u32)));
        }
    }

    #[test]
    fn elapsed_is_antisymmetric_near_the_boundary(
        base in Tick::MAX - 1000..=Tick::MAX,
        step in 0..=1000,
    ) {
        let later = base.wrapping_add(step);
        prop_assert_eq!(elapsed_ticks(base, later), step);
        prop_assert_eq!(elapsed_ticks(later, base), -step);
    }

    #[test]
    fn armed_deadline_is_now_plus_duration(
        start in any::<Tick>(),
        duration in 1..Tick::MAX,
    ) {
        let source = FixedTicks::new(start);
        let mut clock = ClockService::new(&source, None, EVENT_NONE);
        clock.poll();

        let mut deadline: Tick = 0;
        clock.set_timer(&mut deadline, duration).unwrap();
        prop_assert_eq!(elapsed_ticks(start, deadline), duration);
    }
}
