//! Property-based tests for backoff growth invariants.

use proptest::prelude::*;
use slackwater::ExponentialBackoff;
use std::time::Duration;

proptest! {
    #[test]
    fn prop_delays_are_bounded_and_monotone(
        initial_ms in 1u64..10_000,
        multiplier in 1.0f64..4.0,
        max_ms in 1u64..60_000,
        calls in 1usize..60,
    ) {
        let policy = ExponentialBackoff::new()
            .with_initial_interval(Duration::from_millis(initial_ms))
            .with_multiplier(multiplier)
            .with_max_interval(Duration::from_millis(max_ms));
        let state = policy.start();

        let floor = Duration::from_millis(initial_ms.min(max_ms));
        let cap = Duration::from_millis(max_ms);
        let mut prev = Duration::ZERO;

        for _ in 0..calls {
            let delay = state.next_delay();
            prop_assert!(delay >= floor);
            prop_assert!(delay <= cap);
            prop_assert!(delay >= prev);
            prev = delay;
        }
    }

    #[test]
    fn prop_saturation_is_permanent(
        initial_ms in 1u64..1_000,
        multiplier in 2.0f64..4.0,
        max_ms in 1u64..10_000,
    ) {
        let policy = ExponentialBackoff::new()
            .with_initial_interval(Duration::from_millis(initial_ms))
            .with_multiplier(multiplier)
            .with_max_interval(Duration::from_millis(max_ms));
        let state = policy.start();

        let cap = Duration::from_millis(max_ms);

        // At least doubling per step, so the cap arrives well within bounds.
        let mut saturated = false;
        for _ in 0..200 {
            if state.next_delay() == cap {
                saturated = true;
                break;
            }
        }
        prop_assert!(saturated);

        for _ in 0..5 {
            prop_assert_eq!(state.next_delay(), cap);
        }
    }

    #[test]
    fn prop_clamping_floors_configuration(
        initial_us in 0u64..100_000,
        multiplier in -2.0f64..=1.0,
        max_us in 0u64..100_000,
    ) {
        let policy = ExponentialBackoff::new()
            .with_initial_interval(Duration::from_micros(initial_us))
            .with_multiplier(multiplier)
            .with_max_interval(Duration::from_micros(max_us));

        prop_assert!(policy.initial_interval() >= Duration::from_millis(1));
        prop_assert_eq!(policy.multiplier(), 1.0);
        prop_assert!(policy.max_interval() >= Duration::from_millis(1));
    }

    #[test]
    fn prop_states_from_same_policy_are_independent(steps in 1usize..20) {
        let policy = ExponentialBackoff::new();
        let busy = policy.start();
        let fresh = policy.start();

        for _ in 0..steps {
            busy.next_delay();
        }

        prop_assert_eq!(fresh.next_delay(), policy.initial_interval());
    }
}
