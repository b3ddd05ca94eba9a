//! Property tests for the backup run and the health refresh

use disaster_drive_core::{
    EventDispatcher, FixedMetrics, Metric, RandomMetrics, SimulatedClock, TickOutcome,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Action {
    Start,
    Tick,
    Advance(u64),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        1 => Just(Action::Start),
        4 => Just(Action::Tick),
        2 => (0u64..1_500).prop_map(Action::Advance),
    ]
}

proptest! {
    #[test]
    fn progress_never_decreases_within_a_run(actions in prop::collection::vec(action(), 1..80)) {
        let mut d = EventDispatcher::with_parts(SimulatedClock::default(), FixedMetrics::new([1]));
        let mut last = d.state().backup().progress_percent();

        for action in actions {
            let restarted = match action {
                Action::Start => d.start_backup(),
                Action::Tick => { d.tick(); false }
                Action::Advance(ms) => { d.advance(Duration::from_millis(ms)); false }
            };
            let now = d.state().backup().progress_percent();
            prop_assert!(now <= 100);
            if restarted {
                prop_assert_eq!(now, 0);
            } else {
                prop_assert!(now >= last, "progress went from {} to {}", last, now);
            }
            last = now;
        }
    }

    #[test]
    fn run_completes_after_exactly_ten_ticks(extra in 0usize..20) {
        let mut d = EventDispatcher::with_parts(SimulatedClock::default(), FixedMetrics::new([1]));
        d.start_backup();

        for _ in 0..9 {
            prop_assert!(matches!(d.tick(), TickOutcome::Advanced(_)));
        }
        prop_assert_eq!(d.tick(), TickOutcome::Completed);
        for _ in 0..extra {
            prop_assert_eq!(d.tick(), TickOutcome::Ignored);
        }
        prop_assert_eq!(d.state().backup().progress_percent(), 100);
    }

    #[test]
    fn refresh_keeps_metrics_in_range(seed in any::<u64>(), refreshes in 1usize..30) {
        let source = RandomMetrics::with_rng(StdRng::seed_from_u64(seed));
        let mut d = EventDispatcher::with_parts(SimulatedClock::default(), source);

        for i in 0..refreshes {
            d.refresh_monitoring();
            let metrics = d.state().monitoring().metrics();
            for metric in Metric::ALL {
                let value = metrics.get(metric);
                prop_assert!((0.0..100.0).contains(&value), "{} out of range: {}", metric, value);
            }
            prop_assert_eq!(d.state().monitoring().log().len(), i + 1);
        }
    }
}
