//! Property tests for the update engine and formatting invariants.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use marketdeck_core::quote::{seed_quotes, Quote};
use marketdeck_core::{format, update, HISTORY_LEN};

proptest! {
    /// History length survives any interleaving of ticks and refreshes.
    #[test]
    fn history_length_is_invariant(seed in any::<u64>(), ops in proptest::collection::vec(any::<bool>(), 1..40)) {
        let mut quotes = seed_quotes();
        let mut rng = StdRng::seed_from_u64(seed);
        for is_tick in ops {
            if is_tick {
                update::tick(&mut quotes, &mut rng);
            } else {
                update::refresh(&mut quotes, &mut rng);
            }
            for q in &quotes {
                prop_assert_eq!(q.history.len(), HISTORY_LEN);
                prop_assert_eq!(q.labels.len(), HISTORY_LEN);
            }
        }
    }

    /// Refresh preserves whatever history length a quote started with.
    #[test]
    fn refresh_keeps_arbitrary_history_length(seed in any::<u64>(), len in 0usize..24) {
        let history = vec![100.0; len];
        let mut quotes = vec![Quote::new("X", 100.0, 1.0, 1.0, history)];
        let mut rng = StdRng::seed_from_u64(seed);
        update::refresh(&mut quotes, &mut rng);
        prop_assert_eq!(quotes[0].history.len(), len);
    }

    /// Non-negative values render "+"-prefixed, negatives "-"-prefixed.
    #[test]
    fn change_sign_convention(v in -1.0e9f64..1.0e9) {
        let s = format::change(v);
        if v >= 0.0 {
            prop_assert!(s.starts_with('+'), "expected + prefix for {v}: {s}");
        } else {
            prop_assert!(s.starts_with('-'), "expected - prefix for {v}: {s}");
        }
        // Always exactly two decimals.
        let (_, frac) = s.split_once('.').expect("decimal point");
        prop_assert_eq!(frac.len(), 2);
    }

    /// Percent strings follow the same convention with a trailing '%'.
    #[test]
    fn percent_sign_convention(v in -1.0e6f64..1.0e6) {
        let s = format::percent(v);
        prop_assert!(s.ends_with('%'));
        prop_assert!(s.starts_with('+') == (v >= 0.0));
    }

    /// Same seed, same outputs — the engine is fully driven by its Rng.
    #[test]
    fn updates_are_deterministic(seed in any::<u64>()) {
        let mut a = seed_quotes();
        let mut b = seed_quotes();
        let mut rng_a = StdRng::seed_from_u64(seed);
        let mut rng_b = StdRng::seed_from_u64(seed);
        update::tick(&mut a, &mut rng_a);
        update::refresh(&mut a, &mut rng_a);
        update::tick(&mut b, &mut rng_b);
        update::refresh(&mut b, &mut rng_b);
        prop_assert_eq!(a, b);
    }
}
