// Property-Based Testing with Proptest
// Run with: cargo test -p kelpswap-tick --test test_proptest

use std::collections::BTreeSet;

use kelpswap_tick::*;
use proptest::prelude::*;

/// Reference search over a plain set of initialized ticks.
fn reference_next(initialized: &BTreeSet<i32>, tick: i32, spacing: i32, lte: bool) -> (i32, bool) {
    let compressed = tick.div_euclid(spacing);
    if lte {
        let word_start = (compressed >> 8) << 8;
        match initialized
            .range(word_start * spacing..=compressed * spacing)
            .next_back()
        {
            Some(&found) => (found, true),
            None => (word_start * spacing, false),
        }
    } else {
        let from = compressed + 1;
        let word_end = ((from >> 8) << 8) + 255;
        match initialized.range(from * spacing..=word_end * spacing).next() {
            Some(&found) => (found, true),
            None => (word_end * spacing, false),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: the bitmap search agrees with a linear scan of the same set
    #[test]
    fn prop_next_initialized_matches_reference(
        raw_ticks in prop::collection::vec(-3000i32..3000i32, 0..40),
        spacing in prop::sample::select(vec![1i32, 10, 60, 200]),
        query in -3000i32..3000i32,
        lte in any::<bool>()
    ) {
        let mut bitmap = MemoryBitmap::new();
        let mut reference = BTreeSet::new();
        for raw in raw_ticks {
            let tick = raw * spacing;
            flip_tick(&mut bitmap, tick, spacing).unwrap();
            if !reference.remove(&tick) {
                reference.insert(tick);
            }
        }

        let query = query * spacing / 7;
        let found = next_initialized_tick_within_one_word(&bitmap, query, spacing, lte).unwrap();
        prop_assert_eq!(found, reference_next(&reference, query, spacing, lte));
    }

    /// Property: a result reported as initialized is set, and never crosses the query
    #[test]
    fn prop_next_initialized_direction(
        raw_ticks in prop::collection::vec(-500i32..500i32, 1..20),
        query in -130_000i32..130_000i32,
        lte in any::<bool>()
    ) {
        let spacing = 60;
        let mut bitmap = MemoryBitmap::new();
        for raw in raw_ticks {
            let tick = raw * spacing;
            if !is_initialized(&bitmap, tick, spacing).unwrap() {
                flip_tick(&mut bitmap, tick, spacing).unwrap();
            }
        }

        let (next, initialized) = next_initialized_tick_within_one_word(&bitmap, query, spacing, lte).unwrap();
        if lte {
            prop_assert!(next <= query);
        } else {
            prop_assert!(next > query);
        }
        prop_assert_eq!(next % spacing, 0);
        if initialized {
            prop_assert!(is_initialized(&bitmap, next, spacing).unwrap());
        }
    }
}
