// Property-Based Testing with Proptest
// Run with: cargo test -p kelpswap-swap --test test_proptest

use kelpswap_math::{get_sqrt_ratio_at_tick, I256, U256};
use kelpswap_swap::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: a step never spends more than it was given and stays between
    /// the current price and the target
    #[test]
    fn prop_step_respects_budget_and_bounds(
        current_tick in -50_000i32..50_000i32,
        target_tick in -50_000i32..50_000i32,
        liquidity in 1u128..(1u128 << 100),
        amount in 1u128..(1u128 << 90),
        exact_in in any::<bool>(),
        fee_pips in 0u32..100_000u32
    ) {
        let current = get_sqrt_ratio_at_tick(current_tick).unwrap();
        let target = get_sqrt_ratio_at_tick(target_tick).unwrap();
        let amount_remaining = if exact_in {
            I256::try_from(amount).unwrap()
        } else {
            -I256::try_from(amount).unwrap()
        };

        let step = compute_swap_step(current, target, liquidity, amount_remaining, fee_pips).unwrap();

        if exact_in {
            prop_assert!(step.total_in() <= U256::from(amount));
        } else {
            prop_assert!(step.amount_out <= U256::from(amount));
        }

        if current >= target {
            prop_assert!(step.sqrt_price_next <= current);
            prop_assert!(step.sqrt_price_next >= target);
        } else {
            prop_assert!(step.sqrt_price_next >= current);
            prop_assert!(step.sqrt_price_next <= target);
        }

        if step.sqrt_price_next != target && exact_in {
            prop_assert_eq!(step.total_in(), U256::from(amount));
        }
    }

    /// Property: a larger fee never leaves the trader with more output
    #[test]
    fn prop_higher_fee_never_increases_output(
        target_tick in 1i32..20_000i32,
        liquidity in 1_000u128..(1u128 << 80),
        amount in 1u128..(1u128 << 60),
        low_fee in 0u32..10_000u32,
        extra_fee in 0u32..10_000u32
    ) {
        let current = get_sqrt_ratio_at_tick(0).unwrap();
        let target = get_sqrt_ratio_at_tick(target_tick).unwrap();
        let amount_remaining = I256::try_from(amount).unwrap();

        let cheap = compute_swap_step(current, target, liquidity, amount_remaining, low_fee).unwrap();
        let dear = compute_swap_step(current, target, liquidity, amount_remaining, low_fee + extra_fee).unwrap();
        prop_assert!(dear.amount_out <= cheap.amount_out);
    }
}
