use kelpswap_math::*;
use soroban_sdk::Env;

// ============================================================
// HOST CONVERSIONS
// ============================================================

#[test]
fn test_host_u256_preserves_value() {
    let env = Env::default();

    for value in [U256::ZERO, Q96, MAX_SQRT_RATIO, U256::MAX] {
        let host = to_host_u256(&env, value);
        assert_eq!(from_host_u256(&host), value);
    }
}

#[test]
fn test_host_u256_matches_host_arithmetic() {
    let env = Env::default();

    let host = to_host_u256(&env, Q128);
    let expected = soroban_sdk::U256::from_u128(&env, u128::MAX).add(&soroban_sdk::U256::from_u32(&env, 1));
    assert_eq!(host, expected);
}
