mod common;

use common::*;
use kelpswap_math::{CoreError, Q128, U256};
use kelpswap_position::*;
use soroban_sdk::{testutils::Address as _, testutils::Events, Address, Env};

// ============================================================
// POSITION KEYS
// ============================================================

#[test]
fn test_position_key_is_content_addressed() {
    let env = Env::default();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let key = position_key(&env, &alice, TICK_LOWER, TICK_UPPER);
    assert_eq!(key, position_key(&env, &alice, TICK_LOWER, TICK_UPPER));
    assert_ne!(key, position_key(&env, &bob, TICK_LOWER, TICK_UPPER));
    assert_ne!(key, position_key(&env, &alice, TICK_LOWER, TICK_UPPER + 60));
    assert_ne!(key, position_key(&env, &alice, TICK_UPPER, TICK_LOWER));
}

// ============================================================
// UPDATES
// ============================================================

#[test]
fn test_book_persists_updates() {
    let env = Env::default();
    let pool = env.register(Harness, ());
    let owner = Address::generate(&env);

    env.as_contract(&pool, || {
        let book = PositionBook::new(&env);
        assert_eq!(book.get(&owner, TICK_LOWER, TICK_UPPER), PositionRecord::default());

        book.update(&owner, TICK_LOWER, TICK_UPPER, U256::ZERO, U256::ZERO, 1_000).unwrap();
        let record = book
            .update(&owner, TICK_LOWER, TICK_UPPER, Q128, Q128 * U256::from(2u8), 0)
            .unwrap();
        assert_eq!(record.tokens_owed_0, 1_000);
        assert_eq!(record.tokens_owed_1, 2_000);
    });

    env.as_contract(&pool, || {
        let book = PositionBook::new(&env);
        let record = book.get(&owner, TICK_LOWER, TICK_UPPER);
        assert_eq!(record.liquidity, 1_000);
        assert_eq!(record.fee_growth_inside_1_last_x128, Q128 * U256::from(2u8));
        assert_eq!(record.tokens_owed_1, 2_000);

        // other ranges are untouched
        assert_eq!(book.get(&owner, TICK_LOWER, TICK_UPPER + 60), PositionRecord::default());
    });
}

#[test]
fn test_book_rejects_poke_on_empty_position() {
    let env = Env::default();
    let pool = env.register(Harness, ());
    let owner = Address::generate(&env);

    env.as_contract(&pool, || {
        let book = PositionBook::new(&env);
        assert_eq!(
            book.update(&owner, TICK_LOWER, TICK_UPPER, Q128, Q128, 0),
            Err(CoreError::NoLiquidity)
        );
    });
}

#[test]
fn test_book_emits_update_event() {
    let env = Env::default();
    let pool = env.register(Harness, ());
    let owner = Address::generate(&env);

    env.as_contract(&pool, || {
        PositionBook::new(&env)
            .update(&owner, TICK_LOWER, TICK_UPPER, U256::ZERO, U256::ZERO, 5)
            .unwrap();
    });

    assert_eq!(env.events().all().len(), 1);
}

// ============================================================
// COLLECT
// ============================================================

fn setup_owed(env: &Env, pool: &Address, owner: &Address) {
    env.as_contract(pool, || {
        let book = PositionBook::new(env);
        book.update(owner, TICK_LOWER, TICK_UPPER, U256::ZERO, U256::ZERO, 100).unwrap();
        book.update(
            owner,
            TICK_LOWER,
            TICK_UPPER,
            Q128 * U256::from(3u8),
            Q128 * U256::from(2u8),
            0,
        )
        .unwrap();
    });
}

#[test]
fn test_collect_pays_min_of_requested_and_owed() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let recipient = Address::generate(&env);
    let pool = env.register(Harness, ());
    let token0 = create_token(&env, &admin);
    let token1 = create_token(&env, &admin);
    mint_tokens(&env, &token0, &pool, 1_000);
    mint_tokens(&env, &token1, &pool, 1_000);
    setup_owed(&env, &pool, &owner);

    let ledger0 = token_client(&env, &token0);
    let ledger1 = token_client(&env, &token1);

    let paid = env.as_contract(&pool, || {
        PositionBook::new(&env)
            .collect(&ledger0, &ledger1, &pool, &owner, TICK_LOWER, TICK_UPPER, &recipient, 1_000, 50)
            .unwrap()
    });

    assert_eq!(paid, (300, 50));
    assert_eq!(ledger0.balance(&recipient), 300);
    assert_eq!(ledger1.balance(&recipient), 50);

    let record = env.as_contract(&pool, || PositionBook::new(&env).get(&owner, TICK_LOWER, TICK_UPPER));
    assert_eq!(record.tokens_owed_0, 0);
    assert_eq!(record.tokens_owed_1, 150);
    assert_eq!(record.liquidity, 100);
}

#[test]
fn test_collect_keeps_debt_when_payer_is_short() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let recipient = Address::generate(&env);
    let pool = env.register(Harness, ());
    let token0 = create_token(&env, &admin);
    let token1 = create_token(&env, &admin);
    mint_tokens(&env, &token0, &pool, 1_000);
    mint_tokens(&env, &token1, &pool, 100);
    setup_owed(&env, &pool, &owner);

    let ledger0 = token_client(&env, &token0);
    let ledger1 = token_client(&env, &token1);

    let result = env.as_contract(&pool, || {
        PositionBook::new(&env).collect(
            &ledger0,
            &ledger1,
            &pool,
            &owner,
            TICK_LOWER,
            TICK_UPPER,
            &recipient,
            u128::MAX,
            u128::MAX,
        )
    });

    assert_eq!(result, Err(CoreError::InsufficientBalance));
    assert_eq!(ledger0.balance(&recipient), 0);

    let record = env.as_contract(&pool, || PositionBook::new(&env).get(&owner, TICK_LOWER, TICK_UPPER));
    assert_eq!(record.tokens_owed_0, 300);
    assert_eq!(record.tokens_owed_1, 200);
}
