// SPDX-License-Identifier: MIT
// Ledger-backed Position Book

use alloy_primitives::U256;
use kelpswap_math::CoreError;
use soroban_sdk::{contracttype, xdr::ToXdr, Address, BytesN, Env, Symbol};
use crate::ledger::TokenLedger;
use crate::manager::update_record;
use crate::types::{PositionRecord, StoredPosition};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum PositionKey {
    /// Position by content hash of (owner, tick_lower, tick_upper)
    Position(BytesN<32>),
}

/// TTL for position records (about 1 year at 5s per ledger)
pub const PERSISTENT_LIFETIME: u32 = 6_307_200;
pub const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &PositionKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

/// Keccak-256 of the owner's XDR encoding followed by both ticks big-endian.
pub fn position_key(env: &Env, owner: &Address, tick_lower: i32, tick_upper: i32) -> BytesN<32> {
    let mut payload = owner.clone().to_xdr(env);
    payload.extend_from_array(&tick_lower.to_be_bytes());
    payload.extend_from_array(&tick_upper.to_be_bytes());
    env.crypto().keccak256(&payload).to_bytes()
}

// ============================================================
// POSITION BOOK
// ============================================================

/// Position records kept in the calling contract's persistent storage.
#[derive(Clone)]
pub struct PositionBook {
    env: Env,
}

impl PositionBook {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    fn read(&self, key: &PositionKey) -> PositionRecord {
        self.env
            .storage()
            .persistent()
            .get::<_, StoredPosition>(key)
            .map(|stored| stored.to_record())
            .unwrap_or_default()
    }

    fn write(&self, key: &PositionKey, record: &PositionRecord) {
        let stored = StoredPosition::from_record(&self.env, record);
        self.env.storage().persistent().set(key, &stored);
        extend_ttl(&self.env, key);
    }

    /// Record for the position, or an empty one if it was never touched.
    pub fn get(&self, owner: &Address, tick_lower: i32, tick_upper: i32) -> PositionRecord {
        let key = PositionKey::Position(position_key(&self.env, owner, tick_lower, tick_upper));
        self.read(&key)
    }

    /// Read-modify-write of a position through [`update_record`].
    pub fn update(
        &self,
        owner: &Address,
        tick_lower: i32,
        tick_upper: i32,
        fee_growth_inside_0_x128: U256,
        fee_growth_inside_1_x128: U256,
        liquidity_delta: i128,
    ) -> Result<PositionRecord, CoreError> {
        let key = PositionKey::Position(position_key(&self.env, owner, tick_lower, tick_upper));
        let mut record = self.read(&key);

        update_record(
            &mut record,
            fee_growth_inside_0_x128,
            fee_growth_inside_1_x128,
            liquidity_delta,
        )?;
        self.write(&key, &record);

        self.env.events().publish(
            (Symbol::new(&self.env, "pos_upd"), owner.clone()),
            (
                tick_lower,
                tick_upper,
                liquidity_delta,
                record.liquidity,
                record.tokens_owed_0,
                record.tokens_owed_1,
            ),
        );

        Ok(record)
    }

    /// Pays out up to the requested owed amounts from `payer` to `recipient`.
    ///
    /// Returns the amounts actually paid. The record is only debited once
    /// both transfers went through.
    #[allow(clippy::too_many_arguments)]
    pub fn collect<L0: TokenLedger, L1: TokenLedger>(
        &self,
        token0: &L0,
        token1: &L1,
        payer: &Address,
        owner: &Address,
        tick_lower: i32,
        tick_upper: i32,
        recipient: &Address,
        amount_0_requested: u128,
        amount_1_requested: u128,
    ) -> Result<(u128, u128), CoreError> {
        let key = PositionKey::Position(position_key(&self.env, owner, tick_lower, tick_upper));
        let mut record = self.read(&key);

        let amount0 = amount_0_requested.min(record.tokens_owed_0);
        let amount1 = amount_1_requested.min(record.tokens_owed_1);

        if token0.balance_of(payer) < amount0 || token1.balance_of(payer) < amount1 {
            return Err(CoreError::InsufficientBalance);
        }

        if amount0 > 0 {
            token0.transfer(payer, recipient, amount0)?;
        }
        if amount1 > 0 {
            token1.transfer(payer, recipient, amount1)?;
        }

        record.tokens_owed_0 -= amount0;
        record.tokens_owed_1 -= amount1;
        self.write(&key, &record);

        self.env.events().publish(
            (Symbol::new(&self.env, "collect"), owner.clone()),
            (tick_lower, tick_upper, recipient.clone(), amount0, amount1),
        );

        Ok((amount0, amount1))
    }
}
