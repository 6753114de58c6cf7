use alloy_primitives::U256;
use kelpswap_math::{from_host_u256, to_host_u256};
use soroban_sdk::{contracttype, Env};

/// Liquidity and fee checkpoint state of one position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionRecord {
    pub liquidity: u128,
    pub fee_growth_inside_0_last_x128: U256,
    pub fee_growth_inside_1_last_x128: U256,
    pub tokens_owed_0: u128,
    pub tokens_owed_1: u128,
}

/// Ledger encoding of [`PositionRecord`].
#[contracttype]
#[derive(Clone, Debug)]
pub struct StoredPosition {
    pub liquidity: u128,
    pub fee_growth_inside_0_last_x128: soroban_sdk::U256,
    pub fee_growth_inside_1_last_x128: soroban_sdk::U256,
    pub tokens_owed_0: u128,
    pub tokens_owed_1: u128,
}

impl StoredPosition {
    pub fn from_record(env: &Env, record: &PositionRecord) -> Self {
        Self {
            liquidity: record.liquidity,
            fee_growth_inside_0_last_x128: to_host_u256(env, record.fee_growth_inside_0_last_x128),
            fee_growth_inside_1_last_x128: to_host_u256(env, record.fee_growth_inside_1_last_x128),
            tokens_owed_0: record.tokens_owed_0,
            tokens_owed_1: record.tokens_owed_1,
        }
    }

    pub fn to_record(&self) -> PositionRecord {
        PositionRecord {
            liquidity: self.liquidity,
            fee_growth_inside_0_last_x128: from_host_u256(&self.fee_growth_inside_0_last_x128),
            fee_growth_inside_1_last_x128: from_host_u256(&self.fee_growth_inside_1_last_x128),
            tokens_owed_0: self.tokens_owed_0,
            tokens_owed_1: self.tokens_owed_1,
        }
    }
}
