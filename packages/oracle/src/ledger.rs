// Ledger-backed Oracle

use alloc::vec::Vec;
use alloy_primitives::U256;
use kelpswap_math::{from_host_u256, to_host_u256, CoreError};
use soroban_sdk::{contracttype, Env, Symbol};
use crate::oracle;
use crate::store::ObservationStore;
use crate::types::{Observation, OracleState};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum OracleKey {
    /// Observation by ring slot
    Slot(u32),
    /// Ring buffer bookkeeping
    State,
}

/// TTL for oracle entries (about 1 year at 5s per ledger)
pub const PERSISTENT_LIFETIME: u32 = 6_307_200;
pub const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &OracleKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// STORED TYPES
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoredObservation {
    pub block_timestamp: u32,
    pub tick_cumulative: i64,
    pub seconds_per_liquidity_cumulative_x128: soroban_sdk::U256,
    pub initialized: bool,
}

impl StoredObservation {
    pub fn from_observation(env: &Env, observation: &Observation) -> Self {
        Self {
            block_timestamp: observation.block_timestamp,
            tick_cumulative: observation.tick_cumulative,
            seconds_per_liquidity_cumulative_x128: to_host_u256(
                env,
                observation.seconds_per_liquidity_cumulative_x128,
            ),
            initialized: observation.initialized,
        }
    }

    pub fn to_observation(&self) -> Observation {
        Observation {
            block_timestamp: self.block_timestamp,
            tick_cumulative: self.tick_cumulative,
            seconds_per_liquidity_cumulative_x128: from_host_u256(
                &self.seconds_per_liquidity_cumulative_x128,
            ),
            initialized: self.initialized,
        }
    }
}

/// Host-side counterpart of [`OracleState`]; the host has no 16-bit integers.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoredOracleState {
    pub index: u32,
    pub cardinality: u32,
    pub cardinality_next: u32,
}

// ============================================================
// OBSERVATION SLOTS
// ============================================================

/// Observation slots kept in the calling contract's persistent storage.
///
/// Must be used from within a contract invocation.
#[derive(Clone)]
pub struct LedgerObservations {
    env: Env,
}

impl LedgerObservations {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }
}

impl ObservationStore for LedgerObservations {
    fn observation(&self, index: u16) -> Observation {
        self.env
            .storage()
            .persistent()
            .get::<_, StoredObservation>(&OracleKey::Slot(index as u32))
            .map(|stored| stored.to_observation())
            .unwrap_or_default()
    }

    fn set_observation(&mut self, index: u16, observation: Observation) {
        let key = OracleKey::Slot(index as u32);
        let stored = StoredObservation::from_observation(&self.env, &observation);
        self.env.storage().persistent().set(&key, &stored);
        extend_ttl(&self.env, &key);
    }
}

// ============================================================
// ORACLE
// ============================================================

/// Oracle whose slots and bookkeeping both live in contract storage.
#[derive(Clone)]
pub struct LedgerOracle {
    env: Env,
    slots: LedgerObservations,
}

impl LedgerOracle {
    pub fn new(env: &Env) -> Self {
        Self {
            env: env.clone(),
            slots: LedgerObservations::new(env),
        }
    }

    /// Current bookkeeping; all zero before [`LedgerOracle::initialize`].
    pub fn state(&self) -> OracleState {
        self.env
            .storage()
            .persistent()
            .get::<_, StoredOracleState>(&OracleKey::State)
            .map(|stored| OracleState {
                index: stored.index as u16,
                cardinality: stored.cardinality as u16,
                cardinality_next: stored.cardinality_next as u16,
            })
            .unwrap_or_default()
    }

    fn set_state(&self, state: &OracleState) {
        let stored = StoredOracleState {
            index: state.index as u32,
            cardinality: state.cardinality as u32,
            cardinality_next: state.cardinality_next as u32,
        };
        self.env.storage().persistent().set(&OracleKey::State, &stored);
        extend_ttl(&self.env, &OracleKey::State);
    }

    pub fn observation(&self, index: u16) -> Observation {
        self.slots.observation(index)
    }

    /// Starts the oracle at `time`. An active oracle cannot be restarted.
    pub fn initialize(&mut self, time: u32) -> Result<OracleState, CoreError> {
        if self.state().is_initialized() {
            return Err(CoreError::InvalidState);
        }

        let state = OracleState::initialize(&mut self.slots, time);
        self.set_state(&state);

        self.env.events().publish(
            (Symbol::new(&self.env, "obs_write"), state.index as u32),
            (time, 0i64),
        );

        Ok(state)
    }

    /// Records the tick and liquidity that held up to `block_timestamp`.
    pub fn write(
        &mut self,
        block_timestamp: u32,
        tick: i32,
        liquidity: u128,
    ) -> Result<OracleState, CoreError> {
        let mut state = self.state();
        if !state.write(&mut self.slots, block_timestamp, tick, liquidity)? {
            return Ok(state);
        }
        self.set_state(&state);

        let written = self.slots.observation(state.index);
        self.env.events().publish(
            (Symbol::new(&self.env, "obs_write"), state.index as u32),
            (written.block_timestamp, written.tick_cumulative),
        );

        Ok(state)
    }

    /// Reserves room for `next` observations.
    pub fn grow(&mut self, next: u16) -> Result<OracleState, CoreError> {
        let mut state = self.state();
        let previous = state.cardinality_next;
        state.grow(&mut self.slots, next)?;
        if state.cardinality_next == previous {
            return Ok(state);
        }
        self.set_state(&state);

        self.env.events().publish(
            (Symbol::new(&self.env, "obs_grow"),),
            (previous as u32, state.cardinality_next as u32),
        );

        Ok(state)
    }

    pub fn observe(
        &self,
        time: u32,
        seconds_agos: &[u32],
        tick: i32,
        liquidity: u128,
    ) -> Result<(Vec<i64>, Vec<U256>), CoreError> {
        let state = self.state();
        oracle::observe(
            &self.slots,
            time,
            seconds_agos,
            tick,
            state.index,
            liquidity,
            state.cardinality,
        )
    }
}
