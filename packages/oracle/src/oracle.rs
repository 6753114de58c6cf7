// SPDX-License-Identifier: MIT
// Price Oracle

use alloc::vec::Vec;
use alloy_primitives::U256;
use kelpswap_math::{CoreError, U160_MAX};
use crate::store::ObservationStore;
use crate::types::{Observation, OracleState};

// ============================================================
// ACCUMULATOR ARITHMETIC
// ============================================================

/// Sign-extends the low 56 bits, so tick cumulatives wrap like an int56.
#[inline]
fn wrap_i56(value: i64) -> i64 {
    (value << 8) >> 8
}

#[inline]
fn wrap_u160(value: U256) -> U256 {
    value & U160_MAX
}

/// Extends `last` to `block_timestamp` assuming `tick` and `liquidity` held
/// for the whole interval.
pub fn transform(last: &Observation, block_timestamp: u32, tick: i32, liquidity: u128) -> Observation {
    let delta = block_timestamp.wrapping_sub(last.block_timestamp);
    let divisor = U256::from(liquidity.max(1));

    Observation {
        block_timestamp,
        tick_cumulative: wrap_i56(
            last.tick_cumulative
                .wrapping_add((tick as i64).wrapping_mul(delta as i64)),
        ),
        seconds_per_liquidity_cumulative_x128: wrap_u160(
            last.seconds_per_liquidity_cumulative_x128
                .wrapping_add((U256::from(delta) << 128) / divisor),
        ),
        initialized: true,
    }
}

/// `a <= b` for timestamps on the 32-bit ring, where both are at or before
/// `time` in ring order.
pub fn lte(time: u32, a: u32, b: u32) -> bool {
    if a <= time && b <= time {
        return a <= b;
    }

    // timestamps ahead of `time` belong to the previous lap
    let a_adjusted = if a > time { a as u64 } else { a as u64 + (1 << 32) };
    let b_adjusted = if b > time { b as u64 } else { b as u64 + (1 << 32) };
    a_adjusted <= b_adjusted
}

// ============================================================
// WRITES
// ============================================================

/// Writes the genesis observation into slot 0.
pub fn initialize<S: ObservationStore>(store: &mut S, time: u32) -> OracleState {
    store.set_observation(
        0,
        Observation {
            block_timestamp: time,
            tick_cumulative: 0,
            seconds_per_liquidity_cumulative_x128: U256::ZERO,
            initialized: true,
        },
    );

    OracleState {
        index: 0,
        cardinality: 1,
        cardinality_next: 1,
    }
}

/// Appends an observation for `block_timestamp`, returning the new
/// `(index, cardinality)`.
///
/// At most one observation is kept per timestamp; a repeated timestamp
/// leaves everything as it was. `tick` and `liquidity` are the values that
/// held since the previous observation.
pub fn write<S: ObservationStore>(
    store: &mut S,
    index: u16,
    block_timestamp: u32,
    tick: i32,
    liquidity: u128,
    cardinality: u16,
    cardinality_next: u16,
) -> Result<(u16, u16), CoreError> {
    if cardinality == 0 {
        return Err(CoreError::NotInitialized);
    }

    let last = store.observation(index);
    if last.block_timestamp == block_timestamp {
        return Ok((index, cardinality));
    }

    // take one reserved slot once the ring is full
    let at_last_slot = index as u32 + 1 == cardinality as u32;
    let cardinality_updated = if cardinality_next > cardinality && at_last_slot {
        cardinality + 1
    } else {
        cardinality
    };

    let index_updated = ((index as u32 + 1) % cardinality_updated as u32) as u16;
    store.set_observation(index_updated, transform(&last, block_timestamp, tick, liquidity));

    Ok((index_updated, cardinality_updated))
}

/// Reserves slots up to `next`, returning the new reserved cardinality.
///
/// New slots are touched with timestamp 1 but stay uninitialized.
pub fn grow<S: ObservationStore>(store: &mut S, current: u16, next: u16) -> Result<u16, CoreError> {
    if current == 0 {
        return Err(CoreError::NotInitialized);
    }
    if next <= current {
        return Ok(current);
    }

    for i in current..next {
        let mut slot = store.observation(i);
        slot.block_timestamp = 1;
        store.set_observation(i, slot);
    }
    Ok(next)
}

// ============================================================
// READS
// ============================================================

/// Finds the initialized pair with `before.timestamp <= target <= after.timestamp`.
///
/// The search runs over logical positions `[oldest, oldest + cardinality)`;
/// uninitialized slots sit at the old end and are skipped over.
fn binary_search<S: ObservationStore>(
    store: &S,
    time: u32,
    target: u32,
    index: u16,
    cardinality: u16,
) -> Result<(Observation, Observation), CoreError> {
    let cardinality = cardinality as i64;
    let mut l = (index as i64 + 1) % cardinality;
    let mut r = l + cardinality - 1;

    while l <= r {
        let i = (l + r) / 2;

        let before_or_at = store.observation((i % cardinality) as u16);
        if !before_or_at.initialized {
            l = i + 1;
            continue;
        }

        let at_or_after = store.observation(((i + 1) % cardinality) as u16);
        let target_at_or_after = lte(time, before_or_at.block_timestamp, target);

        if target_at_or_after && lte(time, target, at_or_after.block_timestamp) {
            return Ok((before_or_at, at_or_after));
        }

        if target_at_or_after {
            l = i + 1;
        } else {
            r = i - 1;
        }
    }

    Err(CoreError::InvalidState)
}

/// Observations bracketing `target`, extrapolating past the newest one.
fn get_surrounding_observations<S: ObservationStore>(
    store: &S,
    time: u32,
    target: u32,
    tick: i32,
    index: u16,
    liquidity: u128,
    cardinality: u16,
) -> Result<(Observation, Observation), CoreError> {
    let newest = store.observation(index);

    if lte(time, newest.block_timestamp, target) {
        if newest.block_timestamp == target {
            return Ok((newest, Observation::default()));
        }
        return Ok((newest, transform(&newest, target, tick, liquidity)));
    }

    let mut oldest = store.observation(((index as u32 + 1) % cardinality as u32) as u16);
    if !oldest.initialized {
        oldest = store.observation(0);
    }

    if !lte(time, oldest.block_timestamp, target) {
        return Err(CoreError::TooOld);
    }

    binary_search(store, time, target, index, cardinality)
}

/// Cumulative values as of `seconds_ago` before `time`.
///
/// Returns `(tick_cumulative, seconds_per_liquidity_cumulative_x128)`.
/// Points between two observations are interpolated linearly.
pub fn observe_single<S: ObservationStore>(
    store: &S,
    time: u32,
    seconds_ago: u32,
    tick: i32,
    index: u16,
    liquidity: u128,
    cardinality: u16,
) -> Result<(i64, U256), CoreError> {
    if cardinality == 0 {
        return Err(CoreError::NotInitialized);
    }

    if seconds_ago == 0 {
        let mut last = store.observation(index);
        if last.block_timestamp != time {
            last = transform(&last, time, tick, liquidity);
        }
        return Ok((last.tick_cumulative, last.seconds_per_liquidity_cumulative_x128));
    }

    let target = time.wrapping_sub(seconds_ago);
    let (before_or_at, at_or_after) =
        get_surrounding_observations(store, time, target, tick, index, liquidity, cardinality)?;

    if target == before_or_at.block_timestamp {
        Ok((
            before_or_at.tick_cumulative,
            before_or_at.seconds_per_liquidity_cumulative_x128,
        ))
    } else if target == at_or_after.block_timestamp {
        Ok((
            at_or_after.tick_cumulative,
            at_or_after.seconds_per_liquidity_cumulative_x128,
        ))
    } else {
        let observation_time_delta = at_or_after
            .block_timestamp
            .wrapping_sub(before_or_at.block_timestamp);
        let target_delta = target.wrapping_sub(before_or_at.block_timestamp);

        let tick_slope = wrap_i56(
            at_or_after
                .tick_cumulative
                .wrapping_sub(before_or_at.tick_cumulative),
        )
        .div_euclid(observation_time_delta as i64);
        let tick_cumulative = wrap_i56(
            before_or_at
                .tick_cumulative
                .wrapping_add(tick_slope.wrapping_mul(target_delta as i64)),
        );

        let seconds_span = wrap_u160(
            at_or_after
                .seconds_per_liquidity_cumulative_x128
                .wrapping_sub(before_or_at.seconds_per_liquidity_cumulative_x128),
        );
        let seconds_per_liquidity = wrap_u160(
            before_or_at.seconds_per_liquidity_cumulative_x128.wrapping_add(
                seconds_span * U256::from(target_delta) / U256::from(observation_time_delta),
            ),
        );

        Ok((tick_cumulative, seconds_per_liquidity))
    }
}

/// [`observe_single`] for each entry of `seconds_agos`.
pub fn observe<S: ObservationStore>(
    store: &S,
    time: u32,
    seconds_agos: &[u32],
    tick: i32,
    index: u16,
    liquidity: u128,
    cardinality: u16,
) -> Result<(Vec<i64>, Vec<U256>), CoreError> {
    if cardinality == 0 {
        return Err(CoreError::NotInitialized);
    }

    let mut tick_cumulatives = Vec::with_capacity(seconds_agos.len());
    let mut seconds_per_liquidity_cumulatives = Vec::with_capacity(seconds_agos.len());

    for &seconds_ago in seconds_agos {
        let (tick_cumulative, seconds_per_liquidity) =
            observe_single(store, time, seconds_ago, tick, index, liquidity, cardinality)?;
        tick_cumulatives.push(tick_cumulative);
        seconds_per_liquidity_cumulatives.push(seconds_per_liquidity);
    }

    Ok((tick_cumulatives, seconds_per_liquidity_cumulatives))
}

// ============================================================
// STATE WRAPPERS
// ============================================================

impl OracleState {
    /// Initializes the ring with a genesis observation at `time`.
    pub fn initialize<S: ObservationStore>(store: &mut S, time: u32) -> Self {
        initialize(store, time)
    }

    pub fn is_initialized(&self) -> bool {
        self.cardinality > 0
    }

    /// Appends an observation; returns whether a slot was written.
    pub fn write<S: ObservationStore>(
        &mut self,
        store: &mut S,
        block_timestamp: u32,
        tick: i32,
        liquidity: u128,
    ) -> Result<bool, CoreError> {
        let fresh = self.is_initialized()
            && store.observation(self.index).block_timestamp != block_timestamp;
        let (index, cardinality) = write(
            store,
            self.index,
            block_timestamp,
            tick,
            liquidity,
            self.cardinality,
            self.cardinality_next,
        )?;
        self.index = index;
        self.cardinality = cardinality;
        Ok(fresh)
    }

    /// Reserves capacity for `next` observations.
    pub fn grow<S: ObservationStore>(&mut self, store: &mut S, next: u16) -> Result<u16, CoreError> {
        self.cardinality_next = grow(store, self.cardinality_next, next)?;
        Ok(self.cardinality_next)
    }

    pub fn observe<S: ObservationStore>(
        &self,
        store: &S,
        time: u32,
        seconds_agos: &[u32],
        tick: i32,
        liquidity: u128,
    ) -> Result<(Vec<i64>, Vec<U256>), CoreError> {
        observe(store, time, seconds_agos, tick, self.index, liquidity, self.cardinality)
    }
}
