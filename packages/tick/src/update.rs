// Tick Update and Crossing Logic

use alloy_primitives::U256;
use kelpswap_math::{add_delta, constants::{MAX_TICK, MIN_TICK}, CoreError};
use crate::types::TickInfo;

/// Maximum gross liquidity a single tick may reference so that the sum over
/// every usable tick still fits in a `u128`.
pub fn tick_spacing_to_max_liquidity_per_tick(tick_spacing: i32) -> Result<u128, CoreError> {
    if tick_spacing <= 0 {
        return Err(CoreError::InvalidTickSpacing);
    }

    let min_tick = (MIN_TICK / tick_spacing) * tick_spacing;
    let max_tick = (MAX_TICK / tick_spacing) * tick_spacing;
    let num_ticks = ((max_tick - min_tick) / tick_spacing) as u128 + 1;
    Ok(u128::MAX / num_ticks)
}

/// Update a tick when liquidity is added or removed.
///
/// Returns `true` when the tick flipped between referenced and unreferenced,
/// in which case the caller must flip it in the bitmap as well.
#[allow(clippy::too_many_arguments)]
pub fn update_tick(
    info: &mut TickInfo,
    tick: i32,
    current_tick: i32,
    liquidity_delta: i128,
    fee_growth_global_0_x128: U256,
    fee_growth_global_1_x128: U256,
    upper: bool,
    max_liquidity: u128,
) -> Result<bool, CoreError> {
    if !is_valid_tick(tick) {
        return Err(CoreError::TickOutOfRange);
    }

    let liquidity_gross_before = info.liquidity_gross;
    let liquidity_gross_after = add_delta(liquidity_gross_before, liquidity_delta)?;
    if liquidity_gross_after > max_liquidity {
        return Err(CoreError::LiquidityOverflow);
    }

    let flipped = (liquidity_gross_after == 0) != (liquidity_gross_before == 0);

    if liquidity_gross_before == 0 {
        // by convention all growth before initialization happened below the tick
        if tick <= current_tick {
            info.fee_growth_outside_0_x128 = fee_growth_global_0_x128;
            info.fee_growth_outside_1_x128 = fee_growth_global_1_x128;
        }
        info.initialized = true;
    }

    info.liquidity_net = if upper {
        info.liquidity_net.checked_sub(liquidity_delta)
    } else {
        info.liquidity_net.checked_add(liquidity_delta)
    }
    .ok_or(CoreError::LiquidityOverflow)?;

    info.liquidity_gross = liquidity_gross_after;

    Ok(flipped)
}

/// Cross a tick boundary during a swap, returning the liquidity to add when
/// moving left-to-right.
pub fn cross_tick(
    info: &mut TickInfo,
    fee_growth_global_0_x128: U256,
    fee_growth_global_1_x128: U256,
) -> i128 {
    info.fee_growth_outside_0_x128 =
        fee_growth_global_0_x128.wrapping_sub(info.fee_growth_outside_0_x128);
    info.fee_growth_outside_1_x128 =
        fee_growth_global_1_x128.wrapping_sub(info.fee_growth_outside_1_x128);

    info.liquidity_net
}

/// Reset a tick whose gross liquidity dropped to zero.
#[inline]
pub fn clear_tick(info: &mut TickInfo) {
    *info = TickInfo::default();
}

/// Check if a tick is within valid range
#[inline]
pub fn is_valid_tick(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}
