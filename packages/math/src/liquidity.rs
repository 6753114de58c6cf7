// SPDX-License-Identifier: MIT
// Liquidity Calculations

use alloy_primitives::{I256, U256};
use crate::constants::{Q96, RESOLUTION};
use crate::error::CoreError;
use crate::full_math::{div_rounding_up, mul_div, mul_div_rounding_up};

#[inline]
fn sort(sqrt_price_a: U256, sqrt_price_b: U256) -> (U256, U256) {
    if sqrt_price_a > sqrt_price_b {
        (sqrt_price_b, sqrt_price_a)
    } else {
        (sqrt_price_a, sqrt_price_b)
    }
}

#[inline]
fn to_signed(value: U256) -> Result<I256, CoreError> {
    if value.bit(255) {
        return Err(CoreError::Overflow);
    }
    Ok(I256::from_raw(value))
}

// ============================================================
// AMOUNT DELTAS
// ============================================================

/// Token0 spanned by `[sqrt_price_a, sqrt_price_b]` at `liquidity`:
/// `L * (sqrtB - sqrtA) / (sqrtA * sqrtB)`.
pub fn get_amount_0_delta(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, CoreError> {
    let (sqrt_lower, sqrt_upper) = sort(sqrt_price_a, sqrt_price_b);
    if sqrt_lower.is_zero() {
        return Err(CoreError::InvalidPrice);
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = sqrt_upper - sqrt_lower;

    if round_up {
        div_rounding_up(
            mul_div_rounding_up(numerator1, numerator2, sqrt_upper)?,
            sqrt_lower,
        )
    } else {
        Ok(mul_div(numerator1, numerator2, sqrt_upper)? / sqrt_lower)
    }
}

/// Token1 spanned by `[sqrt_price_a, sqrt_price_b]` at `liquidity`:
/// `L * (sqrtB - sqrtA)`.
pub fn get_amount_1_delta(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, CoreError> {
    let (sqrt_lower, sqrt_upper) = sort(sqrt_price_a, sqrt_price_b);
    if sqrt_lower.is_zero() {
        return Err(CoreError::InvalidPrice);
    }

    let liquidity = U256::from(liquidity);
    if round_up {
        mul_div_rounding_up(liquidity, sqrt_upper - sqrt_lower, Q96)
    } else {
        mul_div(liquidity, sqrt_upper - sqrt_lower, Q96)
    }
}

/// Signed token0 delta for a liquidity change.
///
/// Adding liquidity rounds up (the pool is paid more), removing rounds down
/// and negates (the pool pays out less), so the pool never owes more than it
/// holds.
pub fn get_amount_0_delta_signed(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    liquidity_delta: i128,
) -> Result<I256, CoreError> {
    let magnitude = liquidity_delta.unsigned_abs();
    if liquidity_delta < 0 {
        Ok(-to_signed(get_amount_0_delta(sqrt_price_a, sqrt_price_b, magnitude, false)?)?)
    } else {
        to_signed(get_amount_0_delta(sqrt_price_a, sqrt_price_b, magnitude, true)?)
    }
}

/// Signed token1 delta for a liquidity change, rounded like
/// [`get_amount_0_delta_signed`].
pub fn get_amount_1_delta_signed(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    liquidity_delta: i128,
) -> Result<I256, CoreError> {
    let magnitude = liquidity_delta.unsigned_abs();
    if liquidity_delta < 0 {
        Ok(-to_signed(get_amount_1_delta(sqrt_price_a, sqrt_price_b, magnitude, false)?)?)
    } else {
        to_signed(get_amount_1_delta(sqrt_price_a, sqrt_price_b, magnitude, true)?)
    }
}

// ============================================================
// LIQUIDITY DELTAS
// ============================================================

/// Applies a signed delta to a liquidity value.
pub fn add_delta(liquidity: u128, delta: i128) -> Result<u128, CoreError> {
    if delta < 0 {
        liquidity
            .checked_sub(delta.unsigned_abs())
            .ok_or(CoreError::LiquidityUnderflow)
    } else {
        liquidity
            .checked_add(delta as u128)
            .ok_or(CoreError::LiquidityOverflow)
    }
}

// ============================================================
// LIQUIDITY FROM AMOUNTS
// ============================================================

fn to_liquidity(value: U256) -> Result<u128, CoreError> {
    u128::try_from(value).map_err(|_| CoreError::LiquidityOverflow)
}

/// Liquidity received for `amount0` across `[sqrt_price_a, sqrt_price_b]`.
pub fn get_liquidity_for_amount_0(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    amount0: U256,
) -> Result<u128, CoreError> {
    let (sqrt_lower, sqrt_upper) = sort(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == sqrt_upper {
        return Err(CoreError::InvalidPrice);
    }

    let intermediate = mul_div(sqrt_lower, sqrt_upper, Q96)?;
    to_liquidity(mul_div(amount0, intermediate, sqrt_upper - sqrt_lower)?)
}

/// Liquidity received for `amount1` across `[sqrt_price_a, sqrt_price_b]`.
pub fn get_liquidity_for_amount_1(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    amount1: U256,
) -> Result<u128, CoreError> {
    let (sqrt_lower, sqrt_upper) = sort(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == sqrt_upper {
        return Err(CoreError::InvalidPrice);
    }

    to_liquidity(mul_div(amount1, Q96, sqrt_upper - sqrt_lower)?)
}

/// Maximum liquidity mintable from both budgets at the current price.
pub fn get_liquidity_for_amounts(
    sqrt_price_x96: U256,
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    amount0: U256,
    amount1: U256,
) -> Result<u128, CoreError> {
    let (sqrt_lower, sqrt_upper) = sort(sqrt_price_a, sqrt_price_b);

    if sqrt_price_x96 <= sqrt_lower {
        get_liquidity_for_amount_0(sqrt_lower, sqrt_upper, amount0)
    } else if sqrt_price_x96 < sqrt_upper {
        let liquidity0 = get_liquidity_for_amount_0(sqrt_price_x96, sqrt_upper, amount0)?;
        let liquidity1 = get_liquidity_for_amount_1(sqrt_lower, sqrt_price_x96, amount1)?;
        Ok(liquidity0.min(liquidity1))
    } else {
        get_liquidity_for_amount_1(sqrt_lower, sqrt_upper, amount1)
    }
}

/// Token amounts held by `liquidity` across the range at the current price,
/// rounded down.
pub fn get_amounts_for_liquidity(
    sqrt_price_x96: U256,
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    liquidity: u128,
) -> Result<(U256, U256), CoreError> {
    let (sqrt_lower, sqrt_upper) = sort(sqrt_price_a, sqrt_price_b);

    if sqrt_price_x96 <= sqrt_lower {
        Ok((get_amount_0_delta(sqrt_lower, sqrt_upper, liquidity, false)?, U256::ZERO))
    } else if sqrt_price_x96 < sqrt_upper {
        Ok((
            get_amount_0_delta(sqrt_price_x96, sqrt_upper, liquidity, false)?,
            get_amount_1_delta(sqrt_lower, sqrt_price_x96, liquidity, false)?,
        ))
    } else {
        Ok((U256::ZERO, get_amount_1_delta(sqrt_lower, sqrt_upper, liquidity, false)?))
    }
}
