// SPDX-License-Identifier: MIT
// Sqrt Price Calculations

use alloy_primitives::U256;
use crate::constants::{Q96, RESOLUTION, U160_MAX};
use crate::error::CoreError;
use crate::full_math::{div_rounding_up, mul_div, mul_div_rounding_up};

#[inline]
fn to_u160(value: U256) -> Result<U256, CoreError> {
    if value > U160_MAX {
        return Err(CoreError::Overflow);
    }
    Ok(value)
}

/// Next sqrt price after adding or removing `amount` of token0, rounded up.
///
/// Uses `L * sqrtP / (L ± amount * sqrtP)` when the product fits in 256 bits
/// and `L / (L / sqrtP + amount)` otherwise. Rounding up keeps the price from
/// moving further than the amount pays for.
pub fn get_next_sqrt_price_from_amount_0_rounding_up(
    sqrt_price_x96: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256, CoreError> {
    if amount.is_zero() {
        return Ok(sqrt_price_x96);
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let product = amount.checked_mul(sqrt_price_x96);

    if add {
        if let Some(product) = product {
            if let Some(denominator) = numerator1.checked_add(product) {
                return mul_div_rounding_up(numerator1, sqrt_price_x96, denominator);
            }
        }

        let denominator = (numerator1 / sqrt_price_x96)
            .checked_add(amount)
            .ok_or(CoreError::Overflow)?;
        div_rounding_up(numerator1, denominator)
    } else {
        let product = product.ok_or(CoreError::PriceOutOfRange)?;
        if numerator1 <= product {
            return Err(CoreError::PriceOutOfRange);
        }

        let denominator = numerator1 - product;
        to_u160(mul_div_rounding_up(numerator1, sqrt_price_x96, denominator)?)
    }
}

/// Next sqrt price after adding or removing `amount` of token1, rounded down.
pub fn get_next_sqrt_price_from_amount_1_rounding_down(
    sqrt_price_x96: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256, CoreError> {
    if liquidity == 0 {
        return Err(CoreError::InvalidState);
    }
    let liquidity = U256::from(liquidity);

    if add {
        let quotient = if amount <= U160_MAX {
            (amount << RESOLUTION) / liquidity
        } else {
            mul_div(amount, Q96, liquidity)?
        };

        let next = sqrt_price_x96
            .checked_add(quotient)
            .ok_or(CoreError::Overflow)?;
        to_u160(next)
    } else {
        let quotient = if amount <= U160_MAX {
            div_rounding_up(amount << RESOLUTION, liquidity)?
        } else {
            mul_div_rounding_up(amount, Q96, liquidity)?
        };

        if sqrt_price_x96 <= quotient {
            return Err(CoreError::PriceUnderflow);
        }
        Ok(sqrt_price_x96 - quotient)
    }
}

/// Next sqrt price after `amount_in` of the input token enters the pool.
pub fn get_next_sqrt_price_from_input(
    sqrt_price_x96: U256,
    liquidity: u128,
    amount_in: U256,
    zero_for_one: bool,
) -> Result<U256, CoreError> {
    if sqrt_price_x96.is_zero() || liquidity == 0 {
        return Err(CoreError::InvalidState);
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount_0_rounding_up(sqrt_price_x96, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount_1_rounding_down(sqrt_price_x96, liquidity, amount_in, true)
    }
}

/// Next sqrt price after `amount_out` of the output token leaves the pool.
pub fn get_next_sqrt_price_from_output(
    sqrt_price_x96: U256,
    liquidity: u128,
    amount_out: U256,
    zero_for_one: bool,
) -> Result<U256, CoreError> {
    if sqrt_price_x96.is_zero() || liquidity == 0 {
        return Err(CoreError::InvalidState);
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount_1_rounding_down(sqrt_price_x96, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount_0_rounding_up(sqrt_price_x96, liquidity, amount_out, false)
    }
}
