// SPDX-License-Identifier: MIT
// Single Swap Step

use alloy_primitives::{I256, U256};
use kelpswap_math::{
    get_amount_0_delta, get_amount_1_delta, get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output, mul_div, mul_div_rounding_up, CoreError, FEE_DENOMINATOR,
};
use crate::types::SwapStep;

/// Swap within a single liquidity range, moving from `sqrt_price_current`
/// toward `sqrt_price_target` without passing it.
///
/// A non-negative `amount_remaining` is an exact input budget (fee
/// included); a negative one is an exact output request. The direction
/// follows from the price pair: a target at or below the current price
/// sells token0.
///
/// # Errors
/// `InvalidFee` when `fee_pips` is not below the fee denominator, plus any
/// error from the underlying price math.
pub fn compute_swap_step(
    sqrt_price_current: U256,
    sqrt_price_target: U256,
    liquidity: u128,
    amount_remaining: I256,
    fee_pips: u32,
) -> Result<SwapStep, CoreError> {
    if fee_pips >= FEE_DENOMINATOR {
        return Err(CoreError::InvalidFee);
    }

    let zero_for_one = sqrt_price_current >= sqrt_price_target;
    let exact_in = !amount_remaining.is_negative();
    let magnitude = amount_remaining.unsigned_abs();

    let denominator = U256::from(FEE_DENOMINATOR);
    let fee = U256::from(fee_pips);
    let fee_complement = U256::from(FEE_DENOMINATOR - fee_pips);

    let mut amount_in = U256::ZERO;
    let mut amount_out = U256::ZERO;

    let sqrt_price_next = if exact_in {
        let amount_remaining_less_fee = mul_div(magnitude, fee_complement, denominator)?;
        amount_in = if zero_for_one {
            get_amount_0_delta(sqrt_price_target, sqrt_price_current, liquidity, true)?
        } else {
            get_amount_1_delta(sqrt_price_current, sqrt_price_target, liquidity, true)?
        };

        if amount_remaining_less_fee >= amount_in {
            sqrt_price_target
        } else {
            get_next_sqrt_price_from_input(
                sqrt_price_current,
                liquidity,
                amount_remaining_less_fee,
                zero_for_one,
            )?
        }
    } else {
        amount_out = if zero_for_one {
            get_amount_1_delta(sqrt_price_target, sqrt_price_current, liquidity, false)?
        } else {
            get_amount_0_delta(sqrt_price_current, sqrt_price_target, liquidity, false)?
        };

        if magnitude >= amount_out {
            sqrt_price_target
        } else {
            get_next_sqrt_price_from_output(sqrt_price_current, liquidity, magnitude, zero_for_one)?
        }
    };

    let max = sqrt_price_target == sqrt_price_next;

    // recompute whichever side was not pinned to the target
    if zero_for_one {
        if !(max && exact_in) {
            amount_in = get_amount_0_delta(sqrt_price_next, sqrt_price_current, liquidity, true)?;
        }
        if !(max && !exact_in) {
            amount_out = get_amount_1_delta(sqrt_price_next, sqrt_price_current, liquidity, false)?;
        }
    } else {
        if !(max && exact_in) {
            amount_in = get_amount_1_delta(sqrt_price_current, sqrt_price_next, liquidity, true)?;
        }
        if !(max && !exact_in) {
            amount_out = get_amount_0_delta(sqrt_price_current, sqrt_price_next, liquidity, false)?;
        }
    }

    // rounding on the price must not release more than was asked for
    if !exact_in && amount_out > magnitude {
        amount_out = magnitude;
    }

    let fee_amount = if exact_in && sqrt_price_next != sqrt_price_target {
        // the remainder is all fee
        magnitude - amount_in
    } else {
        mul_div_rounding_up(amount_in, fee, fee_complement)?
    };

    Ok(SwapStep {
        sqrt_price_next,
        amount_in,
        amount_out,
        fee_amount,
    })
}
