// Position Management Logic

use alloy_primitives::U256;
use kelpswap_math::{add_delta, CoreError};
use crate::fees::fees_since;
use crate::types::PositionRecord;

/// Credits fees earned since the last checkpoint and applies a liquidity change.
///
/// 1. delta = current_inside - last_inside (wrapping)
/// 2. owed_tokens += old_liquidity * delta / 2^128 (saturating)
/// 3. last_inside = current_inside
///
/// A zero delta on an empty record is rejected so that fee pokes only
/// happen on live positions. On error the record is left untouched.
pub fn update_record(
    record: &mut PositionRecord,
    fee_growth_inside_0_x128: U256,
    fee_growth_inside_1_x128: U256,
    liquidity_delta: i128,
) -> Result<(), CoreError> {
    let liquidity_next = if liquidity_delta == 0 {
        if record.liquidity == 0 {
            return Err(CoreError::NoLiquidity);
        }
        record.liquidity
    } else {
        add_delta(record.liquidity, liquidity_delta)?
    };

    let owed_0 = fees_since(
        fee_growth_inside_0_x128,
        record.fee_growth_inside_0_last_x128,
        record.liquidity,
    );
    let owed_1 = fees_since(
        fee_growth_inside_1_x128,
        record.fee_growth_inside_1_last_x128,
        record.liquidity,
    );

    record.liquidity = liquidity_next;
    record.fee_growth_inside_0_last_x128 = fee_growth_inside_0_x128;
    record.fee_growth_inside_1_last_x128 = fee_growth_inside_1_x128;
    record.tokens_owed_0 = record.tokens_owed_0.saturating_add(owed_0);
    record.tokens_owed_1 = record.tokens_owed_1.saturating_add(owed_1);

    Ok(())
}

// ============================================================
// POSITION HELPERS
// ============================================================

/// Check if a position has uncollected fees
#[inline]
pub fn has_uncollected_fees(record: &PositionRecord) -> bool {
    record.tokens_owed_0 > 0 || record.tokens_owed_1 > 0
}

/// Check if a position is empty (no liquidity and no fees)
#[inline]
pub fn is_empty(record: &PositionRecord) -> bool {
    record.liquidity == 0 && !has_uncollected_fees(record)
}

// ============================================================
// POSITION VALIDATION
// ============================================================

/// Validate position range against the pool's tick spacing
pub fn validate_position_params(
    lower: i32,
    upper: i32,
    tick_spacing: i32,
) -> Result<(), CoreError> {
    if tick_spacing <= 0 {
        return Err(CoreError::InvalidTickSpacing);
    }

    if lower >= upper {
        return Err(CoreError::InvalidPrice);
    }

    if lower < kelpswap_math::MIN_TICK || upper > kelpswap_math::MAX_TICK {
        return Err(CoreError::TickOutOfRange);
    }

    if lower % tick_spacing != 0 || upper % tick_spacing != 0 {
        return Err(CoreError::TickMisaligned);
    }

    Ok(())
}
