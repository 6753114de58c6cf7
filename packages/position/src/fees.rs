use alloy_primitives::U256;
use kelpswap_math::{mul_div, Q128};
use crate::types::PositionRecord;

/// Fees earned by `liquidity` since the `last` checkpoint, in token units.
///
/// Growth is compared with wrapping subtraction. Amounts that do not fit in
/// a `u128` are clamped to `u128::MAX`.
pub(crate) fn fees_since(inside_x128: U256, last_x128: U256, liquidity: u128) -> u128 {
    if liquidity == 0 {
        return 0;
    }

    // (2^256 - 1) * (2^128 - 1) / 2^128 always fits, so mul_div cannot fail
    mul_div(inside_x128.wrapping_sub(last_x128), U256::from(liquidity), Q128)
        .ok()
        .and_then(|owed| u128::try_from(owed).ok())
        .unwrap_or(u128::MAX)
}

/// Fees an update at the given inside growth would credit, without
/// touching the record.
pub fn pending_fees(
    record: &PositionRecord,
    fee_growth_inside_0_x128: U256,
    fee_growth_inside_1_x128: U256,
) -> (u128, u128) {
    (
        fees_since(
            fee_growth_inside_0_x128,
            record.fee_growth_inside_0_last_x128,
            record.liquidity,
        ),
        fees_since(
            fee_growth_inside_1_x128,
            record.fee_growth_inside_1_last_x128,
            record.liquidity,
        ),
    )
}
