// Fee Growth Calculations

use alloy_primitives::U256;
use crate::types::TickInfo;

/// Fee growth per unit of liquidity inside `[tick_lower, tick_upper)`.
///
/// All subtractions wrap; only differences between two readings of the
/// result are meaningful.
pub fn get_fee_growth_inside(
    lower_info: &TickInfo,
    upper_info: &TickInfo,
    tick_lower: i32,
    tick_upper: i32,
    current_tick: i32,
    fee_growth_global_0_x128: U256,
    fee_growth_global_1_x128: U256,
) -> (U256, U256) {
    let (fee_growth_below_0, fee_growth_below_1) = if current_tick >= tick_lower {
        (lower_info.fee_growth_outside_0_x128, lower_info.fee_growth_outside_1_x128)
    } else {
        (
            fee_growth_global_0_x128.wrapping_sub(lower_info.fee_growth_outside_0_x128),
            fee_growth_global_1_x128.wrapping_sub(lower_info.fee_growth_outside_1_x128),
        )
    };

    let (fee_growth_above_0, fee_growth_above_1) = if current_tick < tick_upper {
        (upper_info.fee_growth_outside_0_x128, upper_info.fee_growth_outside_1_x128)
    } else {
        (
            fee_growth_global_0_x128.wrapping_sub(upper_info.fee_growth_outside_0_x128),
            fee_growth_global_1_x128.wrapping_sub(upper_info.fee_growth_outside_1_x128),
        )
    };

    let fee_growth_inside_0 = fee_growth_global_0_x128
        .wrapping_sub(fee_growth_below_0)
        .wrapping_sub(fee_growth_above_0);

    let fee_growth_inside_1 = fee_growth_global_1_x128
        .wrapping_sub(fee_growth_below_1)
        .wrapping_sub(fee_growth_above_1);

    (fee_growth_inside_0, fee_growth_inside_1)
}
