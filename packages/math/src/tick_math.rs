// SPDX-License-Identifier: MIT
// Tick to Sqrt Price Conversion

use alloy_primitives::U256;
use crate::constants::MAX_TICK;
use crate::error::CoreError;

/// Sqrt price at `tick` in Q64.96: `sqrt(1.0001^tick) * 2^96`, rounded up.
///
/// Each bit of `|tick|` multiplies in the Q128.128 constant
/// `1 / sqrt(1.0001^(2^bit))`; positive ticks invert the product.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U256, CoreError> {
    let abs_tick = tick.unsigned_abs();
    if abs_tick > MAX_TICK as u32 {
        return Err(CoreError::TickOutOfRange);
    }

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from_limbs([12262481743371124737, 18445821805675392311, 0, 0])
    } else {
        U256::from_limbs([0, 0, 1, 0])
    };

    macro_rules! apply_multiplier {
        ($bit:expr, $l0:expr, $l1:expr) => {
            if abs_tick & $bit != 0 {
                ratio = ratio.wrapping_mul(U256::from_limbs([$l0, $l1, 0, 0])) >> 128;
            }
        };
    }

    apply_multiplier!(0x2, 6459403834229662010, 18444899583751176498);
    apply_multiplier!(0x4, 17226890335427755468, 18443055278223354162);
    apply_multiplier!(0x8, 2032852871939366096, 18439367220385604838);
    apply_multiplier!(0x10, 14545316742740207172, 18431993317065449817);
    apply_multiplier!(0x20, 5129152022828963008, 18417254355718160513);
    apply_multiplier!(0x40, 4894419605888772193, 18387811781193591352);
    apply_multiplier!(0x80, 1280255884321894483, 18329067761203520168);
    apply_multiplier!(0x100, 15924666964335305636, 18212142134806087854);
    apply_multiplier!(0x200, 8010504389359918676, 17980523815641551639);
    apply_multiplier!(0x400, 10668036004952895731, 17526086738831147013);
    apply_multiplier!(0x800, 4878133418470705625, 16651378430235024244);
    apply_multiplier!(0x1000, 9537173718739605541, 15030750278693429944);
    apply_multiplier!(0x2000, 9972618978014552549, 12247334978882834399);
    apply_multiplier!(0x4000, 10428997489610666743, 8131365268884726200);
    apply_multiplier!(0x8000, 9305304367709015974, 3584323654723342297);
    apply_multiplier!(0x10000, 14301143598189091785, 696457651847595233);
    apply_multiplier!(0x20000, 7393154844743099908, 26294789957452057);
    apply_multiplier!(0x40000, 2209338891292245656, 37481735321082);
    apply_multiplier!(0x80000, 10518117631919034274, 76158723);

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up
    let round_up = ratio.as_limbs()[0] & 0xFFFF_FFFF != 0;
    Ok((ratio >> 32) + U256::from(round_up as u8))
}
