// Bit scanning over 256-bit words

use alloy_primitives::U256;
use crate::error::CoreError;

const SHIFTS: [usize; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// Index (0-255) of the most significant set bit.
pub fn most_significant_bit(mut x: U256) -> Result<u8, CoreError> {
    if x.is_zero() {
        return Err(CoreError::ZeroInput);
    }

    let mut r: u8 = 0;
    for shift in SHIFTS {
        if x >= U256::ONE << shift {
            x >>= shift;
            r += shift as u8;
        }
    }
    Ok(r)
}

/// Index (0-255) of the least significant set bit.
pub fn least_significant_bit(mut x: U256) -> Result<u8, CoreError> {
    if x.is_zero() {
        return Err(CoreError::ZeroInput);
    }

    let mut r: u8 = 255;
    for shift in SHIFTS {
        let mask = (U256::ONE << shift) - U256::ONE;
        if (x & mask).is_zero() {
            x >>= shift;
        } else {
            r -= shift as u8;
        }
    }
    Ok(r)
}
