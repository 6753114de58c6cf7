// SPDX-License-Identifier: MIT
// 512-bit Multiply-Divide

use alloy_primitives::U256;
use crate::error::CoreError;

const U256_TWO: U256 = U256::from_limbs([2, 0, 0, 0]);
const U256_THREE: U256 = U256::from_limbs([3, 0, 0, 0]);

/// Computes `floor(a * b / denominator)` with a 512-bit intermediate product.
///
/// Fails with `Overflow` when `denominator` is zero or the quotient does not
/// fit in 256 bits.
pub fn mul_div(a: U256, b: U256, mut denominator: U256) -> Result<U256, CoreError> {
    if denominator.is_zero() {
        return Err(CoreError::Overflow);
    }

    // 512-bit product as [prod1 prod0]
    let mm = a.mul_mod(b, U256::MAX);
    let mut prod0 = a.wrapping_mul(b);
    let (mut prod1, borrow) = mm.overflowing_sub(prod0);
    if borrow {
        prod1 = prod1.wrapping_sub(U256::ONE);
    }

    if prod1.is_zero() {
        return Ok(prod0 / denominator);
    }

    if denominator <= prod1 {
        return Err(CoreError::Overflow);
    }

    // Make the division exact by subtracting the remainder from [prod1 prod0]
    let remainder = a.mul_mod(b, denominator);
    let (reduced, borrow) = prod0.overflowing_sub(remainder);
    prod0 = reduced;
    if borrow {
        prod1 = prod1.wrapping_sub(U256::ONE);
    }

    // Factor powers of two out of the denominator
    let twos = denominator & denominator.wrapping_neg();
    denominator = denominator.wrapping_div(twos);
    prod0 = prod0.wrapping_div(twos);

    // Shift in bits from prod1 into prod0
    let flip = twos
        .wrapping_neg()
        .wrapping_div(twos)
        .wrapping_add(U256::ONE);
    prod0 |= prod1.wrapping_mul(flip);

    // Modular inverse of the (now odd) denominator mod 2^256,
    // correct to 8 bits and doubled six times by Newton-Raphson
    let mut inv = U256_THREE.wrapping_mul(denominator) ^ U256_TWO;
    for _ in 0..6 {
        inv = inv.wrapping_mul(U256_TWO.wrapping_sub(denominator.wrapping_mul(inv)));
    }

    Ok(prod0.wrapping_mul(inv))
}

/// Like [`mul_div`], but rounds up when the division leaves a remainder.
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256, CoreError> {
    let result = mul_div(a, b, denominator)?;

    if a.mul_mod(b, denominator).is_zero() {
        return Ok(result);
    }

    result.checked_add(U256::ONE).ok_or(CoreError::Overflow)
}

/// Divides `a` by `b`, rounding up on a nonzero remainder.
#[inline]
pub fn div_rounding_up(a: U256, b: U256) -> Result<U256, CoreError> {
    if b.is_zero() {
        return Err(CoreError::Overflow);
    }

    let (quotient, remainder) = a.div_rem(b);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        Ok(quotient + U256::ONE)
    }
}

/// Low 128 bits of a 256-bit value, discarding the rest.
#[inline]
pub fn truncate_u128(x: U256) -> u128 {
    let limbs = x.as_limbs();
    (limbs[0] as u128) | ((limbs[1] as u128) << 64)
}
