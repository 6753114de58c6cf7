// Protocol constants
//
// Grouped by functionality. Fixed-point values use alloy's little-endian
// limb layout so they can be evaluated in const context.

use alloy_primitives::U256;

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum valid tick value (price ≈ 2.94e-39)
pub const MIN_TICK: i32 = -887272;

/// Maximum valid tick value (price ≈ 3.40e+38)
pub const MAX_TICK: i32 = -MIN_TICK;

// ============================================================
// SQRT PRICE CONSTANTS (Q64.96 format)
// ============================================================

/// Number of fractional bits in a sqrt price
pub const RESOLUTION: u8 = 96;

/// 2^96, the Q64.96 representation of 1.0
pub const Q96: U256 = U256::from_limbs([0, 1 << 32, 0, 0]);

/// 2^128, the scale of fee growth and seconds-per-liquidity accumulators
pub const Q128: U256 = U256::from_limbs([0, 0, 1, 0]);

/// Largest value that fits in 160 bits
pub const U160_MAX: U256 = U256::from_limbs([u64::MAX, u64::MAX, u32::MAX as u64, 0]);

/// Sqrt price at MIN_TICK
pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295128739, 0, 0, 0]);

/// Sqrt price at MAX_TICK
pub const MAX_SQRT_RATIO: U256 =
    U256::from_limbs([6743328256752651558, 17280870778742802505, 4294805859, 0]);

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Fees are expressed in hundredths of a basis point
pub const FEE_DENOMINATOR: u32 = 1_000_000;

// ============================================================
// ORACLE CONSTANTS
// ============================================================

/// Fixed capacity of the observation ring buffer
pub const MAX_OBSERVATIONS: usize = 65_536;
