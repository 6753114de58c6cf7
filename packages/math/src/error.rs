// Core error codes
//
// Shared by every KelpSwap package so a pool contract can return them
// directly from its entry points.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CoreError {
    // Arithmetic errors (100-199)
    /// Fixed-point multiply/divide exceeds the representable width
    Overflow = 100,
    /// Bit scan on a zero word
    ZeroInput = 101,

    // Price errors (200-299)
    /// Zero price or zero liquidity where a nonzero value is required
    InvalidState = 200,
    /// Removing token0 would leave a non-positive denominator
    PriceOutOfRange = 201,
    /// Removing token1 would drive the price to or below zero
    PriceUnderflow = 202,
    /// Degenerate price range, e.g. a zero lower bound
    InvalidPrice = 203,
    /// Tick outside [MIN_TICK, MAX_TICK]
    TickOutOfRange = 204,

    // Liquidity errors (300-399)
    /// Fee poke on a position without liquidity
    NoLiquidity = 300,
    /// Delta would drive liquidity negative
    LiquidityUnderflow = 301,
    /// Delta would push liquidity past its ceiling
    LiquidityOverflow = 302,

    // Tick index errors (400-499)
    /// Tick is not a multiple of the tick spacing
    TickMisaligned = 400,
    /// Tick spacing must be positive
    InvalidTickSpacing = 401,

    // Swap errors (500-599)
    /// Fee must be below 1_000_000 pips
    InvalidFee = 500,

    // Oracle errors (600-699)
    /// Oracle queried or grown before the first write
    NotInitialized = 600,
    /// Query predates every retained observation
    TooOld = 601,

    // Token ledger errors (700-799)
    /// Sender balance does not cover the transfer
    InsufficientBalance = 700,
    /// Spender allowance does not cover the transfer
    InsufficientAllowance = 701,
    /// Negative or unrepresentable token amount
    InvalidAmount = 702,
}
