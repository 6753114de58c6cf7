// Oracle Types

use alloy_primitives::U256;

/// One checkpoint of the cumulative accumulators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Observation {
    /// Block timestamp of the checkpoint, on a 32-bit ring
    pub block_timestamp: u32,
    /// Sum of tick * elapsed seconds; wraps at 56 bits
    pub tick_cumulative: i64,
    /// Sum of elapsed seconds / max(1, liquidity) in Q128; wraps at 160 bits
    pub seconds_per_liquidity_cumulative_x128: U256,
    /// Whether the slot holds data (grown slots are touched but not initialized)
    pub initialized: bool,
}

/// Ring buffer bookkeeping a pool keeps next to its observations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OracleState {
    /// Slot of the most recent observation
    pub index: u16,
    /// Number of slots currently in use
    pub cardinality: u16,
    /// Number of slots reserved; cardinality catches up one write at a time
    pub cardinality_next: u16,
}
