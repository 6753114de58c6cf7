// Tick Types

use alloy_primitives::U256;

/// Information stored for each initialized tick
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickInfo {
    /// Total liquidity referencing this tick
    pub liquidity_gross: u128,
    /// Net liquidity change when crossing left-to-right
    pub liquidity_net: i128,
    /// Fee growth per unit of liquidity on the other side of this tick (token0)
    pub fee_growth_outside_0_x128: U256,
    /// Fee growth per unit of liquidity on the other side of this tick (token1)
    pub fee_growth_outside_1_x128: U256,
    /// Whether this tick is initialized
    pub initialized: bool,
}
