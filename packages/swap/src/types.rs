use alloy_primitives::U256;

/// Outcome of a single swap step toward a price target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapStep {
    /// Price after the step; equals the target when it was reached
    pub sqrt_price_next: U256,
    /// Input consumed, excluding the fee
    pub amount_in: U256,
    /// Output released
    pub amount_out: U256,
    /// Fee charged on top of `amount_in`
    pub fee_amount: U256,
}

impl SwapStep {
    /// Input plus fee, i.e. what the step takes out of the remaining amount
    /// in exact-input mode.
    #[inline]
    pub fn total_in(&self) -> U256 {
        self.amount_in + self.fee_amount
    }

    #[inline]
    pub fn reached(&self, sqrt_price_target: U256) -> bool {
        self.sqrt_price_next == sqrt_price_target
    }
}
