// KelpSwap Math Package

#![cfg_attr(not(test), no_std)]

pub mod bit_math;
pub mod constants;
pub mod error;
pub mod full_math;
pub mod host;
pub mod liquidity;
pub mod sqrt_price;
pub mod tick_math;

pub use alloy_primitives::{I256, U256};

pub use constants::*;
pub use error::CoreError;

// Fixed-point helpers
pub use full_math::{div_rounding_up, mul_div, mul_div_rounding_up, truncate_u128};
pub use bit_math::{least_significant_bit, most_significant_bit};

// Sqrt price functions
pub use sqrt_price::{
    get_next_sqrt_price_from_amount_0_rounding_up,
    get_next_sqrt_price_from_amount_1_rounding_down,
    get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
};
pub use tick_math::get_sqrt_ratio_at_tick;

// Liquidity functions
pub use liquidity::{
    add_delta,
    get_amount_0_delta,
    get_amount_0_delta_signed,
    get_amount_1_delta,
    get_amount_1_delta_signed,
    get_amounts_for_liquidity,
    get_liquidity_for_amount_0,
    get_liquidity_for_amount_1,
    get_liquidity_for_amounts,
};

pub use host::{from_host_u256, to_host_u256};
