// KelpSwap Swap Package

#![cfg_attr(not(test), no_std)]

pub mod step;
pub mod types;

pub use step::compute_swap_step;
pub use types::SwapStep;
