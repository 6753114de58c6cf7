// KelpSwap Tick Package

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod bitmap;
pub mod fee_growth;
pub mod ledger;
pub mod store;
pub mod types;
pub mod update;

pub use bitmap::{flip_tick, is_initialized, next_initialized_tick_within_one_word, position};
pub use fee_growth::get_fee_growth_inside;
pub use ledger::LedgerBitmap;
pub use store::{MemoryBitmap, TickWordStore};
pub use types::TickInfo;
pub use update::{
    clear_tick, cross_tick, is_valid_tick, tick_spacing_to_max_liquidity_per_tick, update_tick,
};
