// KelpSwap Position Package

#![cfg_attr(not(test), no_std)]

pub mod book;
pub mod fees;
pub mod ledger;
pub mod manager;
pub mod types;

pub use book::{position_key, PositionBook};
pub use fees::pending_fees;
pub use ledger::TokenLedger;
pub use manager::{has_uncollected_fees, is_empty, update_record, validate_position_params};
pub use types::{PositionRecord, StoredPosition};
