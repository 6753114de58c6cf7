// KelpSwap Oracle Package

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod ledger;
pub mod oracle;
pub mod store;
pub mod types;

pub use ledger::{LedgerObservations, LedgerOracle, StoredObservation, StoredOracleState};
pub use oracle::{grow, initialize, lte, observe, observe_single, transform, write};
pub use store::{ObservationArray, ObservationStore};
pub use types::{Observation, OracleState};
