// Conversions between alloy integers and Soroban host values
//
// Persistent storage only accepts host types, so ledger-backed stores
// convert at the boundary and keep alloy integers everywhere else.

use alloy_primitives::U256;
use soroban_sdk::{Bytes, Env};

/// Converts a 256-bit value into its host representation.
pub fn to_host_u256(env: &Env, value: U256) -> soroban_sdk::U256 {
    let bytes = Bytes::from_array(env, &value.to_be_bytes::<32>());
    soroban_sdk::U256::from_be_bytes(env, &bytes)
}

/// Converts a host 256-bit value back into an alloy integer.
pub fn from_host_u256(value: &soroban_sdk::U256) -> U256 {
    let mut buf = [0u8; 32];
    value.to_be_bytes().copy_into_slice(&mut buf);
    U256::from_be_bytes(buf)
}
