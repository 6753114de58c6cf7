// Ledger-backed Tick Bitmap

use alloy_primitives::U256;
use kelpswap_math::{from_host_u256, to_host_u256};
use soroban_sdk::{contracttype, Env, Symbol};
use crate::store::TickWordStore;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum BitmapKey {
    /// Bitmap word by word index
    Word(i32),
}

/// TTL for bitmap words (about 1 year at 5s per ledger)
pub const PERSISTENT_LIFETIME: u32 = 6_307_200;
pub const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &BitmapKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// BITMAP
// ============================================================

/// Tick bitmap kept in the calling contract's persistent storage.
///
/// Must be used from within a contract invocation.
#[derive(Clone)]
pub struct LedgerBitmap {
    env: Env,
}

impl LedgerBitmap {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }
}

impl TickWordStore for LedgerBitmap {
    fn word(&self, word_pos: i16) -> U256 {
        let key = BitmapKey::Word(word_pos as i32);
        self.env
            .storage()
            .persistent()
            .get::<_, soroban_sdk::U256>(&key)
            .map(|word| from_host_u256(&word))
            .unwrap_or(U256::ZERO)
    }

    fn set_word(&mut self, word_pos: i16, word: U256) {
        let key = BitmapKey::Word(word_pos as i32);
        let host_word = to_host_u256(&self.env, word);

        if word.is_zero() {
            self.env.storage().persistent().remove(&key);
        } else {
            self.env.storage().persistent().set(&key, &host_word);
            extend_ttl(&self.env, &key);
        }

        self.env.events().publish(
            (Symbol::new(&self.env, "tick_flip"), word_pos as i32),
            host_word,
        );
    }
}
