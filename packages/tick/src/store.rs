// Tick Bitmap Storage

use alloc::collections::BTreeMap;
use alloy_primitives::U256;

/// Word-addressed backing storage for the tick bitmap.
///
/// Words that were never written read as zero.
pub trait TickWordStore {
    fn word(&self, word_pos: i16) -> U256;
    fn set_word(&mut self, word_pos: i16, word: U256);
}

/// In-memory bitmap, populated lazily as ticks are flipped.
#[derive(Clone, Debug, Default)]
pub struct MemoryBitmap {
    words: BTreeMap<i16, U256>,
}

impl MemoryBitmap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of words holding at least one set bit.
    pub fn populated_words(&self) -> usize {
        self.words.len()
    }
}

impl TickWordStore for MemoryBitmap {
    fn word(&self, word_pos: i16) -> U256 {
        self.words.get(&word_pos).copied().unwrap_or(U256::ZERO)
    }

    fn set_word(&mut self, word_pos: i16, word: U256) {
        if word.is_zero() {
            self.words.remove(&word_pos);
        } else {
            self.words.insert(word_pos, word);
        }
    }
}
