// SPDX-License-Identifier: MIT
// Tick Bitmap

use alloy_primitives::U256;
use kelpswap_math::{least_significant_bit, most_significant_bit, CoreError};
use crate::store::TickWordStore;
use crate::update::is_valid_tick;

/// Word index and bit index of a compressed tick.
#[inline]
pub fn position(tick: i32) -> (i16, u8) {
    ((tick >> 8) as i16, tick.rem_euclid(256) as u8)
}

/// Compresses a tick by its spacing, rounding toward negative infinity.
#[inline]
fn compress(tick: i32, tick_spacing: i32) -> Result<i32, CoreError> {
    if tick_spacing <= 0 {
        return Err(CoreError::InvalidTickSpacing);
    }
    if !is_valid_tick(tick) {
        return Err(CoreError::TickOutOfRange);
    }
    Ok(tick.div_euclid(tick_spacing))
}

#[inline]
fn expand(compressed: i32, tick_spacing: i32) -> Result<i32, CoreError> {
    compressed
        .checked_mul(tick_spacing)
        .ok_or(CoreError::Overflow)
}

/// Toggles the initialized bit of `tick`.
pub fn flip_tick<S: TickWordStore>(
    store: &mut S,
    tick: i32,
    tick_spacing: i32,
) -> Result<(), CoreError> {
    let compressed = compress(tick, tick_spacing)?;
    if tick % tick_spacing != 0 {
        return Err(CoreError::TickMisaligned);
    }

    let (word_pos, bit_pos) = position(compressed);
    let mask = U256::ONE << (bit_pos as usize);
    let word = store.word(word_pos);
    store.set_word(word_pos, word ^ mask);
    Ok(())
}

/// Whether `tick` is currently marked initialized.
pub fn is_initialized<S: TickWordStore>(
    store: &S,
    tick: i32,
    tick_spacing: i32,
) -> Result<bool, CoreError> {
    let compressed = compress(tick, tick_spacing)?;
    if tick % tick_spacing != 0 {
        return Err(CoreError::TickMisaligned);
    }

    let (word_pos, bit_pos) = position(compressed);
    Ok(store.word(word_pos).bit(bit_pos as usize))
}

/// Next initialized tick in the same 256-tick word as `tick`.
///
/// `tick` must lie in `[MIN_TICK, MAX_TICK]`; the returned word edge may not.
///
/// With `lte` the search covers `tick` and everything to its left, otherwise
/// strictly to its right. When nothing in the word is set, returns the word
/// edge in the search direction with `initialized == false`; callers step
/// word by word from there.
pub fn next_initialized_tick_within_one_word<S: TickWordStore>(
    store: &S,
    tick: i32,
    tick_spacing: i32,
    lte: bool,
) -> Result<(i32, bool), CoreError> {
    let compressed = compress(tick, tick_spacing)?;

    if lte {
        let (word_pos, bit_pos) = position(compressed);
        // all bits at or below bit_pos
        let lowest = U256::ONE << (bit_pos as usize);
        let mask = (lowest - U256::ONE) + lowest;
        let masked = store.word(word_pos) & mask;

        let initialized = !masked.is_zero();
        let next = if initialized {
            let msb = most_significant_bit(masked)?;
            expand(compressed - (bit_pos - msb) as i32, tick_spacing)?
        } else {
            expand(compressed - bit_pos as i32, tick_spacing)?
        };
        Ok((next, initialized))
    } else {
        let (word_pos, bit_pos) = position(compressed + 1);
        // all bits at or above bit_pos
        let mask = !((U256::ONE << (bit_pos as usize)) - U256::ONE);
        let masked = store.word(word_pos) & mask;

        let initialized = !masked.is_zero();
        let next = if initialized {
            let lsb = least_significant_bit(masked)?;
            expand(compressed + 1 + (lsb - bit_pos) as i32, tick_spacing)?
        } else {
            expand(compressed + 1 + (u8::MAX - bit_pos) as i32, tick_spacing)?
        };
        Ok((next, initialized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBitmap;

    #[test]
    fn test_position_negative_ticks() {
        assert_eq!(position(0), (0, 0));
        assert_eq!(position(255), (0, 255));
        assert_eq!(position(256), (1, 0));
        assert_eq!(position(-1), (-1, 255));
        assert_eq!(position(-256), (-1, 0));
        assert_eq!(position(-257), (-2, 255));
    }

    #[test]
    fn test_flip_requires_alignment() {
        let mut bitmap = MemoryBitmap::new();
        assert_eq!(flip_tick(&mut bitmap, 61, 60), Err(CoreError::TickMisaligned));
        assert_eq!(flip_tick(&mut bitmap, 60, 0), Err(CoreError::InvalidTickSpacing));
        assert_eq!(bitmap.populated_words(), 0);
    }

    #[test]
    fn test_flip_twice_restores_word() {
        let mut bitmap = MemoryBitmap::new();
        flip_tick(&mut bitmap, -230, 1).unwrap();
        assert!(is_initialized(&bitmap, -230, 1).unwrap());
        assert!(!is_initialized(&bitmap, -231, 1).unwrap());

        flip_tick(&mut bitmap, -230, 1).unwrap();
        assert!(!is_initialized(&bitmap, -230, 1).unwrap());
        assert_eq!(bitmap.populated_words(), 0);
    }

    #[test]
    fn test_compression_rounds_down_for_negative_ticks() {
        let mut bitmap = MemoryBitmap::new();
        flip_tick(&mut bitmap, -60, 60).unwrap();

        // -1 compresses to -1, so -60 is in range for lte
        assert_eq!(
            next_initialized_tick_within_one_word(&bitmap, -1, 60, true).unwrap(),
            (-60, true)
        );
    }
}
