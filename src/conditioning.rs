// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Methods to turn random words into bit symbols and bytes.

use crate::rngs::RNG;

/// Append the lowest `count` bits of `word` as '0'/'1' chars,
/// least significant bit first.
pub fn push_bit_chars(out: &mut String, word: u64, count: usize) {
    assert!(count <= 64);
    for bit in 0..count {
        out.push(if (word >> bit) & 1 == 1 { '1' } else { '0' });
    }
}

/// Draw `count` bit symbols from the rng.
/// Each u64 yields 64 symbols, unused bits of the last word are dropped.
pub fn bit_chars(test_rng: &mut impl RNG, count: usize) -> String {
    let mut out = String::with_capacity(count);
    let mut remaining = count;
    while remaining > 0 {
        let take = remaining.min(64);
        push_bit_chars(&mut out, test_rng.next(), take);
        remaining -= take;
    }
    out
}

/// Fill the buffer with little endian u64s from the rng.
pub fn fill_bytes(test_rng: &mut impl RNG, buf: &mut [u8]) {
    for chunk in buf.chunks_mut(8) {
        let sample = test_rng.next().to_le_bytes();
        chunk.copy_from_slice(&sample[..chunk.len()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rngs::testgens::{AlternatingBits, OnlyOne, OnlyZero};

    #[test]
    fn bits_are_lsb_first() {
        let mut s = String::new();
        push_bit_chars(&mut s, 0b110, 4);
        assert_eq!(s, "0110");
    }

    #[test]
    fn bit_chars_spans_words() {
        let mut r = AlternatingBits::new(0);
        let bits = bit_chars(&mut r, 130);
        assert_eq!(bits.len(), 130);
        assert!(bits.starts_with("1010"));
        assert_eq!(&bits[62..66], "1010");
    }

    #[test]
    fn fill_bytes_handles_partial_chunk() {
        let mut r = OnlyOne::new(0);
        let mut buf = [0u8; 11];
        fill_bytes(&mut r, &mut buf);
        assert!(buf.iter().all(|&b| b == 0xff));

        let mut r = OnlyZero::new(0);
        fill_bytes(&mut r, &mut buf);
        assert!(buf.iter().all(|&b| b == 0));
    }
}
