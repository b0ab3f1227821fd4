// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deterministic Name Fingerprints
//!
//! Folds a name into a 32-bit signed accumulator with xor-then-multiply over
//! its UTF-16 code units. The arithmetic is fixed-width two's-complement so
//! that addresses derived from the same name stay bit-identical with those
//! already deployed.
//!
//! # Examples
//!
//! ```rust
//! use infra_identity::fingerprint::{fingerprint, hash};
//!
//! let fp = fingerprint("Mac1");
//! assert_eq!(fp.value(), 0x536e_b46d);
//! assert_eq!(hash("Mac1"), "536eb46d");
//!
//! // The empty name is the untouched seed
//! assert_eq!(fingerprint("").value(), 9);
//! ```

use std::fmt;

/// Initial accumulator value
pub const SEED: i32 = 9;

/// Per-unit multiplier (9^9)
pub const MULTIPLIER: i32 = 387_420_489;

/// Logical shift applied when folding the accumulator
const FOLD_SHIFT: u32 = 9;

/// Fingerprint of a name
///
/// Holds the raw accumulator; the folded and sign-normalized views are
/// derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    accumulator: i32,
}

impl Fingerprint {
    /// Fold a sequence of UTF-16 code units
    pub fn from_code_units(units: impl IntoIterator<Item = u16>) -> Self {
        let accumulator = units
            .into_iter()
            .fold(SEED, |acc, unit| (acc ^ i32::from(unit)).wrapping_mul(MULTIPLIER));

        Self { accumulator }
    }

    /// Raw accumulator after the last code unit
    pub fn accumulator(&self) -> i32 {
        self.accumulator
    }

    /// Accumulator xor its own logical (zero-filling) right shift
    pub fn folded(&self) -> i32 {
        let shifted = (self.accumulator as u32) >> FOLD_SHIFT;
        self.accumulator ^ shifted as i32
    }

    /// Sign-normalized fingerprint
    ///
    /// Returned as `u32` so that a folded value of `i32::MIN` normalizes to
    /// `2^31` rather than overflowing.
    pub fn value(&self) -> u32 {
        self.folded().unsigned_abs()
    }

    /// Lowercase hex without leading zeros
    pub fn to_hex(&self) -> String {
        format!("{:x}", self.value())
    }

    /// Hex digits of [`value`](Self::value), most significant first
    pub(crate) fn nibbles(&self) -> impl Iterator<Item = u8> {
        let value = self.value();
        let digits = (32 - value.leading_zeros()).div_ceil(4).max(1);

        (0..digits)
            .rev()
            .map(move |i| ((value >> (i * 4)) & 0xf) as u8)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.value())
    }
}

/// Fingerprint a name over its UTF-16 code units
pub fn fingerprint(input: &str) -> Fingerprint {
    Fingerprint::from_code_units(input.encode_utf16())
}

/// Hex fingerprint of a name
pub fn hash(input: &str) -> String {
    fingerprint(input).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_seed() {
        let fp = fingerprint("");
        assert_eq!(fp.accumulator(), SEED);
        assert_eq!(fp.folded(), 9);
        assert_eq!(fp.to_hex(), "9");
    }

    #[test]
    fn test_signed_wraparound() {
        let fp = fingerprint("Mac1");
        assert_eq!(fp.accumulator(), -1_396_234_233);
        assert_eq!(fp.folded(), -1_399_764_077);
        assert_eq!(fp.value(), 1_399_764_077);
    }

    #[test]
    fn test_positive_fold_kept() {
        let fp = fingerprint("a");
        assert_eq!(fp.accumulator(), 1_637_025_192);
        assert_eq!(fp.value(), 1_638_124_586);
    }

    #[test]
    fn test_surrogate_pairs_are_two_units() {
        let emoji = fingerprint("😀");
        let units: Vec<u16> = "😀".encode_utf16().collect();
        assert_eq!(units.len(), 2);
        assert_eq!(emoji, Fingerprint::from_code_units(units));
        assert_eq!(emoji.to_hex(), "572012");
    }

    #[test]
    fn test_min_folded_normalizes() {
        let fp = Fingerprint { accumulator: i32::MIN };
        assert_eq!(fp.folded(), i32::MIN ^ 0x0040_0000);

        // Only the sign bit set in the folded value
        let exact = Fingerprint {
            accumulator: 0x8040_2010_u32 as i32,
        };
        assert_eq!(exact.folded(), i32::MIN);
        assert_eq!(exact.value(), 0x8000_0000);
        assert_eq!(exact.to_hex(), "80000000");
    }

    #[test]
    fn test_nibbles_match_hex() {
        for name in ["", "Mac1", "talos-worker-01", "072e"] {
            let fp = fingerprint(name);
            let rendered: String = fp
                .nibbles()
                .map(|n| char::from_digit(u32::from(n), 16).unwrap_or('?'))
                .collect();
            assert_eq!(rendered, fp.to_hex());
        }
    }
}
