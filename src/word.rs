// loglite
// Copyright (c) 2026 The loglite Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `word` defines the `UWord` and `SWord` traits: a common interface over
//! the machine integer types `loglite` is generic over, regardless of
//! their width. This plays the same role that the `Sample` trait plays in
//! an audio library's sample-format abstraction: one codec body is
//! written in terms of the trait, and the compiler monomorphizes a copy
//! per concrete width instead of the width matrix being spelled out by
//! hand (or generated by a preprocessor).

/// An unsigned machine word `loglite` can encode a PUL codeword into, or
/// decode a PUL codeword out of.
///
/// All widening arithmetic in the codecs is performed in `u64`; `UWord`
/// is the narrow/wide boundary. `to_u64` never loses information;
/// `from_u64` truncates to the low `BITS` bits, matching the narrowing
/// behaviour of a `wrapping` cast.
pub trait UWord: Copy + Eq + core::fmt::Debug {
    /// Width of this word, one of 8, 16, 32, 64.
    const BITS: u32;

    /// `2^BITS - 1`, the largest value representable in this width.
    const MAX: u64;

    /// Widen to `u64` without loss.
    fn to_u64(self) -> u64;

    /// Narrow from `u64`, truncating to the low `BITS` bits.
    fn from_u64(v: u64) -> Self;
}

/// A signed machine word `loglite` can encode a SLOG codeword into, or
/// decode a SLOG codeword out of.
///
/// All widening arithmetic in the codecs is performed in `i64`; `SWord`
/// is the narrow/wide boundary, sign-extending on widen and truncating
/// (preserving the two's-complement bit pattern) on narrow.
pub trait SWord: Copy + Eq + core::fmt::Debug {
    /// Width of this word, one of 8, 16, 32, 64.
    const BITS: u32;

    /// `-2^(BITS-1)`, the log-zero sentinel for this width.
    const MIN: i64;

    /// `2^(BITS-1) - 1`, the largest value representable in this width.
    const MAX: i64;

    /// Widen to `i64`, sign-extending.
    fn to_i64(self) -> i64;

    /// Narrow from `i64`, truncating to the low `BITS` bits (preserving
    /// the two's-complement pattern, not saturating).
    fn from_i64(v: i64) -> Self;
}

macro_rules! impl_uword {
    ($ty:ty) => {
        impl UWord for $ty {
            const BITS: u32 = <$ty>::BITS;
            const MAX: u64 = <$ty>::MAX as u64;

            #[inline(always)]
            fn to_u64(self) -> u64 {
                self as u64
            }

            #[inline(always)]
            fn from_u64(v: u64) -> Self {
                v as $ty
            }
        }
    };
}

macro_rules! impl_sword {
    ($ty:ty) => {
        impl SWord for $ty {
            const BITS: u32 = <$ty>::BITS;
            const MIN: i64 = <$ty>::MIN as i64;
            const MAX: i64 = <$ty>::MAX as i64;

            #[inline(always)]
            fn to_i64(self) -> i64 {
                self as i64
            }

            #[inline(always)]
            fn from_i64(v: i64) -> Self {
                v as $ty
            }
        }
    };
}

impl_uword!(u8);
impl_uword!(u16);
impl_uword!(u32);
impl_uword!(u64);

impl_sword!(i8);
impl_sword!(i16);
impl_sword!(i32);
impl_sword!(i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uword_round_trips_within_width() {
        assert_eq!(u8::from_u64(0xab), 0xab_u8);
        assert_eq!(u16::from_u64(0x1234), 0x1234_u16);
        assert_eq!(u32::BITS, 32);
        assert_eq!(u64::MAX, u64::MAX);
    }

    #[test]
    fn sword_sign_extends_on_widen() {
        assert_eq!((-1i8).to_i64(), -1);
        assert_eq!(i16::MIN, -32768);
        assert_eq!(i8::from_i64(-1), -1i8);
    }

    #[test]
    fn sword_from_i64_truncates_pattern() {
        // Truncating -1 (all ones) to i8 keeps the all-ones pattern, i.e. -1.
        assert_eq!(i8::from_i64(-1), -1);
        // A value with only the low 8 bits significant truncates losslessly.
        assert_eq!(i8::from_i64(0x7f), 127);
    }
}
