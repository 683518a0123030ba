// loglite
// Copyright (c) 2026 The loglite Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bit-level primitives shared by every codec: count-leading-zeros,
//! find-last-set, bitmasks, and the per-width unsigned/signed extrema.
//!
//! These take their width `W` as an explicit runtime parameter rather
//! than a type parameter, in the same spirit as `util::bits` in an audio
//! bitstream reader masks/extends by an explicit bit count: the width is
//! a value the caller already knows (it is the source integer's or the
//! codeword's declared width), not a separate generic dimension.

/// Count leading zeros of `v` within a `w`-bit field.
///
/// `v` must be nonzero; the caller's encoder is required to branch on the
/// zero case before calling this (every encoder in this crate does).
#[inline(always)]
pub const fn clz(v: u64, w: u32) -> u32 {
    debug_assert!(w > 0 && w <= 64);
    debug_assert!(v != 0, "clz is undefined for zero");
    v.leading_zeros() - (64 - w)
}

/// Find-last-set: `w - clz(v, w)`, the 1-indexed position of the highest
/// set bit. Zero by definition when `v == 0`.
#[inline(always)]
pub const fn fls(v: u64, w: u32) -> u32 {
    if v == 0 {
        0
    } else {
        w - clz(v, w)
    }
}

/// Floor of the base-2 logarithm of `v`, i.e. the 0-indexed position of
/// the highest set bit. `v` must be nonzero.
#[inline(always)]
pub const fn log2_floor(v: u64, w: u32) -> u32 {
    w - 1 - clz(v, w)
}

/// A mask with the low `h + 1` bits set, `0 <= h < w`.
#[inline(always)]
pub const fn bitmask(h: u32, w: u32) -> u64 {
    debug_assert!(h < w);
    if h + 1 >= 64 {
        u64::MAX
    } else {
        (1u64 << (h + 1)) - 1
    }
}

/// The PUL-zero sentinel value: the smallest unsigned codeword, `1`, not
/// the literal minimum representable unsigned integer `0`. Named
/// `unsigned_min` to match the bit-primitive it is derived from.
#[inline(always)]
pub const fn unsigned_min(_w: u32) -> u64 {
    1
}

/// `2^w - 1`, the largest unsigned value representable in `w` bits.
#[inline(always)]
pub const fn unsigned_max(w: u32) -> u64 {
    bitmask(w - 1, w)
}

/// `-2^(w-1)`, the smallest signed value representable in `w` bits. This
/// is also the SLOG-zero (log-zero) sentinel for width `w`.
#[inline(always)]
pub const fn signed_min(w: u32) -> i64 {
    -(1i64 << (w - 1))
}

/// `2^(w-1) - 1`, the largest signed value representable in `w` bits.
#[inline(always)]
pub const fn signed_max(w: u32) -> i64 {
    (1i64 << (w - 1)) - 1
}

/// Max-precision mantissa budget for a PUL codeword of width `l` encoding
/// integers of source width `h`.
#[inline(always)]
pub const fn pul_max_mantissa(h: u32, l: u32) -> u32 {
    l - fls((h - 1) as u64, 64)
}

/// Max-precision mantissa budget for a SLOG codeword of width `l`
/// encoding integers of source width `h`.
#[inline(always)]
pub const fn slog_max_mantissa(h: u32, l: u32) -> u32 {
    l - 1 - fls((h - 1) as u64, 64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clz_matches_known_values() {
        assert_eq!(clz(1, 8), 7);
        assert_eq!(clz(0xff, 8), 0);
        assert_eq!(clz(1, 64), 63);
        assert_eq!(clz(1u64 << 32, 64), 31);
    }

    #[test]
    fn fls_of_zero_is_zero() {
        assert_eq!(fls(0, 32), 0);
        assert_eq!(fls(1, 32), 1);
        assert_eq!(fls(0xffff_ffff, 32), 32);
    }

    #[test]
    fn log2_floor_is_msb_index() {
        assert_eq!(log2_floor(1, 8), 0);
        assert_eq!(log2_floor(2, 8), 1);
        assert_eq!(log2_floor(0xff, 8), 7);
    }

    #[test]
    fn bitmask_covers_low_bits() {
        assert_eq!(bitmask(0, 8), 0b1);
        assert_eq!(bitmask(3, 8), 0b1111);
        assert_eq!(bitmask(7, 8), 0xff);
        assert_eq!(bitmask(63, 64), u64::MAX);
    }

    #[test]
    fn extrema_match_known_values() {
        assert_eq!(unsigned_min(16), 1);
        assert_eq!(unsigned_max(8), 255);
        assert_eq!(unsigned_max(16), 65535);
        assert_eq!(signed_min(8), -128);
        assert_eq!(signed_max(8), 127);
        assert_eq!(signed_min(16), -32768);
    }

    #[test]
    fn mantissa_defaults_match_invariant_i1() {
        // H=64, L=32: fls(63) = 6, so PUL M = 32-6 = 26, SLOG M = 31-6 = 25.
        assert_eq!(pul_max_mantissa(64, 32), 26);
        assert_eq!(slog_max_mantissa(64, 32), 25);
    }
}
