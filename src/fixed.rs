// loglite
// Copyright (c) 2026 The loglite Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Linear fixed-point (Q-format) conversions: plain integer <-> fixed
//! point with `f` fractional bits. Widening shifts left; narrowing
//! shifts right and truncates the fractional tail (never rounds).

use crate::word::{SWord, UWord};

/// Widen an unsigned integer to an unsigned `T`-bit fixed-point value
/// with `f` fractional bits: `v << f`.
#[inline]
pub fn to_fp<T: UWord>(v: u64, f: u32) -> T {
    T::from_u64(v << f)
}

/// Narrow an unsigned `f`-fractional-bit fixed-point value to a plain
/// unsigned `T`-bit integer, truncating the fractional tail: `x >> f`.
#[inline]
pub fn from_fp<T: UWord>(x: u64, f: u32) -> T {
    T::from_u64(x >> f)
}

/// As [`from_fp`], but rounds to nearest instead of truncating, by
/// adding the documented rounding bias `1 << (f - 1)` before narrowing.
/// Only meaningful for `f > 0`.
#[inline]
pub fn from_fp_rounded<T: UWord>(x: u64, f: u32) -> T {
    debug_assert!(f > 0);
    T::from_u64((x + (1 << (f - 1))) >> f)
}

/// Widen a signed integer to a signed `T`-bit fixed-point value with `f`
/// fractional bits: `v << f`.
#[inline]
pub fn to_fp_signed<T: SWord>(v: i64, f: u32) -> T {
    T::from_i64(v << f)
}

/// Narrow a signed `f`-fractional-bit fixed-point value to a plain
/// signed `T`-bit integer, truncating the fractional tail with an
/// arithmetic shift: `x >> f`.
#[inline]
pub fn from_fp_signed<T: SWord>(x: i64, f: u32) -> T {
    T::from_i64(x >> f)
}

/// As [`from_fp_signed`], but rounds to nearest instead of truncating.
/// Only meaningful for `f > 0`.
#[inline]
pub fn from_fp_signed_rounded<T: SWord>(x: i64, f: u32) -> T {
    debug_assert!(f > 0);
    T::from_i64((x + (1 << (f - 1))) >> f)
}
