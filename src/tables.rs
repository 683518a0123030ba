// loglite
// Copyright (c) 2026 The loglite Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The two 256-entry quadratic correction tables used by the corrected
//! SLOG codec.
//!
//! `true log2((1+m)*2^e) = e + log2(1+m)`; this library approximates
//! `log2(1+m)` with the linear `m`, and the corrected variants add back
//! `c * m * (1-m)`, a parabola that is zero at `m = 0` and `m = 1` and
//! peaks near `m = 0.5`, to shave the approximation error from ~0.086 to
//! ~0.0085 bits. Each table is indexed by the top 8 bits of the mantissa
//! field (`m` in Q8, i.e. `m_hi / 256`) and is generated entirely by
//! integer arithmetic on the canonical rationals `89/256` and `88/256`
//! at compile time, so no floating point is ever involved in deriving
//! these bit-exact constants.

const fn build_table(c_num: i64, c_den: i64) -> [i32; 256] {
    let mut table = [0i32; 256];
    let mut i: i64 = 0;
    while i < 256 {
        // c * m * (1 - m), with m = i/256, scaled back into the same Q8
        // units as the table index so it can be rescaled directly onto
        // a mantissa field of any width (see `scaled_correction`).
        let product = c_num * i * (256 - i);
        table[i as usize] = (product / (c_den * 256)) as i32;
        i += 1;
    }
    table
}

/// Encode-side correction table, derived from `c_enc = 89/256`.
pub const ENC: [i32; 256] = build_table(89, 256);

/// Decode-side correction table, derived from `c_dec = 88/256`.
pub const DEC: [i32; 256] = build_table(88, 256);

/// Extract the top 8 bits of an `m`-bit mantissa field, as used to index
/// [`ENC`]/[`DEC`]. For `m < 8` the mantissa is left-padded with zero
/// bits rather than truncated, so small mantissa budgets still produce a
/// usable (if coarser) index.
#[inline]
pub const fn top8_of_mantissa(mantissa: u64, m: u32) -> u32 {
    (if m >= 8 {
        mantissa >> (m - 8)
    } else {
        mantissa << (8 - m)
    } & 0xff) as u32
}

/// Rescale a Q8 table entry onto the resolution of an `m`-bit mantissa
/// field, so it can be added to or subtracted from a raw codeword.
#[inline]
pub const fn scaled_correction(table: &[i32; 256], m_hi: u32, m: u32) -> i64 {
    let raw = table[m_hi as usize] as i64;
    if m >= 8 {
        raw << (m - 8)
    } else {
        raw >> (8 - m)
    }
}
