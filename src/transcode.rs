// loglite
// Copyright (c) 2026 The loglite Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cross-format transcoders: reinterpret a codeword at a
//! different width and/or mantissa budget without a full decode/encode
//! round trip through linear integers. Every transcoder here is a single
//! shift realigning the mantissa field; sentinels are preserved
//! explicitly rather than falling out of the shift arithmetic.

use crate::pul::Pul;
use crate::slog::Slog;
use crate::word::{SWord, UWord};

/// Re-align a raw codeword whose mantissa field is shrinking or growing
/// from `m_in` bits to `m_out` bits.
#[inline]
fn realign(codeword: i64, m_in: u32, m_out: u32) -> i64 {
    if m_out >= m_in {
        codeword << (m_out - m_in)
    } else {
        codeword >> (m_in - m_out)
    }
}

/// Re-encode a PUL codeword of width `T::BITS` and mantissa `m_in` as a
/// PUL codeword of width `U::BITS` and mantissa `m_out`, preserving the
/// PUL-zero sentinel.
pub fn pul_to_pul<T: UWord, U: UWord>(p: Pul<T>, m_in: u32, m_out: u32) -> Pul<U> {
    if p.is_zero() {
        return Pul::zero();
    }
    let shifted = realign(p.raw().to_u64() as i64, m_in, m_out);
    Pul(U::from_u64(shifted as u64))
}

/// Re-encode a SLOG codeword of width `T::BITS` and mantissa `m_in` as a
/// SLOG codeword of width `U::BITS` and mantissa `m_out`, preserving the
/// SLOG-zero sentinel and sign.
pub fn slog_to_slog<T: SWord, U: SWord>(s: Slog<T>, m_in: u32, m_out: u32) -> Slog<U> {
    if s.is_zero() {
        return Slog::zero();
    }
    let shifted = realign(s.raw().to_i64(), m_in, m_out);
    Slog(U::from_i64(shifted))
}

/// Re-encode a PUL codeword as a SLOG codeword, realigning the mantissa
/// and remapping the PUL-zero sentinel to the SLOG-zero sentinel.
/// PUL has no sign, so the result is always non-negative.
pub fn pul_to_slog<T: UWord, U: SWord>(p: Pul<T>, m_in: u32, m_out: u32) -> Slog<U> {
    if p.is_zero() {
        return Slog::zero();
    }
    let shifted = realign(p.raw().to_u64() as i64, m_in, m_out);
    Slog(U::from_i64(shifted))
}

/// Re-encode a SLOG codeword as a PUL codeword, realigning the mantissa
/// and remapping the SLOG-zero sentinel to the PUL-zero sentinel.
///
/// PUL is unsigned: a negative SLOG value (a value `< 1`) has no PUL
/// representation at full precision, so it maps to the PUL-zero
/// sentinel rather than wrapping or panicking.
pub fn slog_to_pul<T: SWord, U: UWord>(s: Slog<T>, m_in: u32, m_out: u32) -> Pul<U> {
    if s.is_zero() || s.is_negative() {
        return Pul::zero();
    }
    let shifted = realign(s.raw().to_i64(), m_in, m_out);
    Pul(U::from_u64(shifted as u64))
}
