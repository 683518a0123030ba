// loglite
// Copyright (c) 2026 The loglite Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PUL: a dense, unsigned, pseudo-logarithmic codeword for storage.
//!
//! `Pul<T>` is a newtype wrapping a raw `T`-bit codeword so that a
//! caller cannot accidentally perform linear arithmetic on a log-domain
//! value without going through [`crate::transcode`] or a decode call —
//! the sentinel discipline a log-domain codeword needs, the same
//! role `symphonia-core`'s `u24`/`i24` newtypes play for odd-width
//! samples.

use crate::bits;
use crate::word::UWord;

/// A PUL codeword of width `T::BITS`.
///
/// The all-ones-minus-one codeword `1` (not `0`) is the PUL-zero
/// sentinel; codeword `0` decodes to the integer `1`. See
/// [`Pul::is_zero`] and [`Pul::zero`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct Pul<T>(pub T);

impl<T: UWord> Pul<T> {
    /// The PUL-zero sentinel for this width: codeword `1`.
    #[inline]
    pub fn zero() -> Self {
        Pul(T::from_u64(bits::unsigned_min(T::BITS)))
    }

    /// True if this codeword is the PUL-zero sentinel.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.to_u64() == bits::unsigned_min(T::BITS)
    }

    /// The raw codeword.
    #[inline]
    pub fn raw(self) -> T {
        self.0
    }
}

#[cfg(feature = "std")]
impl<T: UWord> core::fmt::Display for Pul<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_zero() {
            write!(f, "Pul(zero)")
        } else {
            write!(f, "Pul(0x{:x})", self.0.to_u64())
        }
    }
}

/// The max-precision mantissa budget for encoding a
/// `S`-bit source integer into a `T`-bit PUL codeword.
#[inline]
pub fn max_precision_mantissa<S: UWord, T: UWord>() -> u32 {
    bits::pul_max_mantissa(S::BITS, T::BITS)
}

/// Encode an `S`-bit unsigned integer `v` into a PUL codeword of width
/// `T::BITS` with an `m`-bit mantissa.
///
/// `m` should be in `[1, max_precision_mantissa::<S, T>()]`; values
/// outside that range are a caller precondition violation.
pub fn encode<S: UWord, T: UWord>(v: S, m: u32) -> Pul<T> {
    let h = S::BITS;
    let v64 = v.to_u64();

    if v64 <= 1 {
        // 0 -> 1, 1 -> 0: PUL's sentinel remapping.
        return Pul(T::from_u64((!v64) & 1));
    }

    let c = bits::clz(v64, h);
    let e = h - 2 - c;
    let mantissa = (v64 << c) >> (h - 1 - m);
    let codeword = (u64::from(e) << m) + mantissa;

    Pul(T::from_u64(codeword))
}

/// Decode a PUL codeword of width `T::BITS` with an `m`-bit mantissa
/// back to a `D`-bit unsigned integer.
///
/// Saturates to `D::MAX` if the codeword's implied exponent is `>= D`
/// bits.
pub fn decode<T: UWord, D: UWord>(p: Pul<T>, m: u32) -> D {
    let l = T::BITS;
    let h = D::BITS;
    let codeword = p.0.to_u64();

    if codeword == bits::unsigned_min(l) {
        return D::from_u64(0);
    }

    let e = codeword >> m;
    if e >= u64::from(h) {
        return D::from_u64(bits::unsigned_max(h));
    }

    // Past the saturation check above, e < h, so the shift below only
    // underflows if the destination width h is <= the mantissa width m.
    debug_assert!(h > m, "destination width {h} too narrow for mantissa width {m}");

    let mantissa = codeword & bits::bitmask(m - 1, l);
    let norm = (1u64 << (h - 1)) | (mantissa << (h - 1 - m));
    D::from_u64(norm >> (h - 1 - e as u32))
}
