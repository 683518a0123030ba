// loglite
// Copyright (c) 2026 The loglite Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Affine radix rescale: multiply a SLOG-domain magnitude by a
//! fixed-point constant and shift, to convert between two logarithmic
//! bases (or, for `RATIO_1_25`, to bias a value by a fixed ratio in the
//! log domain). Restricted to widths up to 32 bits so the intermediate
//! product always fits in `u64`.

use crate::word::SWord;

/// Which pair of rescale constants to apply.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RadixTag {
    /// Converts between natural-log and base-2-log SLOG domains. The
    /// `to`/`from` constants are exact inverses (round-trip within ±1
    /// ULP, P8).
    DbPower,
    /// Biases a SLOG value by a fixed ratio of 1.25 in the log domain.
    /// `to`/`from` are **not** exact inverses; this is documented
    /// upstream behavior, not a bug (see the crate's design notes).
    Ratio1_25,
}

struct Constants {
    to: u64,
    to_shr: u32,
    from: u64,
    from_shr: u32,
}

impl RadixTag {
    const fn constants(self) -> Constants {
        match self {
            RadixTag::DbPower => Constants {
                to: 0xC0A8C129,
                to_shr: 30,
                from: 0x550A9686,
                from_shr: 32,
            },
            RadixTag::Ratio1_25 => Constants {
                to: 0xC6CD5A3B,
                to_shr: 30,
                from: 0x5269E11A,
                from_shr: 32,
            },
        }
    }
}

fn rescale<T: SWord>(v: T, constant: u64, shr: u32) -> T {
    let raw = v.to_i64();

    if raw == 0 || raw == T::MIN {
        return v;
    }

    let negative = raw < 0;
    let mag = if negative { -raw } else { raw } as u64;

    let scaled = (mag * constant) >> shr;
    let result = if negative { -(scaled as i64) } else { scaled as i64 };

    T::from_i64(result)
}

/// Rescale a SLOG value `v` into the target radix domain named by `tag`.
pub fn rescale_to<T: SWord>(v: T, tag: RadixTag) -> T {
    let c = tag.constants();
    rescale(v, c.to, c.to_shr)
}

/// Rescale a SLOG value `v` out of the radix domain named by `tag`, back
/// to the crate's native base.
pub fn rescale_from<T: SWord>(v: T, tag: RadixTag) -> T {
    let c = tag.constants();
    rescale(v, c.from, c.from_shr)
}
