// loglite
// Copyright (c) 2026 The loglite Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exponentially weighted moving average on plain signed integers.
//! Both variants step `old` toward `new` by a fraction of their
//! difference; `ewma_div` spends a division to guarantee the step is at
//! least 1 whenever `new != old`, `ewma_shr` spends only a shift and
//! loses that guarantee for small differences.

use crate::word::SWord;

/// Step `old` toward `new` by `ceil(|new - old| / d)`, clamping both
/// inputs to `>= floor` first.
///
/// `d <= 1` returns `new` unchanged (no damping). Guarantees the result
/// differs from `old` by at least 1 whenever `new != old` (P7).
pub fn ewma_div<T: SWord>(new: T, old: T, floor: T, d: i64) -> T {
    if d <= 1 {
        return new;
    }

    let floor = floor.to_i64();
    let new = new.to_i64().max(floor);
    let old = old.to_i64().max(floor);

    if new == old {
        return T::from_i64(old);
    }

    let abs_diff = (new - old).abs();
    let adj = (abs_diff + d - 1) / d; // ceil(abs_diff / d), adj >= 1

    T::from_i64(if new > old { old + adj } else { old - adj })
}

/// As [`ewma_div`], but steps by `|new - old| >> s` instead of a ceiling
/// division. Cheaper, but the step can be 0 when `abs_diff < 2^s`, so
/// `old` may never reach `new`.
pub fn ewma_shr<T: SWord>(new: T, old: T, floor: T, s: u32) -> T {
    let floor = floor.to_i64();
    let new = new.to_i64().max(floor);
    let old = old.to_i64().max(floor);

    if new == old {
        return T::from_i64(old);
    }

    let abs_diff = (new - old).abs();
    let adj = abs_diff >> s;

    T::from_i64(if new > old { old + adj } else { old - adj })
}
