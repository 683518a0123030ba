// loglite
// Copyright (c) 2026 The loglite Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `loglite` is a numeric primitives library for FPU-free environments:
//! embedded firmware, OS kernels, bare-metal code. It builds three
//! interconvertible encodings on integer operations alone:
//!
//! - linear fixed-point (Q-format) integers,
//! - **PUL**, a dense unsigned pseudo-logarithmic codeword for storage,
//! - **SLOG**, a signed pseudo-logarithmic codeword for arithmetic, where
//!   addition and subtraction of codewords correspond to multiplication
//!   and division of the underlying linear values.
//!
//! Every operation here is a pure, synchronous function on `Copy` integer
//! values: no allocation, no I/O, no shared mutable state. The crate is
//! `#![no_std]` by default; enabling the `std` feature adds
//! `Display` impls for [`Pul`]/[`Slog`] but changes no codec semantics.

#![no_std]
#![forbid(unsafe_code)]

pub mod bits;
pub mod ewma;
pub mod fixed;
pub mod pul;
pub mod radix;
pub mod slog;
mod tables;
pub mod transcode;
pub mod word;

pub use pul::Pul;
pub use slog::Slog;
pub use word::{SWord, UWord};
