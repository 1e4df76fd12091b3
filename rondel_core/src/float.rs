// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::round` is not available in `core`, so we dispatch to `libm` when `std` is off.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn round(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn round(self) -> Self {
        libm::round(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("rondel_core requires either the `std` or `libm` feature");
