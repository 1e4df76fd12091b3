// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Percentage labels.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::angle::AngleSpan;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats the share of the circle covered by `span` as a whole percentage, e.g. `"25%"`.
///
/// Zero-width slices get an empty label.
pub fn percent_label(span: AngleSpan) -> String {
    let percent = span.fraction() * 100.0;
    if percent == 0.0 {
        return String::new();
    }
    #[allow(clippy::cast_possible_truncation, reason = "percentages are within [0, 100]")]
    let whole = percent.round() as i32;
    format!("{whole}%")
}
