// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart items.

extern crate alloc;

use alloc::string::String;

use peniko::Color;

/// Stable identifier for an [`Item`].
///
/// Ids are assigned by the chart on insert and are never reused by the same chart, even across
/// [`crate::PieChart::reset`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

/// One labeled magnitude in a pie chart.
///
/// Items only carry what the caller supplied. Angles, highlight colors and shaders are derived
/// by the chart and kept in a separate [`crate::Slice`].
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Chart-assigned identity.
    pub id: ItemId,
    /// Display label (not required to be unique).
    pub label: String,
    /// Positive magnitude.
    pub value: f64,
    /// Base slice color.
    pub color: Color,
}
