// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint order for generated pie chart marks.
//!
//! Renderers should sort by `z_index`, then by generation order, for a deterministic result.

/// The drop shadow under the pie.
pub const SHADOW: i32 = -10;
/// Pie slices.
pub const SLICES: i32 = 0;
/// Percentage labels drawn over the slices.
pub const PERCENT_LABELS: i32 = 40;
/// The pointer sits above everything that rotates.
pub const POINTER: i32 = 60;
