// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable geometry for `rondel_core` pie charts.
//!
//! [`PieMarks::build`] snapshots a chart into plain `kurbo` shapes and `peniko` brushes:
//! - a sector path per slice, filled with a sweep gradient from the slice shader,
//! - optional percentage labels placed halfway out along each slice,
//! - the selection pointer and the shadow under the pie.
//!
//! Marks carry a `z_index` (see [`z_order`]); scheduling, diffing and text shaping are left to
//! the renderer.

#![no_std]

extern crate alloc;

mod label_mark;
mod pie_marks;
mod pointer_mark;
mod slice_mark;
pub mod z_order;

pub use label_mark::{LABEL_ANGLE, LabelMark, label_anchor, label_bounds};
pub use pie_marks::{PieMarkStyle, PieMarks};
pub use pointer_mark::{PointerMark, ShadowMark};
pub use slice_mark::{SliceMark, screen_angle, sector_path, sweep_brush};
