// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and shadow marks.
//!
//! Neither rotates with the pie.

use kurbo::{Circle, Ellipse, Line};
use peniko::Brush;

/// The selection pointer: a line from the label column to a dot at its tip.
#[derive(Clone, Debug)]
pub struct PointerMark {
    /// Line from the label column edge to the tip.
    pub line: Line,
    /// Dot at the tip.
    pub tip: Circle,
    /// Paint for both the line and the dot.
    pub paint: Brush,
    /// Line width.
    pub stroke_width: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

/// A soft shadow under the pie.
#[derive(Clone, Debug)]
pub struct ShadowMark {
    /// Shadow shape.
    pub ellipse: Ellipse,
    /// Fill paint.
    pub fill: Brush,
    /// Suggested blur radius for renderers that support it.
    pub blur_radius: f64,
    /// Rendering order hint.
    pub z_index: i32,
}
