// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Percentage label marks.

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Rect, Size, Vec2};
use peniko::Brush;
use rondel_core::{AngleSpan, ItemId, TextMeasurer};

use crate::slice_mark::screen_angle;

/// Labels are turned a quarter turn clockwise about their anchor.
pub const LABEL_ANGLE: f64 = 90.0;

/// A percentage label drawn inside its slice.
#[derive(Clone, Debug)]
pub struct LabelMark {
    /// The item this label belongs to.
    pub item: ItemId,
    /// Text center in view coordinates.
    pub pos: Point,
    /// Label text (unshaped).
    pub text: String,
    /// Font size.
    pub font_size: f64,
    /// Rotation about `pos`, in degrees.
    pub angle: f64,
    /// Estimated extent of the rotated text.
    pub bounds: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

/// Halfway out along the slice's bisector.
pub fn label_anchor(center: Point, radius: f64, span: AngleSpan, rotation: i32) -> Point {
    let mid = (f64::from(span.start) + f64::from(span.end)) / 2.0;
    center + Vec2::from_angle(screen_angle(mid, rotation)) * (radius / 2.0)
}

/// Bounds of `text` centered on `pos` after the quarter-turn rotation.
pub fn label_bounds(
    measurer: &dyn TextMeasurer,
    pos: Point,
    text: &str,
    font_size: f64,
) -> Rect {
    let (width, height) = measurer.measure(text, font_size);
    Rect::from_center_size(pos, Size::new(height, width))
}
