// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie slice (sector) marks.
//!
//! Slices are drawn as circle segments with an inner radius of zero. Logical angles run
//! counter-clockwise with y up; the view runs clockwise with y down, and the pie is turned by
//! its rotation. [`screen_angle`] does the conversion.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::{Brush, Color, Gradient};
use rondel_core::{AngleSpan, FULL_CIRCLE, ItemId, ShaderSpec};

/// One filled slice.
#[derive(Clone, Debug)]
pub struct SliceMark {
    /// The item this slice represents.
    pub item: ItemId,
    /// Position of the item in the chart.
    pub index: usize,
    /// Sector outline in view coordinates.
    pub path: BezPath,
    /// Sweep-gradient fill.
    pub fill: Brush,
    /// The item's base color, for renderers without gradient support.
    pub color: Color,
    /// Rendering order hint.
    pub z_index: i32,
}

/// Converts a logical angle in degrees to a view angle in radians for a pie turned by
/// `rotation` degrees.
pub fn screen_angle(logical: f64, rotation: i32) -> f64 {
    (f64::from(FULL_CIRCLE) - logical + f64::from(rotation)).to_radians()
}

/// Builds the sector covering `span`.
pub fn sector_path(
    center: Point,
    radius: f64,
    span: AngleSpan,
    rotation: i32,
    tolerance: f64,
) -> BezPath {
    let start = screen_angle(f64::from(span.end), rotation);
    let sweep = f64::from(span.sweep()).to_radians();
    Circle::new(center, radius)
        .segment(0.0, start, sweep)
        .path_elements(tolerance)
        .collect()
}

/// Instantiates a slice shader as a sweep gradient brush.
///
/// `origin` is the pie's top-left corner in view coordinates; shader centers are relative to it.
#[allow(
    clippy::cast_possible_truncation,
    reason = "gradient angles are stored as f32"
)]
pub fn sweep_brush(shader: &ShaderSpec, origin: Point, rotation: i32) -> Brush {
    let center = origin + shader.center.to_vec2();
    let start = f64::from(rotation).to_radians();
    let end = start + core::f64::consts::TAU;
    let stops: Vec<(f32, Color)> = shader
        .stops
        .iter()
        .map(|stop| (stop.offset, stop.color))
        .collect();
    Gradient::new_sweep(center, start as f32, end as f32)
        .with_stops(stops.as_slice())
        .into()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Rect;
    use peniko::color::palette::css;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn pointer_quadrants_map_to_view_corners() {
        // Upper-left in the logical frame is up and to the left on screen.
        let upper_left = kurbo::Vec2::from_angle(screen_angle(135.0, 0));
        assert!(upper_left.x < 0.0 && upper_left.y < 0.0);
        let lower_right = kurbo::Vec2::from_angle(screen_angle(315.0, 0));
        assert!(lower_right.x > 0.0 && lower_right.y > 0.0);
    }

    #[test]
    fn rotation_turns_the_view_clockwise() {
        assert_close(screen_angle(90.0, 90), screen_angle(0.0, 0));
    }

    #[test]
    fn quarter_slice_stays_in_its_quadrant() {
        let center = Point::new(50.0, 50.0);
        // Logical [0, 90] is the upper-right quadrant.
        let bounds = sector_path(center, 40.0, AngleSpan::new(0, 90), 0, 0.1).bounding_box();
        let quadrant = Rect::new(50.0, 10.0, 90.0, 50.0);
        assert!(bounds.width() > 0.0 && bounds.height() > 0.0);
        assert!(bounds.x0 >= quadrant.x0 - 1e-6 && bounds.x1 <= quadrant.x1 + 1e-6);
        assert!(bounds.y0 >= quadrant.y0 - 1e-6 && bounds.y1 <= quadrant.y1 + 1e-6);
    }

    #[test]
    fn sweep_brush_is_a_gradient() {
        let shader = ShaderSpec::sweep(
            Point::new(10.0, 10.0),
            css::GOLD,
            css::WHITE,
            AngleSpan::new(0, 180),
        );
        let brush = sweep_brush(&shader, Point::new(5.0, 5.0), 30);
        assert!(matches!(brush, Brush::Gradient(_)));
    }
}
