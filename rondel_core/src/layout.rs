// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie chart layout.
//!
//! Given the view size and configuration, this places the pie square, the label column, the
//! selection pointer and the drop shadow, and picks the pointer reference angle. The reference
//! angle is the logical angle the pointer points at; it depends on which side the labels are on
//! and on whether the pointer sits above or below the pie center.

use kurbo::{Line, Point, Rect, Size, Vec2};

use crate::config::{LabelPosition, PieChartConfig};
use crate::log::debug;
use crate::measure::TextMeasurer;

/// Shadow inset from the pie's left and right edges.
const SHADOW_INSET: f64 = 10.0;
/// Shadow band thickness below the pie.
const SHADOW_DEPTH: f64 = 10.0;

/// Output of [`PieLayout::arrange`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieLayout {
    /// The view size the layout was computed for.
    pub view: Size,
    /// The square occupied by the pie, in view coordinates.
    pub pie: Rect,
    /// Logical angle under the pointer at zero rotation: one of 45, 135, 225 or 315.
    pub pointer_reference: i32,
    /// Pointer from the label column edge to its tip.
    pub pointer: Line,
    /// Label column anchor: the column edge nearest the pie, at the configured text baseline.
    pub label_anchor: Point,
    /// Which side of the pie the label column is on.
    pub label_position: LabelPosition,
    /// Effective label text height.
    pub text_height: f64,
    /// Drop shadow band under the pie.
    pub shadow: Rect,
}

impl PieLayout {
    /// Computes a layout for a view of the given size.
    pub fn arrange(size: Size, config: &PieChartConfig, measurer: &dyn TextMeasurer) -> Self {
        let padding = config.padding;
        let mut xpad = padding.x0 + padding.x1;
        let ypad = padding.y0 + padding.y1;
        if config.show_labels {
            xpad += config.text_width;
        }

        let text_height = if config.text_height > 0.0 {
            config.text_height
        } else {
            measurer.measure("Mg", config.label_font_size).1
        };

        let diameter = (size.width - xpad).min(size.height - ypad).max(0.0);
        let mut pie = Rect::new(
            padding.x0,
            padding.y0,
            padding.x0 + diameter,
            padding.y0 + diameter,
        );

        let pointer_y = config.text_y - text_height / 2.0;
        let offset = pie.center().y - pointer_y;
        let reach = if offset < 0.0 { -offset } else { offset };

        let (pointer_reference, text_x, pointer_x) = match config.label_position {
            LabelPosition::Left => {
                if config.show_labels {
                    pie = pie + Vec2::new(config.text_width, 0.0);
                }
                let reference = if offset < 0.0 { 225 } else { 135 };
                (reference, pie.x0, pie.center().x - reach)
            }
            LabelPosition::Right => {
                let reference = if offset < 0.0 { 315 } else { 45 };
                (reference, pie.x1, pie.center().x + reach)
            }
        };
        debug!(pointer_reference, diameter, offset, "arranged pie layout");

        let shadow = Rect::new(
            pie.x0 + SHADOW_INSET,
            pie.y1 + SHADOW_INSET,
            pie.x1 - SHADOW_INSET,
            pie.y1 + SHADOW_INSET + SHADOW_DEPTH,
        )
        .abs();

        Self {
            view: size,
            pie,
            pointer_reference,
            pointer: Line::new((text_x, pointer_y), (pointer_x, pointer_y)),
            label_anchor: Point::new(text_x, config.text_y),
            label_position: config.label_position,
            text_height,
            shadow,
        }
    }

    /// Center of the pie in view coordinates.
    pub fn center(&self) -> Point {
        self.pie.center()
    }

    /// Pie radius.
    pub fn radius(&self) -> f64 {
        self.pie.width().min(self.pie.height()) / 2.0
    }

    /// Center of the pie relative to its own top-left corner.
    ///
    /// Slice gradients are expressed in this frame.
    pub fn local_center(&self) -> Point {
        Point::new(self.pie.width() / 2.0, self.pie.height() / 2.0)
    }
}

/// Smallest size worth laying the chart out in: the pie should be at least as wide as its
/// label column.
pub fn suggested_minimum(config: &PieChartConfig) -> Size {
    Size::new(config.text_width * 2.0, config.text_width)
}

/// Resolves a desired view size from the space offered by a parent.
///
/// The width is at least the suggested minimum (plus padding). The height is whatever lets the
/// pie grow as large as the width allows, capped by the offered height.
pub fn measure(available: Size, config: &PieChartConfig) -> Size {
    let padding = config.padding;
    let min = suggested_minimum(config);
    let width = (min.width + padding.x0 + padding.x1).max(available.width);
    let wanted_height = width - config.text_width + padding.y0 + padding.y1;
    Size::new(width, available.height.min(wanted_height))
}

#[cfg(test)]
mod tests {
    use kurbo::Insets;

    use super::*;
    use crate::measure::HeuristicTextMeasurer;

    fn arrange(config: &PieChartConfig) -> PieLayout {
        PieLayout::arrange(Size::new(300.0, 200.0), config, &HeuristicTextMeasurer)
    }

    #[test]
    fn pie_is_the_largest_square_that_fits() {
        let layout = arrange(&PieChartConfig::default().with_padding(Insets::uniform(5.0)));
        assert_eq!(layout.pie, Rect::new(5.0, 5.0, 195.0, 195.0));
        assert_eq!(layout.radius(), 95.0);
        assert_eq!(layout.local_center(), Point::new(95.0, 95.0));
    }

    #[test]
    fn left_labels_shift_the_pie_and_pick_upper_or_lower_left() {
        let above = PieChartConfig::default()
            .with_show_labels(true)
            .with_text_metrics(40.0, 80.0, 20.0);
        let layout = arrange(&above);
        // Width left for the pie is 300 - 80 = 220, so the height limits it.
        assert_eq!(layout.pie, Rect::new(80.0, 0.0, 280.0, 200.0));
        assert_eq!(layout.pointer_reference, 135);
        assert_eq!(layout.label_anchor, Point::new(80.0, 40.0));
        // Pointer y = 40 - 10 = 30, offset from the center = 70.
        assert_eq!(layout.pointer.p0, Point::new(80.0, 30.0));
        assert_eq!(layout.pointer.p1, Point::new(110.0, 30.0));

        let below = above.with_text_metrics(190.0, 80.0, 20.0);
        let layout = arrange(&below);
        assert_eq!(layout.pointer_reference, 225);
        assert_eq!(layout.pointer.p1, Point::new(100.0, 180.0));
    }

    #[test]
    fn right_labels_pick_upper_or_lower_right() {
        let above = PieChartConfig::default()
            .with_label_position(LabelPosition::Right)
            .with_text_metrics(40.0, 0.0, 20.0);
        let layout = arrange(&above);
        assert_eq!(layout.pointer_reference, 45);
        assert_eq!(layout.label_anchor.x, layout.pie.x1);
        assert_eq!(layout.pointer.p1, Point::new(170.0, 30.0));

        let below = above.with_text_metrics(190.0, 0.0, 20.0);
        assert_eq!(arrange(&below).pointer_reference, 315);
    }

    #[test]
    fn zero_text_height_falls_back_to_the_measurer() {
        let config = PieChartConfig::default().with_label_font_size(16.0);
        assert_eq!(arrange(&config).text_height, 16.0);
    }

    #[test]
    fn shadow_sits_under_the_pie() {
        let layout = arrange(&PieChartConfig::default());
        assert_eq!(layout.shadow, Rect::new(10.0, 210.0, 190.0, 220.0));
    }

    #[test]
    fn degenerate_sizes_collapse_to_an_empty_pie() {
        let layout = PieLayout::arrange(
            Size::new(4.0, 4.0),
            &PieChartConfig::default().with_padding(Insets::uniform(10.0)),
            &HeuristicTextMeasurer,
        );
        assert_eq!(layout.pie.width(), 0.0);
        assert!(layout.shadow.x0 <= layout.shadow.x1);
    }

    #[test]
    fn measure_reserves_room_for_the_label_column() {
        let config = PieChartConfig::default().with_text_metrics(0.0, 50.0, 0.0);
        assert_eq!(suggested_minimum(&config), Size::new(100.0, 50.0));
        assert_eq!(
            measure(Size::new(40.0, 500.0), &config),
            Size::new(100.0, 50.0)
        );
        assert_eq!(
            measure(Size::new(300.0, 120.0), &config),
            Size::new(300.0, 120.0)
        );
    }
}
