// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turns a [`PieChart`] into drawable marks.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Circle, Ellipse};
use peniko::Color;
use peniko::color::palette::css;
use rondel_core::{PieChart, TextMeasurer, percent_label};

use crate::label_mark::{LABEL_ANGLE, LabelMark, label_anchor, label_bounds};
use crate::pointer_mark::{PointerMark, ShadowMark};
use crate::slice_mark::{SliceMark, sector_path, sweep_brush};
use crate::z_order;

/// Paints and tolerances for generated marks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieMarkStyle {
    /// Percentage label color.
    pub label_color: Color,
    /// Pointer line and dot color.
    pub pointer_color: Color,
    /// Pointer line width.
    pub pointer_width: f64,
    /// Shadow fill color.
    pub shadow_color: Color,
    /// Shadow blur radius.
    pub shadow_blur: f64,
    /// Curve flattening tolerance for slice paths.
    pub tolerance: f64,
}

impl Default for PieMarkStyle {
    fn default() -> Self {
        Self {
            label_color: css::WHITE,
            pointer_color: css::BLACK,
            pointer_width: 1.0,
            shadow_color: css::GRAY,
            shadow_blur: 8.0,
            tolerance: 0.1,
        }
    }
}

impl PieMarkStyle {
    /// Sets the label color.
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    /// Sets the pointer color.
    pub fn with_pointer_color(mut self, color: Color) -> Self {
        self.pointer_color = color;
        self
    }

    /// Sets the shadow color.
    pub fn with_shadow_color(mut self, color: Color) -> Self {
        self.shadow_color = color;
        self
    }

    /// Sets the curve flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Everything needed to draw one frame of a pie chart.
#[derive(Clone, Debug)]
pub struct PieMarks {
    /// One sector per item, in item order.
    pub slices: Vec<SliceMark>,
    /// Percentage labels; empty unless labels are shown.
    pub labels: Vec<LabelMark>,
    /// The selection pointer.
    pub pointer: PointerMark,
    /// The shadow under the pie.
    pub shadow: ShadowMark,
}

impl PieMarks {
    /// Builds marks with the default style.
    pub fn build(chart: &PieChart, measurer: &dyn TextMeasurer) -> Self {
        Self::build_styled(chart, measurer, &PieMarkStyle::default())
    }

    /// Builds marks for the chart's current layout, rotation and slices.
    pub fn build_styled(
        chart: &PieChart,
        measurer: &dyn TextMeasurer,
        style: &PieMarkStyle,
    ) -> Self {
        let layout = chart.layout();
        let config = chart.config();
        let rotation = chart.pie_rotation();
        let center = layout.center();
        let radius = layout.radius();

        let mut slices = Vec::with_capacity(chart.items().len());
        let mut labels = Vec::new();
        for (index, (item, slice)) in chart.slices().enumerate() {
            slices.push(SliceMark {
                item: item.id,
                index,
                path: sector_path(center, radius, slice.span, rotation, style.tolerance),
                fill: sweep_brush(&slice.shader, layout.pie.origin(), rotation),
                color: item.color,
                z_index: z_order::SLICES,
            });

            if !config.show_labels {
                continue;
            }
            let text = percent_label(slice.span);
            if text.is_empty() {
                continue;
            }
            let pos = label_anchor(center, radius, slice.span, rotation);
            labels.push(LabelMark {
                item: item.id,
                pos,
                bounds: label_bounds(measurer, pos, &text, config.label_font_size),
                text,
                font_size: config.label_font_size,
                angle: LABEL_ANGLE,
                fill: style.label_color.into(),
                z_index: z_order::PERCENT_LABELS,
            });
        }

        let pointer = PointerMark {
            line: layout.pointer,
            tip: Circle::new(layout.pointer.p1, config.pointer_radius),
            paint: style.pointer_color.into(),
            stroke_width: style.pointer_width,
            z_index: z_order::POINTER,
        };
        let shadow = ShadowMark {
            ellipse: Ellipse::from_rect(layout.shadow),
            fill: style.shadow_color.into(),
            blur_radius: style.shadow_blur,
            z_index: z_order::SHADOW,
        };

        Self {
            slices,
            labels,
            pointer,
            shadow,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::Shape;
    use rondel_core::{ChartId, HeuristicTextMeasurer, PieChartConfig};

    use super::*;

    fn chart(config: PieChartConfig) -> PieChart {
        let mut chart = PieChart::new(ChartId(3), config).unwrap();
        chart.add_item("A", 25.0, css::RED).unwrap();
        chart.add_item("B", 25.0, css::BLUE).unwrap();
        chart.add_item("C", 50.0, css::GREEN).unwrap();
        chart.on_geometry_changed(300.0, 200.0);
        chart
    }

    fn labeled() -> PieChartConfig {
        PieChartConfig::default()
            .with_show_labels(true)
            .with_text_metrics(40.0, 80.0, 20.0)
            .with_pointer_radius(4.0)
    }

    #[test]
    fn one_sector_per_slice_inside_the_pie() {
        let chart = chart(labeled());
        let marks = PieMarks::build(&chart, &HeuristicTextMeasurer);
        let pie = chart.layout().pie.inflate(1e-6, 1e-6);

        assert_eq!(marks.slices.len(), 3);
        for (index, slice) in marks.slices.iter().enumerate() {
            let bounds = slice.path.bounding_box();
            assert_eq!(slice.index, index);
            assert!(bounds.width() > 0.0 && bounds.height() > 0.0);
            assert!(
                pie.x0 <= bounds.x0
                    && bounds.x1 <= pie.x1
                    && pie.y0 <= bounds.y0
                    && bounds.y1 <= pie.y1,
                "{bounds:?} escapes {pie:?}"
            );
            assert_eq!(slice.z_index, z_order::SLICES);
        }
        assert_eq!(marks.slices[2].color, css::GREEN);
    }

    #[test]
    fn labels_follow_the_show_labels_flag() {
        let shown = PieMarks::build(&chart(labeled()), &HeuristicTextMeasurer);
        let texts: Vec<_> = shown.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["25%", "25%", "50%"]);
        assert!(shown.labels.iter().all(|l| l.angle == LABEL_ANGLE));

        let hidden = PieMarks::build(
            &chart(labeled().with_show_labels(false)),
            &HeuristicTextMeasurer,
        );
        assert!(hidden.labels.is_empty());
        assert_eq!(hidden.slices.len(), 3);
    }

    #[test]
    fn pointer_and_shadow_come_from_the_layout() {
        let chart = chart(labeled());
        let marks = PieMarks::build(&chart, &HeuristicTextMeasurer);
        assert_eq!(marks.pointer.line, chart.layout().pointer);
        assert_eq!(marks.pointer.tip.radius, 4.0);
        assert_eq!(marks.pointer.tip.center, chart.layout().pointer.p1);
        let shadow = marks.shadow.ellipse.bounding_box();
        let expected = chart.layout().shadow;
        assert!((shadow.x0 - expected.x0).abs() < 1e-9);
        assert!((shadow.y1 - expected.y1).abs() < 1e-9);
        assert!(marks.shadow.z_index < marks.slices[0].z_index);
    }

    #[test]
    fn empty_chart_still_has_a_pointer() {
        let mut chart = chart(labeled());
        chart.reset();
        let marks = PieMarks::build(&chart, &HeuristicTextMeasurer);
        assert!(marks.slices.is_empty());
        assert!(marks.labels.is_empty());
        assert_eq!(marks.pointer.z_index, z_order::POINTER);
    }
}
