// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of [`PieMarks`] for `rondel_demo`.

use std::fmt::Write as _;

use kurbo::Size;
use peniko::{Brush, Color};
use rondel_marks::PieMarks;

/// Renders one frame. Gradients fall back to each slice's base color.
pub(crate) fn to_svg_string(marks: &PieMarks, view: Size) -> String {
    let mut elements: Vec<(i32, String)> = Vec::new();

    let shadow = &marks.shadow;
    let center = shadow.ellipse.center();
    let radii = shadow.ellipse.radii();
    let mut out = format!(
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" filter="url(#shadow-blur)""#,
        center.x, center.y, radii.x, radii.y
    );
    push_paint(&mut out, "fill", &shadow.fill, None);
    out.push_str("/>\n");
    elements.push((shadow.z_index, out));

    for slice in &marks.slices {
        let mut out = format!(r#"<path d="{}""#, slice.path.to_svg());
        push_paint(&mut out, "fill", &slice.fill, Some(slice.color));
        out.push_str("/>\n");
        elements.push((slice.z_index, out));
    }

    for label in &marks.labels {
        let mut out = format!(
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle""#,
            label.pos.x, label.pos.y, label.font_size
        );
        if label.angle != 0.0 {
            out.push_str(&format!(
                r#" transform="rotate({} {} {})""#,
                label.angle, label.pos.x, label.pos.y
            ));
        }
        push_paint(&mut out, "fill", &label.fill, None);
        out.push('>');
        out.push_str(&escape_xml(&label.text));
        out.push_str("</text>\n");
        elements.push((label.z_index, out));
    }

    let pointer = &marks.pointer;
    let mut out = format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}""#,
        pointer.line.p0.x,
        pointer.line.p0.y,
        pointer.line.p1.x,
        pointer.line.p1.y,
        pointer.stroke_width
    );
    push_paint(&mut out, "stroke", &pointer.paint, None);
    out.push_str("/>\n");
    out.push_str(&format!(
        r#"<circle cx="{}" cy="{}" r="{}""#,
        pointer.tip.center.x, pointer.tip.center.y, pointer.tip.radius
    ));
    push_paint(&mut out, "fill", &pointer.paint, None);
    out.push_str("/>\n");
    elements.push((pointer.z_index, out));

    // Stable sort keeps generation order within a layer.
    elements.sort_by_key(|(z, _)| *z);

    let mut svg = String::new();
    svg.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    svg.push_str(&format!(
        r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = view.width,
        h = view.height,
    ));
    svg.push('\n');
    svg.push_str(&format!(
        "<defs><filter id=\"shadow-blur\"><feGaussianBlur stdDeviation=\"{}\"/></filter></defs>\n",
        shadow.blur_radius / 2.0
    ));
    for (_, element) in elements {
        svg.push_str(&element);
    }
    svg.push_str("</svg>\n");
    svg
}

/// The flat color an SVG attribute can carry for `brush`.
fn paint_color(brush: &Brush, fallback: Option<Color>) -> Option<Color> {
    if let Brush::Solid(color) = brush {
        Some(*color)
    } else {
        fallback
    }
}

fn push_paint(out: &mut String, name: &str, brush: &Brush, fallback: Option<Color>) {
    out.push_str(&paint_attr(name, paint_color(brush, fallback)));
}

fn paint_attr(name: &str, color: Option<Color>) -> String {
    let Some(color) = color else {
        return format!(r#" {name}="none""#);
    };
    let rgba = color.to_rgba8();
    let mut attr = String::new();
    // Writing into a String cannot fail.
    let _ = write!(attr, r##" {name}="#{:02x}{:02x}{:02x}""##, rgba.r, rgba.g, rgba.b);
    if rgba.a < u8::MAX {
        let _ = write!(attr, r#" {name}-opacity="{:.3}""#, f64::from(rgba.a) / 255.0);
    }
    attr
}

fn entity(c: char) -> Option<&'static str> {
    Some(match c {
        '&' => "&amp;",
        '<' => "&lt;",
        '>' => "&gt;",
        '"' => "&quot;",
        '\'' => "&apos;",
        _ => return None,
    })
}

fn escape_xml(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut out, c| {
            match entity(c) {
                Some(escaped) => out.push_str(escaped),
                None => out.push(c),
            }
            out
        })
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use rondel_core::{ChartId, HeuristicTextMeasurer, PieChart, PieChartConfig};

    use super::*;

    #[test]
    fn gradients_fall_back_to_the_base_color() {
        let mut chart = PieChart::new(
            ChartId(0),
            PieChartConfig::default()
                .with_show_labels(true)
                .with_text_metrics(20.0, 40.0, 10.0),
        )
        .unwrap();
        chart.add_item("only", 1.0, css::TOMATO).unwrap();
        chart.on_geometry_changed(200.0, 120.0);

        let marks = PieMarks::build(&chart, &HeuristicTextMeasurer);
        let svg = to_svg_string(&marks, Size::new(200.0, 120.0));
        assert!(svg.contains(r##"fill="#ff6347""##));
        assert!(svg.contains(">100%</text>"));
        assert!(svg.contains("<line "));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn translucent_paint_gets_an_opacity_attribute() {
        let half = Color::from_rgba8(0x10, 0x20, 0x30, 0x80);
        assert_eq!(
            paint_attr("stroke", Some(half)),
            r##" stroke="#102030" stroke-opacity="0.502""##
        );
        assert_eq!(
            paint_attr("fill", paint_color(&Brush::Solid(css::BLACK), None)),
            r##" fill="#000000""##
        );
        assert_eq!(paint_attr("fill", None), r#" fill="none""#);
    }

    #[test]
    fn xml_is_escaped() {
        assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
    }
}
