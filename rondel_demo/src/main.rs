// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie chart demo for `rondel_core`.
//!
//! Drives a chart the way a form-plus-chart screen would (add items, pick one, let the pie
//! settle, reset) and writes an SVG per step into the directory given as the first argument
//! (default `rondel_frames`).

mod svg;

use std::cell::RefCell;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use kurbo::Size;
use peniko::Color;
use peniko::color::palette::css;
use rondel_core::{
    ChartHost, ChartId, HeuristicTextMeasurer, LabelPosition, PieChart, PieChartConfig,
};
use rondel_marks::PieMarks;
use tracing::info;

const VIEW: Size = Size::new(360.0, 240.0);
/// Degrees per animation frame when settling the pie.
const ROTATION_STEP: i32 = 15;

/// Collects rotation requests so they can be played back once the chart call returns.
#[derive(Clone, Debug, Default)]
struct DemoHost {
    targets: Rc<RefCell<Vec<i32>>>,
    redraws: Rc<RefCell<usize>>,
}

impl ChartHost for DemoHost {
    fn request_redraw(&mut self) {
        *self.redraws.borrow_mut() += 1;
    }

    fn animate_rotation_to(&mut self, target_degrees: i32) {
        self.targets.borrow_mut().push(target_degrees);
    }
}

struct Frames {
    dir: PathBuf,
    next: usize,
}

impl Frames {
    fn write(&mut self, name: &str, chart: &PieChart) -> std::io::Result<()> {
        let marks = PieMarks::build(chart, &HeuristicTextMeasurer);
        let path = frame_path(&self.dir, self.next, name);
        self.next += 1;
        std::fs::write(&path, svg::to_svg_string(&marks, chart.layout().view))?;
        info!(path = %path.display(), "wrote frame");
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("rondel_frames"), PathBuf::from);
    std::fs::create_dir_all(&dir)?;
    let mut frames = Frames { dir, next: 0 };

    preview(&mut frames)?;
    budget(&mut frames)?;
    info!(dir = %frames.dir.display(), count = frames.next, "done");
    Ok(())
}

/// The three-slice chart shown in a layout preview.
fn preview(frames: &mut Frames) -> Result<(), Box<dyn Error>> {
    let mut chart = PieChart::new(ChartId(0), PieChartConfig::default())?;
    chart.on_geometry_changed(VIEW.width, VIEW.height);
    chart.add_item("test", 14.0, Color::from_rgb8(0xff, 0x98, 0x00))?;
    chart.add_item("test", 14.0, Color::from_rgb8(0x21, 0x96, 0xf3))?;
    chart.add_item("test", 71.0, Color::from_rgb8(0x9c, 0x27, 0xb0))?;
    frames.write("preview", &chart)?;
    Ok(())
}

/// A user filling in a budget, then clearing it.
fn budget(frames: &mut Frames) -> Result<(), Box<dyn Error>> {
    let config = PieChartConfig::default()
        .with_show_labels(true)
        .with_text_metrics(30.0, 100.0, 0.0)
        .with_label_font_size(14.0)
        .with_label_position(LabelPosition::Right)
        .with_pointer_radius(4.0)
        .with_auto_center_in_slice(true);
    let mut chart = PieChart::new(ChartId(1), config)?;
    let host = DemoHost::default();
    chart.set_host(host.clone());
    chart.on_current_item_changed(|event| {
        info!(
            index = event.index,
            previous = ?event.previous,
            cause = ?event.cause,
            "current item changed"
        );
    });
    chart.on_geometry_changed(VIEW.width, VIEW.height);

    let entries: [(&str, f64, Color); 4] = [
        ("Rent", 1200.0, css::SLATE_BLUE),
        ("Food", 450.0, css::ORANGE),
        ("Travel", 300.0, css::TEAL),
        ("Savings", 650.0, css::GOLDENROD),
    ];
    for (label, value, color) in entries {
        let index = chart.add_item(label, value, color)?;
        settle(&mut chart, &host);
        frames.write(&format!("add_{}", label.to_lowercase()), &chart)?;
        info!(index, label, total = chart.total(), "added item");
    }

    if let Err(err) = chart.add_item("Refund", -20.0, css::RED) {
        info!(%err, "rejected item");
    }

    chart.set_current_item(1, true)?;
    settle(&mut chart, &host);
    frames.write("select_food", &chart)?;

    chart.set_pie_rotation(chart.pie_rotation() + 100);
    frames.write("dragged", &chart)?;
    chart.finish_rotation();
    settle(&mut chart, &host);
    frames.write("released", &chart)?;

    chart.reset();
    frames.write("reset", &chart)?;
    info!(redraws = *host.redraws.borrow(), "budget scenario finished");
    Ok(())
}

/// Plays back queued rotation requests a step at a time, like an animator would.
fn settle(chart: &mut PieChart, host: &DemoHost) {
    loop {
        let Some(target) = host.targets.borrow_mut().pop() else {
            break;
        };
        host.targets.borrow_mut().clear();
        let mut rotation = chart.pie_rotation();
        while rotation != target {
            let delta = (target - rotation).clamp(-ROTATION_STEP, ROTATION_STEP);
            rotation += delta;
            chart.set_pie_rotation(rotation);
        }
        // Finishing may queue another request if the pointer landed on a different slice.
        chart.finish_rotation();
    }
}

fn frame_path(dir: &Path, index: usize, name: &str) -> PathBuf {
    dir.join(format!("{index:02}_{name}.svg"))
}
