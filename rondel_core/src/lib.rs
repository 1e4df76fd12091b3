// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry and state for an interactive, rotatable pie chart.
//!
//! This crate is the headless half of a pie chart widget:
//! - **Items** are labeled positive magnitudes with a base color.
//! - **Angles** are allocated per item as whole-degree spans that partition the circle.
//! - **Shading** derives a highlight color and a sweep-gradient descriptor per slice.
//! - **Selection** tracks which slice sits under a fixed pointer as the pie rotates, and can
//!   ask the embedder to rotate a slice into the center of the pointer.
//!
//! Rendering, input handling and animation are out of scope. [`PieChart`] talks to whatever
//! embeds it through the [`ChartHost`] trait, and `rondel_marks` turns a chart into drawable
//! primitives.
//!
//! ## Angle conventions
//!
//! Logical angles are whole degrees, counter-clockwise from the positive x axis. The first item
//! is allocated immediately below 360 and later items follow toward 0. The pie rotation is a
//! clockwise offset in `[0, 360)`.
//!
//! ## Features
//!
//! - `std`: use the standard library for float math.
//! - `libm` (default): use `libm` for float math in `no_std` builds.
//! - `tracing`: emit `tracing` events for allocation, selection and layout.

#![no_std]

extern crate alloc;

mod angle;
mod chart;
mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod host;
mod item;
mod label;
mod layout;
mod log;
mod measure;
mod selection;
mod shade;

pub use angle::{
    AngleSpan, FULL_CIRCLE, allocate, centering_target, normalize_degrees, pointer_angle,
    slice_at_angle,
};
pub use chart::{ChartId, PieChart, Slice};
pub use config::{LabelPosition, PieChartConfig};
pub use error::{ChartError, ConfigError};
pub use host::ChartHost;
pub use item::{Item, ItemId};
pub use label::percent_label;
pub use layout::{PieLayout, measure, suggested_minimum};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use selection::{CurrentItemChanged, ListenerId, SelectionCause};
pub use shade::{ColorStop, HighlightStrength, ShaderSpec, highlight};
