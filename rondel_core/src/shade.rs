// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Highlight colors and sweep-gradient descriptors for slices.

use kurbo::Point;
use peniko::Color;
use smallvec::SmallVec;

use crate::angle::{AngleSpan, FULL_CIRCLE};
use crate::error::ConfigError;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Multiplier applied to each color channel to produce a slice highlight.
///
/// Values above `1.0` brighten, values below darken. Negative and non-finite strengths are
/// rejected.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct HighlightStrength(f64);

impl HighlightStrength {
    /// The strength used when none is configured.
    pub const DEFAULT: Self = Self(1.15);

    /// Validates a strength.
    pub fn new(strength: f64) -> Result<Self, ConfigError> {
        if strength.is_finite() && strength >= 0.0 {
            Ok(Self(strength))
        } else {
            Err(ConfigError::NegativeHighlightStrength { strength })
        }
    }

    /// Returns the raw multiplier.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for HighlightStrength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scales each RGB channel of `color` by `strength`, saturating at 255.
///
/// The result is always fully opaque.
pub fn highlight(color: Color, strength: HighlightStrength) -> Color {
    let rgba = color.to_rgba8();
    let k = strength.get();
    Color::from_rgba8(
        scale_channel(rgba.r, k),
        scale_channel(rgba.g, k),
        scale_channel(rgba.b, k),
        0xff,
    )
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "clamped to [0, 255] before cast"
)]
fn scale_channel(channel: u8, k: f64) -> u8 {
    (f64::from(channel) * k).round().clamp(0.0, 255.0) as u8
}

#[allow(clippy::cast_possible_truncation, reason = "offsets are within [0, 1]")]
fn sweep_offset(angle: i32) -> f32 {
    (f64::from(FULL_CIRCLE - angle) / f64::from(FULL_CIRCLE)).clamp(0.0, 1.0) as f32
}

/// A single gradient stop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Normalized position around the sweep, in `[0, 1]`.
    pub offset: f32,
    /// Stop color.
    pub color: Color,
}

/// Describes the sweep gradient used to shade one slice.
///
/// The gradient runs clockwise in screen space starting at the positive x axis. A slice spanning
/// logical angles `[start, end]` covers screen offsets `[(360 - end) / 360, (360 - start) / 360]`,
/// so the highlight fills the sweep before the slice and the base color fills it after.
#[derive(Clone, Debug, PartialEq)]
pub struct ShaderSpec {
    /// Gradient center in pie-local coordinates.
    pub center: Point,
    /// Ordered stops with non-decreasing offsets.
    pub stops: SmallVec<[ColorStop; 4]>,
}

impl ShaderSpec {
    /// Builds the four-stop sweep for a slice.
    pub fn sweep(center: Point, color: Color, highlight: Color, span: AngleSpan) -> Self {
        let mut stops = SmallVec::new();
        stops.push(ColorStop {
            offset: 0.0,
            color: highlight,
        });
        stops.push(ColorStop {
            offset: sweep_offset(span.end),
            color: highlight,
        });
        stops.push(ColorStop {
            offset: sweep_offset(span.start),
            color,
        });
        stops.push(ColorStop { offset: 1.0, color });
        Self { center, stops }
    }

    /// Returns `true` when stop offsets never decrease.
    pub fn is_monotonic(&self) -> bool {
        self.stops.windows(2).all(|w| w[0].offset <= w[1].offset)
    }
}
