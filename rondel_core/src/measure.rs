// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for label layout.
//!
//! Shaping stays downstream; layout only needs rough extents for the label column and the
//! percentage labels.

/// A minimal text measurement interface.
///
/// Callers can plug in a shaping-backed measurer, or use [`HeuristicTextMeasurer`].
pub trait TextMeasurer {
    /// Returns `(width, height)` in the chart's coordinate system.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// Assumes an average glyph width of ~0.6em and a line height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let glyphs = text.chars().count();
        #[allow(clippy::cast_precision_loss, reason = "label lengths are small")]
        let width = 0.6 * font_size * glyphs as f64;
        (width, font_size)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        (**self).measure(text, font_size)
    }
}
