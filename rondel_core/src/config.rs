// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.

use kurbo::Insets;

use crate::angle::normalize_degrees;
use crate::error::ConfigError;
use crate::shade::HighlightStrength;

/// Which side of the pie the label column (and pointer) sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelPosition {
    /// Labels to the left of the pie.
    #[default]
    Left,
    /// Labels to the right of the pie.
    Right,
}

impl LabelPosition {
    /// Parses the integer encoding used by widget attributes (`0` = left, `1` = right).
    pub fn from_raw(raw: i32) -> Result<Self, ConfigError> {
        match raw {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            _ => Err(ConfigError::InvalidLabelPosition { raw }),
        }
    }

    /// The integer encoding of this position.
    pub const fn to_raw(self) -> i32 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Pie chart configuration.
///
/// Defaults match a chart with labels hidden and a mild highlight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieChartConfig {
    /// Whether the label column and percentage labels are shown.
    pub show_labels: bool,
    /// Channel multiplier used to derive slice highlight colors.
    pub highlight_strength: HighlightStrength,
    /// Radius of the dot drawn at the pointer tip.
    pub pointer_radius: f64,
    /// Side of the pie that hosts the label column.
    pub label_position: LabelPosition,
    /// Y position of the label text baseline.
    pub text_y: f64,
    /// Width reserved for the label column.
    pub text_width: f64,
    /// Label text height; `0` means "ask the text measurer".
    pub text_height: f64,
    /// Font size for labels.
    pub label_font_size: f64,
    /// Padding around the chart content.
    pub padding: Insets,
    /// Re-center the current slice under the pointer after every recompute.
    pub auto_center_in_slice: bool,
    /// Initial pie rotation in degrees.
    pub pie_rotation: i32,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            show_labels: false,
            highlight_strength: HighlightStrength::DEFAULT,
            pointer_radius: 2.0,
            label_position: LabelPosition::Left,
            text_y: 0.0,
            text_width: 0.0,
            text_height: 0.0,
            label_font_size: 12.0,
            padding: Insets::ZERO,
            auto_center_in_slice: false,
            pie_rotation: 0,
        }
    }
}

impl PieChartConfig {
    /// Sets label visibility.
    pub fn with_show_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    /// Sets the highlight strength.
    pub fn with_highlight_strength(mut self, strength: HighlightStrength) -> Self {
        self.highlight_strength = strength;
        self
    }

    /// Sets the pointer tip radius.
    pub fn with_pointer_radius(mut self, radius: f64) -> Self {
        self.pointer_radius = radius;
        self
    }

    /// Sets the label column side.
    pub fn with_label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }

    /// Sets the label column geometry: baseline y, reserved width and text height.
    pub fn with_text_metrics(mut self, text_y: f64, text_width: f64, text_height: f64) -> Self {
        self.text_y = text_y;
        self.text_width = text_width;
        self.text_height = text_height;
        self
    }

    /// Sets the label font size.
    pub fn with_label_font_size(mut self, font_size: f64) -> Self {
        self.label_font_size = font_size;
        self
    }

    /// Sets the padding around the chart content.
    pub fn with_padding(mut self, padding: impl Into<Insets>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Enables or disables auto-centering of the current slice.
    pub fn with_auto_center_in_slice(mut self, enabled: bool) -> Self {
        self.auto_center_in_slice = enabled;
        self
    }

    /// Sets the initial pie rotation (normalized into `[0, 360)`).
    pub fn with_pie_rotation(mut self, degrees: i32) -> Self {
        self.pie_rotation = normalize_degrees(degrees);
        self
    }

    /// Checks every size-like setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("pointer_radius", self.pointer_radius)?;
        check_dimension("text_width", self.text_width)?;
        check_dimension("text_height", self.text_height)?;
        check_dimension("label_font_size", self.label_font_size)?;
        check_dimension("padding.x0", self.padding.x0)?;
        check_dimension("padding.y0", self.padding.y0)?;
        check_dimension("padding.x1", self.padding.x1)?;
        check_dimension("padding.y1", self.padding.y1)?;
        if !self.text_y.is_finite() {
            return Err(ConfigError::NegativeDimension {
                name: "text_y",
                value: self.text_y,
            });
        }
        Ok(())
    }
}

pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeDimension { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_position_round_trips_raw_encoding() {
        assert_eq!(LabelPosition::from_raw(0), Ok(LabelPosition::Left));
        assert_eq!(LabelPosition::from_raw(1), Ok(LabelPosition::Right));
        assert_eq!(LabelPosition::Right.to_raw(), 1);
        assert_eq!(
            LabelPosition::from_raw(2),
            Err(ConfigError::InvalidLabelPosition { raw: 2 })
        );
    }

    #[test]
    fn defaults_validate() {
        let config = PieChartConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert!(!config.show_labels);
        assert_eq!(config.highlight_strength.get(), 1.15);
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        let config = PieChartConfig::default().with_pointer_radius(-1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeDimension {
                name: "pointer_radius",
                value: -1.0,
            })
        );
        let config = PieChartConfig::default().with_padding(Insets::new(0.0, -2.0, 0.0, 0.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn initial_rotation_is_normalized() {
        assert_eq!(PieChartConfig::default().with_pie_rotation(-90).pie_rotation, 270);
    }
}
