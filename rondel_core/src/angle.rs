// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular allocation of pie slices.
//!
//! Angles are whole degrees in the logical pie frame: counter-clockwise from the positive x
//! axis with y pointing up. Slices are laid out from 360 down to 0 in item order, so the first
//! item ends at 360 and the last item starts at 0.

extern crate alloc;

use alloc::vec::Vec;

use crate::log::debug;

/// Degrees in a full turn.
pub const FULL_CIRCLE: i32 = 360;

/// An inclusive span of whole degrees, `start <= end`, both within `[0, 360]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AngleSpan {
    /// Lower bound in degrees.
    pub start: i32,
    /// Upper bound in degrees.
    pub end: i32,
}

impl AngleSpan {
    /// Creates a span.
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Angular width in degrees.
    pub const fn sweep(self) -> i32 {
        self.end - self.start
    }

    /// Returns `true` when `angle` lies in `[start, end]`.
    pub const fn contains(self, angle: i32) -> bool {
        self.start <= angle && angle <= self.end
    }

    /// The bisecting angle, rounded toward `start`.
    pub const fn mid(self) -> i32 {
        self.start + self.sweep() / 2
    }

    /// Fraction of the full circle covered by this span.
    pub fn fraction(self) -> f64 {
        f64::from(self.sweep()) / f64::from(FULL_CIRCLE)
    }
}

/// Computes one span per value.
///
/// Spans are laid out from 360 downward. Each boundary is placed at
/// `360 - running_sum / total * 360`, truncated to whole degrees, so truncation error never
/// accumulates from one slice to the next: every sweep is within one degree of its exact share.
/// When `total` is positive the last span is pinned down to 0 so the spans partition the circle
/// exactly.
///
/// A zero, negative or non-finite `total` yields degenerate `[360, 360]` spans.
pub fn allocate(values: &[f64], total: f64) -> Vec<AngleSpan> {
    if !(total.is_finite() && total > 0.0) {
        return values
            .iter()
            .map(|_| AngleSpan::new(FULL_CIRCLE, FULL_CIRCLE))
            .collect();
    }

    let mut spans = Vec::with_capacity(values.len());
    let mut cursor = FULL_CIRCLE;
    let mut running = 0.0;
    for &value in values {
        running += value;
        let boundary = f64::from(FULL_CIRCLE) - running / total * f64::from(FULL_CIRCLE);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "truncation to whole degrees is the allocation rule; clamped to [0, cursor]"
        )]
        let start = (boundary as i32).clamp(0, cursor);
        debug!(start, end = cursor, "allocated slice");
        spans.push(AngleSpan::new(start, cursor));
        cursor = start;
    }

    if let Some(last) = spans.last_mut() {
        last.start = 0;
    }
    spans
}

/// Returns the index of the first span containing `angle`.
pub fn slice_at_angle(spans: impl IntoIterator<Item = AngleSpan>, angle: i32) -> Option<usize> {
    spans.into_iter().position(|span| span.contains(angle))
}

/// Normalizes a rotation into `[0, 360)`.
pub const fn normalize_degrees(degrees: i32) -> i32 {
    degrees.rem_euclid(FULL_CIRCLE)
}

/// The logical angle under the pointer for a given reference angle and pie rotation.
pub const fn pointer_angle(reference: i32, rotation: i32) -> i32 {
    (normalize_degrees(reference) + normalize_degrees(rotation)) % FULL_CIRCLE
}

/// Rotation that centers `span` under the pointer.
///
/// When the target falls below 90 while the pie is already rotated past 180, a full turn is
/// added so an animated rotation travels the short way.
pub const fn centering_target(span: AngleSpan, reference: i32, rotation: i32) -> i32 {
    let target = span.mid() - reference;
    if target < 90 && rotation > 180 {
        target + FULL_CIRCLE
    } else {
        target
    }
}
