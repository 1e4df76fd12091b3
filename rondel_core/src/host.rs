// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart's view of whatever embeds it.

/// Capabilities a chart borrows from its embedder.
///
/// The chart never schedules frames or animations itself. It asks the host to repaint, and it
/// hands rotation targets to the host, which is expected to animate (or jump) there and report
/// progress back through [`crate::PieChart::set_pie_rotation`].
pub trait ChartHost {
    /// Something visible changed; schedule a repaint.
    fn request_redraw(&mut self) {}

    /// Rotate the pie to `target_degrees`.
    ///
    /// Targets are not normalized: a value of 360 or more means "go the long way round past
    /// zero" so a rotation from 300 to 370 reads as a short clockwise turn.
    fn animate_rotation_to(&mut self, target_degrees: i32) {
        let _ = target_degrees;
    }
}
