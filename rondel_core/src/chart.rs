// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pie chart engine.
//!
//! [`PieChart`] owns the item list, the running total and the derived per-slice state, and
//! re-runs the full pipeline (angles, shaders, current item) after every mutation:
//!
//! 1. [`crate::allocate`] turns item values into angular spans.
//! 2. Each slice gets a [`ShaderSpec`] for the current pie geometry.
//! 3. The slice under the pointer becomes the current item.
//!
//! Everything is synchronous; listeners and the [`ChartHost`] are called from inside the
//! mutating call.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Size;
use peniko::Color;

use crate::angle::{AngleSpan, allocate, centering_target, normalize_degrees, pointer_angle};
use crate::config::{LabelPosition, PieChartConfig, check_dimension};
use crate::error::{ChartError, ConfigError};
use crate::host::ChartHost;
use crate::item::{Item, ItemId};
use crate::label::percent_label;
use crate::layout::{PieLayout, measure};
use crate::log::{debug, warn};
use crate::measure::{HeuristicTextMeasurer, TextMeasurer};
use crate::selection::{CurrentItemChanged, ListenerId, SelectionCause, SelectionTracker};
use crate::shade::{HighlightStrength, ShaderSpec, highlight};

/// Identifies a chart in change notifications.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartId(pub u64);

/// Derived state for one item.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    /// Angular extent in logical degrees.
    pub span: AngleSpan,
    /// Brightened base color, fixed when the item was added.
    pub highlight: Color,
    /// Sweep gradient for the current geometry.
    pub shader: ShaderSpec,
}

/// An interactive pie chart's state.
pub struct PieChart {
    id: ChartId,
    config: PieChartConfig,
    items: Vec<Item>,
    slices: HashMap<ItemId, Slice>,
    total: f64,
    next_item: u64,
    rotation: i32,
    layout: PieLayout,
    selection: SelectionTracker,
    rotation_target: Option<i32>,
    host: Option<Box<dyn ChartHost>>,
    measurer: Box<dyn TextMeasurer>,
}

impl fmt::Debug for PieChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PieChart")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("items", &self.items)
            .field("slices", &self.slices)
            .field("total", &self.total)
            .field("next_item", &self.next_item)
            .field("rotation", &self.rotation)
            .field("layout", &self.layout)
            .field("selection", &self.selection)
            .field("rotation_target", &self.rotation_target)
            .field("host", &self.host.is_some())
            .finish_non_exhaustive()
    }
}

impl PieChart {
    /// Creates an empty chart.
    ///
    /// The layout starts out zero-sized; call [`Self::on_geometry_changed`] once the view size
    /// is known.
    pub fn new(id: ChartId, config: PieChartConfig) -> Result<Self, ChartError> {
        config.validate()?;
        let measurer: Box<dyn TextMeasurer> = Box::new(HeuristicTextMeasurer);
        let layout = PieLayout::arrange(Size::ZERO, &config, &*measurer);
        let mut chart = Self {
            id,
            rotation: normalize_degrees(config.pie_rotation),
            config,
            items: Vec::new(),
            slices: HashMap::new(),
            total: 0.0,
            next_item: 0,
            layout,
            selection: SelectionTracker::default(),
            rotation_target: None,
            host: None,
            measurer,
        };
        chart.relayout();
        Ok(chart)
    }

    /// Installs the embedder that receives redraw requests and rotation targets.
    pub fn set_host(&mut self, host: impl ChartHost + 'static) {
        self.host = Some(Box::new(host));
    }

    /// Removes the host, if any.
    pub fn clear_host(&mut self) {
        self.host = None;
    }

    /// Replaces the text measurer and re-runs layout.
    pub fn set_measurer(&mut self, measurer: impl TextMeasurer + 'static) {
        self.measurer = Box::new(measurer);
        self.relayout();
    }

    /// Registers a listener for current-item changes.
    pub fn on_current_item_changed(
        &mut self,
        listener: impl FnMut(&CurrentItemChanged) + 'static,
    ) -> ListenerId {
        self.selection.subscribe(Box::new(listener))
    }

    /// Unregisters a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.selection.unsubscribe(id)
    }

    /// Removes every item and hides labels.
    ///
    /// Calling this on an empty chart leaves it unchanged.
    pub fn reset(&mut self) {
        self.items.clear();
        self.slices.clear();
        self.total = 0.0;
        self.config.show_labels = false;
        self.selection.clear();
        self.rotation_target = None;
        self.relayout();
        self.request_redraw();
    }

    /// Appends an item and returns its index.
    ///
    /// Values must be finite and positive, and must keep the running total finite.
    /// The highlight color is derived immediately from the highlight strength in effect now.
    pub fn add_item(
        &mut self,
        label: impl Into<String>,
        value: f64,
        color: Color,
    ) -> Result<usize, ChartError> {
        if !(value.is_finite() && value > 0.0 && (self.total + value).is_finite()) {
            warn!(value, total = self.total, "rejected item value");
            return Err(ChartError::InvalidValue { value });
        }

        let id = ItemId(self.next_item);
        self.next_item += 1;
        let highlight = highlight(color, self.config.highlight_strength);
        self.slices.insert(
            id,
            Slice {
                span: AngleSpan::default(),
                highlight,
                shader: ShaderSpec::sweep(
                    self.layout.local_center(),
                    color,
                    highlight,
                    AngleSpan::default(),
                ),
            },
        );
        self.items.push(Item {
            id,
            label: label.into(),
            value,
            color,
        });
        self.total += value;
        self.data_changed();
        Ok(self.items.len() - 1)
    }

    /// Selects an item.
    ///
    /// Listeners are notified even when `index` is already current. With `scroll_into_view`
    /// the host is asked to rotate the pie so the slice is centered under the pointer.
    pub fn set_current_item(
        &mut self,
        index: usize,
        scroll_into_view: bool,
    ) -> Result<(), ChartError> {
        let len = self.items.len();
        if index >= len {
            warn!(index, len, "rejected current item");
            return Err(ChartError::IndexOutOfRange { index, len });
        }
        self.selection.select(self.id, index, SelectionCause::Explicit);
        if scroll_into_view {
            self.center_on_current_item();
        }
        self.request_redraw();
        Ok(())
    }

    /// Re-runs layout for a new view size.
    pub fn on_geometry_changed(&mut self, width: f64, height: f64) {
        self.layout = PieLayout::arrange(
            Size::new(width, height),
            &self.config,
            &*self.measurer,
        );
        self.data_changed();
        self.request_redraw();
    }

    /// Sets the pie rotation (normalized into `[0, 360)`).
    ///
    /// The slice under the pointer may change; no centering is requested.
    pub fn set_pie_rotation(&mut self, degrees: i32) {
        self.rotation = normalize_degrees(degrees);
        self.calc_current_item();
        self.request_redraw();
    }

    /// Tells the chart an externally driven rotation has finished.
    ///
    /// With auto-centering enabled this requests a rotation that centers the current slice,
    /// unless it is centered already.
    pub fn finish_rotation(&mut self) {
        self.rotation_target = None;
        self.rotation_settled();
    }

    /// The desired view size for the space offered by a parent.
    pub fn measure(&self, available: Size) -> Size {
        measure(available, &self.config)
    }

    // --- configuration ---

    /// Replaces the whole configuration after validating it.
    ///
    /// The pie rotation is left alone; use [`Self::set_pie_rotation`].
    pub fn set_config(&mut self, config: PieChartConfig) -> Result<(), ChartError> {
        config.validate()?;
        self.config = config;
        self.relayout();
        self.request_redraw();
        Ok(())
    }

    /// Shows or hides labels.
    pub fn set_show_labels(&mut self, show_labels: bool) {
        self.config.show_labels = show_labels;
        self.relayout();
        self.request_redraw();
    }

    /// Sets the highlight strength used for items added from now on.
    pub fn set_highlight_strength(&mut self, strength: f64) -> Result<(), ConfigError> {
        self.config.highlight_strength = HighlightStrength::new(strength)?;
        self.request_redraw();
        Ok(())
    }

    /// Sets the pointer tip radius.
    pub fn set_pointer_radius(&mut self, radius: f64) -> Result<(), ConfigError> {
        check_dimension("pointer_radius", radius)?;
        self.config.pointer_radius = radius;
        self.request_redraw();
        Ok(())
    }

    /// Moves the label column (and pointer) to the other side of the pie.
    pub fn set_label_position(&mut self, position: LabelPosition) {
        self.config.label_position = position;
        self.relayout();
        self.request_redraw();
    }

    /// Enables or disables auto-centering of the current slice.
    pub fn set_auto_center_in_slice(&mut self, enabled: bool) {
        self.config.auto_center_in_slice = enabled;
    }

    // --- accessors ---

    /// This chart's id.
    pub fn id(&self) -> ChartId {
        self.id
    }

    /// The active configuration.
    pub fn config(&self) -> &PieChartConfig {
        &self.config
    }

    /// Items in slice order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Derived state for the item at `index`.
    pub fn slice(&self, index: usize) -> Option<&Slice> {
        let item = self.items.get(index)?;
        self.slices.get(&item.id)
    }

    /// Items paired with their derived state, in slice order.
    pub fn slices(&self) -> impl Iterator<Item = (&Item, &Slice)> + '_ {
        self.items
            .iter()
            .filter_map(|item| self.slices.get(&item.id).map(|slice| (item, slice)))
    }

    /// Percentage label for the item at `index`.
    pub fn percent_label(&self, index: usize) -> Option<String> {
        self.slice(index).map(|slice| percent_label(slice.span))
    }

    /// Sum of all item values.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Index of the item under the pointer, or `None` when the chart is empty.
    pub fn current_item(&self) -> Option<usize> {
        self.selection.current()
    }

    /// Pie rotation in degrees, within `[0, 360)`.
    pub fn pie_rotation(&self) -> i32 {
        self.rotation
    }

    /// Logical angle under the pointer at zero rotation.
    pub fn pointer_reference_angle(&self) -> i32 {
        self.layout.pointer_reference
    }

    /// Logical angle currently under the pointer.
    pub fn pointer_angle(&self) -> i32 {
        pointer_angle(self.layout.pointer_reference, self.rotation)
    }

    /// The most recent layout.
    pub fn layout(&self) -> &PieLayout {
        &self.layout
    }

    /// The last rotation target handed to the host that has not been reported finished.
    pub fn pending_rotation_target(&self) -> Option<i32> {
        self.rotation_target
    }

    // --- pipeline ---

    fn relayout(&mut self) {
        self.layout = PieLayout::arrange(self.layout.view, &self.config, &*self.measurer);
        self.data_changed();
    }

    fn data_changed(&mut self) {
        let values: Vec<f64> = self.items.iter().map(|item| item.value).collect();
        let spans = allocate(&values, self.total);
        let center = self.layout.local_center();
        for (item, span) in self.items.iter().zip(spans) {
            if let Some(slice) = self.slices.get_mut(&item.id) {
                slice.span = span;
                slice.shader = ShaderSpec::sweep(center, item.color, slice.highlight, span);
            }
        }
        self.calc_current_item();
        self.rotation_settled();
    }

    fn calc_current_item(&mut self) {
        let angle = pointer_angle(self.layout.pointer_reference, self.rotation);
        let spans = self
            .items
            .iter()
            .filter_map(|item| self.slices.get(&item.id))
            .map(|slice| slice.span);
        if self.selection.track_pointer(self.id, spans, angle) {
            self.request_redraw();
        }
    }

    fn rotation_settled(&mut self) {
        if !self.config.auto_center_in_slice {
            return;
        }
        let Some(target) = self.current_centering_target() else {
            return;
        };
        if normalize_degrees(target) == self.rotation {
            return;
        }
        self.request_rotation(target);
    }

    fn center_on_current_item(&mut self) {
        if let Some(target) = self.current_centering_target() {
            self.request_rotation(target);
        }
    }

    fn current_centering_target(&self) -> Option<i32> {
        let span = self.slice(self.selection.current()?)?.span;
        Some(centering_target(
            span,
            self.layout.pointer_reference,
            self.rotation,
        ))
    }

    fn request_rotation(&mut self, target: i32) {
        debug!(
            target_degrees = target,
            rotation = self.rotation,
            "requesting pie rotation"
        );
        self.rotation_target = Some(target);
        if let Some(host) = self.host.as_mut() {
            host.animate_rotation_to(target);
        }
    }

    fn request_redraw(&mut self) {
        if let Some(host) = self.host.as_mut() {
            host.request_redraw();
        }
    }
}
