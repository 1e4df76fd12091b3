// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Current-item tracking and change notification.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::angle::{AngleSpan, slice_at_angle};
use crate::chart::ChartId;
use crate::log::debug;

/// Why the current item changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionCause {
    /// Items, geometry or rotation changed and a different slice is now under the pointer.
    DataChanged,
    /// The caller selected an item explicitly.
    Explicit,
}

/// Delivered to listeners whenever the current item is assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentItemChanged {
    /// The chart that emitted the event.
    pub chart: ChartId,
    /// The new current item index.
    pub index: usize,
    /// The current item before this change.
    pub previous: Option<usize>,
    /// What triggered the change.
    pub cause: SelectionCause,
}

/// Handle returned when registering a listener; pass it back to remove the listener.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&CurrentItemChanged)>;

/// Current item plus its observers.
#[derive(Default)]
pub(crate) struct SelectionTracker {
    current: Option<usize>,
    next_listener: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl fmt::Debug for SelectionTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionTracker")
            .field("current", &self.current)
            .field("next_listener", &self.next_listener)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SelectionTracker {
    pub(crate) fn current(&self) -> Option<usize> {
        self.current
    }

    pub(crate) fn clear(&mut self) {
        self.current = None;
    }

    pub(crate) fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Assigns the current item and notifies every listener, even if the index is unchanged.
    pub(crate) fn select(&mut self, chart: ChartId, index: usize, cause: SelectionCause) {
        let event = CurrentItemChanged {
            chart,
            index,
            previous: self.current,
            cause,
        };
        debug!(index, ?cause, "current item changed");
        self.current = Some(index);
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    /// Re-resolves the slice under the pointer after a structural change.
    ///
    /// Returns `true` if the current item moved. An empty chart has no current item; that
    /// transition is silent.
    pub(crate) fn track_pointer(
        &mut self,
        chart: ChartId,
        spans: impl IntoIterator<Item = AngleSpan>,
        pointer_angle: i32,
    ) -> bool {
        let mut spans = spans.into_iter().peekable();
        if spans.peek().is_none() {
            self.current = None;
            return false;
        }
        match slice_at_angle(spans, pointer_angle) {
            Some(index) if self.current != Some(index) => {
                self.select(chart, index, SelectionCause::DataChanged);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;
    use core::cell::RefCell;

    use super::*;

    const CHART: ChartId = ChartId(7);

    fn spans() -> [AngleSpan; 3] {
        [
            AngleSpan::new(270, 360),
            AngleSpan::new(180, 270),
            AngleSpan::new(0, 180),
        ]
    }

    type Seen = Rc<RefCell<Vec<CurrentItemChanged>>>;

    fn recorder(tracker: &mut SelectionTracker) -> (ListenerId, Seen) {
        let seen = Seen::default();
        let sink = Rc::clone(&seen);
        let id = tracker.subscribe(Box::new(move |event: &CurrentItemChanged| {
            sink.borrow_mut().push(*event);
        }));
        (id, seen)
    }

    #[test]
    fn pointer_tracking_notifies_only_on_change() {
        let mut tracker = SelectionTracker::default();
        let (_, seen) = recorder(&mut tracker);

        assert!(tracker.track_pointer(CHART, spans(), 135));
        assert_eq!(tracker.current(), Some(2));
        assert!(!tracker.track_pointer(CHART, spans(), 90));
        assert!(tracker.track_pointer(CHART, spans(), 300));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[0],
            CurrentItemChanged {
                chart: CHART,
                index: 2,
                previous: None,
                cause: SelectionCause::DataChanged,
            }
        );
        assert_eq!(seen[1].previous, Some(2));
        assert_eq!(seen[1].index, 0);
    }

    #[test]
    fn explicit_selection_always_notifies() {
        let mut tracker = SelectionTracker::default();
        let (_, seen) = recorder(&mut tracker);
        tracker.select(CHART, 1, SelectionCause::Explicit);
        tracker.select(CHART, 1, SelectionCause::Explicit);
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[1].cause, SelectionCause::Explicit);
    }

    #[test]
    fn empty_spans_clear_silently() {
        let mut tracker = SelectionTracker::default();
        let (_, seen) = recorder(&mut tracker);
        tracker.select(CHART, 0, SelectionCause::Explicit);
        assert!(!tracker.track_pointer(CHART, Vec::<AngleSpan>::new(), 45));
        assert_eq!(tracker.current(), None);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn every_listener_fires_until_removed() {
        let mut tracker = SelectionTracker::default();
        let (first, a) = recorder(&mut tracker);
        let (_, b) = recorder(&mut tracker);
        tracker.select(CHART, 0, SelectionCause::Explicit);
        assert!(tracker.unsubscribe(first));
        assert!(!tracker.unsubscribe(first));
        tracker.select(CHART, 1, SelectionCause::Explicit);
        assert_eq!(a.borrow().len(), 1);
        assert_eq!(b.borrow().len(), 2);
    }
}
