//! Carousel state snapshot.
//!
//! Every derived value (`visible`, `offset`) is a pure function of the
//! snapshot, and every transition ends in [`SliderState::settle`], which
//! normalizes a transient out-of-range index before anyone observes it.

use log::debug;

use crate::measure::{Measure, measure_container, measure_dim, step_percent, visible_count};
use crate::types::Orientation;

/// Immutable snapshot of one carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    /// Selected index. May briefly be `-1` or `len` between a navigation
    /// step and the settle that wraps it.
    pub selected: i64,
    /// Number of items supplied by the owner.
    pub len: usize,
    pub orientation: Orientation,
    pub gap: u16,
    /// Measured item extent along the axis (0 = not measured yet).
    pub dim: u16,
    /// Measured container extent along the axis.
    pub container: u16,
    /// Whole items that fit in the container.
    pub visible: usize,
    /// Track translation, as a percentage of the item extent.
    pub offset: f64,
}

/// Result of settling a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settled {
    pub state: SliderState,
    /// Normalized index, `None` for an empty list.
    pub index: Option<usize>,
    /// Whether the index, visible count or item count moved.
    pub changed: bool,
}

impl SliderState {
    pub fn new(len: usize, orientation: Orientation, gap: u16) -> Self {
        Self {
            selected: 0,
            len,
            orientation,
            gap,
            dim: 0,
            container: 0,
            visible: 0,
            offset: 0.0,
        }
    }

    /// Re-read the item and container extents along the current axis.
    ///
    /// Idempotent: measuring the same layout twice yields the same snapshot.
    pub fn remeasure(self, measure: &dyn Measure) -> Self {
        let dim = measure_dim(measure, self.orientation);
        let container = measure_container(measure, self.orientation);
        Self {
            dim,
            container,
            visible: visible_count(container, dim, self.gap),
            ..self
        }
    }

    /// First index of the final window.
    pub fn window_start(&self) -> usize {
        self.len.saturating_sub(self.visible)
    }

    /// Translation that brings `index` into view.
    ///
    /// Indexes inside the final window are pinned to the window start so the
    /// last page stays full instead of overshooting the end of the list.
    pub fn offset_for(&self, index: usize) -> f64 {
        if self.dim == 0 || self.len == 0 {
            return 0.0;
        }
        let step = 100.0 + step_percent(self.gap, self.dim);
        let start = self.window_start();
        if index >= start {
            start as f64 * step
        } else {
            index as f64 * step
        }
    }

    /// The selected index, if it is in range.
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.selected)
            .ok()
            .filter(|&index| index < self.len)
    }

    /// Wrap the selected index into `[0, len)` and recompute the offset.
    pub fn settle(self) -> Settled {
        if self.len == 0 {
            let state = Self {
                selected: 0,
                offset: 0.0,
                ..self
            };
            return Settled {
                state,
                index: None,
                changed: false,
            };
        }

        let last = self.len as i64 - 1;
        let selected = if self.selected > last {
            0
        } else if self.selected < 0 {
            last
        } else {
            self.selected
        };
        if selected != self.selected {
            debug!("Slider index {} wrapped to {}", self.selected, selected);
        }

        let index = selected as usize;
        Settled {
            state: Self {
                selected,
                offset: self.offset_for(index),
                ..self
            },
            index: Some(index),
            changed: selected != self.selected,
        }
    }

    /// Whether anything the owner is notified about differs from `previous`.
    pub(crate) fn moved_from(&self, previous: &SliderState) -> bool {
        self.selected != previous.selected
            || self.visible != previous.visible
            || self.len != previous.len
    }
}
