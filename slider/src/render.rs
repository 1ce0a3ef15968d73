//! Render model for a carousel.
//!
//! [`Track`] describes what to draw without drawing it: where each item
//! starts along the axis after translation, whether a leading spacer is
//! shown, and which controls are visible. Positions are in the host's
//! measurement unit (pixels, terminal cells).

use std::ops::Range;

use crate::config::SliderConfig;
use crate::state::SliderState;
use crate::types::Orientation;

/// Position of one item on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSlot {
    pub index: usize,
    /// Start along the axis, relative to the container. Negative when the
    /// item has been translated out past the leading edge.
    pub start: i32,
    pub extent: u16,
}

impl ItemSlot {
    pub fn end(&self) -> i32 {
        self.start + self.extent as i32
    }
}

/// Which control rows are shown below the track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    /// Previous / Next buttons.
    pub arrows: bool,
    /// Orientation switch.
    pub dev_panel: bool,
}

impl Controls {
    pub fn any(&self) -> bool {
        self.arrows || self.dev_panel
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub orientation: Orientation,
    pub selected: Option<usize>,
    /// Translation as a percentage of the item extent.
    pub translate: f64,
    /// Translation converted to the measurement unit.
    pub translate_units: i32,
    /// Width of the spacer before the first item, if shown.
    pub leading_gap: Option<u16>,
    pub min_cross: Option<u16>,
    pub gap: u16,
    pub items: Vec<ItemSlot>,
    pub controls: Controls,
}

impl Track {
    pub fn build(state: &SliderState, config: &SliderConfig) -> Self {
        let leading_gap = (!config.hide_init_gap).then_some(state.gap);
        let leading = leading_gap.unwrap_or(0) as i32;
        let translate_units = (state.offset * state.dim as f64 / 100.0).round() as i32;
        let stride = state.dim as i32 + state.gap as i32;

        let items = (0..state.len)
            .map(|index| ItemSlot {
                index,
                start: leading + index as i32 * stride - translate_units,
                extent: state.dim,
            })
            .collect();

        Self {
            orientation: state.orientation,
            selected: state.index(),
            translate: state.offset,
            translate_units,
            leading_gap,
            min_cross: config.min_cross(),
            gap: state.gap,
            items,
            controls: Controls {
                arrows: !config.hide_arrows,
                dev_panel: !config.hide_dev_panel,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Indexes of the items lying entirely inside `[0, viewport)`.
    pub fn visible_range(&self, viewport: u16) -> Range<usize> {
        let inside = |slot: &&ItemSlot| {
            slot.extent > 0 && slot.start >= 0 && slot.end() <= viewport as i32
        };
        let first = self.items.iter().find(inside);
        let last = self.items.iter().rev().find(inside);
        match (first, last) {
            (Some(first), Some(last)) => first.index..last.index + 1,
            _ => 0..0,
        }
    }
}
