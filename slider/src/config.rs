//! Carousel configuration.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::error::SliderError;
use crate::types::Orientation;

/// Interval used when auto-play is switched on without one.
pub const DEFAULT_AUTO_PLAY_INTERVAL: Duration = Duration::from_millis(3000);

/// Options recognized by a [`Slider`](crate::Slider).
///
/// All fields have defaults, so a JSON document only needs the keys it wants
/// to override:
///
/// ```ignore
/// { "orientation": "vertical", "gap": 2, "auto_play": true, "auto_play_interval_ms": 1500 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Axis that is measured and translated.
    pub orientation: Orientation,

    /// Spacing between items, in the same unit as the measurements.
    pub gap: u16,

    /// Minimum container height (horizontal strips).
    pub min_height: Option<u16>,

    /// Minimum container width (vertical strips).
    pub min_width: Option<u16>,

    /// Advance automatically on a fixed timer.
    pub auto_play: bool,

    #[serde(
        rename = "auto_play_interval_ms",
        deserialize_with = "deserialize_millis"
    )]
    pub auto_play_interval: Duration,

    pub hide_arrows: bool,
    pub hide_dev_panel: bool,
    pub hide_init_gap: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            gap: 0,
            min_height: None,
            min_width: None,
            auto_play: false,
            auto_play_interval: DEFAULT_AUTO_PLAY_INTERVAL,
            hide_arrows: true,
            hide_dev_panel: true,
            hide_init_gap: true,
        }
    }
}

impl SliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn min_height(mut self, height: u16) -> Self {
        self.min_height = Some(height);
        self
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Enable auto-play with the given interval.
    pub fn auto_play(mut self, interval: Duration) -> Self {
        self.auto_play = true;
        self.auto_play_interval = interval;
        self
    }

    pub fn show_arrows(mut self) -> Self {
        self.hide_arrows = false;
        self
    }

    pub fn show_dev_panel(mut self) -> Self {
        self.hide_dev_panel = false;
        self
    }

    /// Render a gap-sized spacer before the first item.
    pub fn show_init_gap(mut self) -> Self {
        self.hide_init_gap = false;
        self
    }

    /// Minimum cross-axis size for the current orientation.
    pub fn min_cross(&self) -> Option<u16> {
        match self.orientation {
            Orientation::Horizontal => self.min_height,
            Orientation::Vertical => self.min_width,
        }
    }

    pub fn validate(&self) -> Result<(), SliderError> {
        if self.auto_play && self.auto_play_interval.is_zero() {
            return Err(SliderError::InvalidInterval);
        }
        Ok(())
    }
}

fn deserialize_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}
