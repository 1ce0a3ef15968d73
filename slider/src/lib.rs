//! A windowed, navigable strip of items along one axis.
//!
//! The carousel measures one rendered item, works out how many fit in the
//! container, and tracks a selected index that wraps at both ends. Owners
//! drive it through [`SliderHandle`] and hear about settled indexes through
//! the `on_active_index_update` callback.

pub mod component;
pub mod config;
pub mod error;
pub mod events;
pub mod handle;
pub mod lifecycle;
pub mod measure;
pub mod render;
pub mod state;
pub mod touch;
pub mod types;

pub use component::Slider;
pub use config::SliderConfig;
pub use error::SliderError;
pub use events::SliderEvent;
pub use handle::SliderHandle;
pub use lifecycle::{AutoPlay, Mounted, ResizeBus};
pub use measure::{FixedMeasure, Measure};
pub use render::{Controls, ItemSlot, Track};
pub use state::{Settled, SliderState};
pub use touch::{Swipe, SwipeTracker};
pub use types::{Extent, Orientation, Rect};

