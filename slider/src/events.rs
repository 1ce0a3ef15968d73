//! Carousel events and the transition each one produces.

use log::trace;

use crate::measure::Measure;
use crate::state::{Settled, SliderState};
use crate::touch::{Swipe, SwipeTracker};
use crate::types::Orientation;

/// Everything that can change a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderEvent {
    /// Step forward (owner call, arrow button).
    Advance,
    /// Step backward.
    Retreat,
    /// Jump back to the first item.
    Reset,
    /// Auto-play timer fired.
    Tick,
    /// Layout changed; remeasure.
    Resize,
    TouchStart { x: i32 },
    TouchMove { x: i32 },
    SetOrientation(Orientation),
    ToggleOrientation,
    /// The owner supplied a list of a different length.
    SetItems(usize),
}

impl SliderEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SliderEvent::Advance => "advance",
            SliderEvent::Retreat => "retreat",
            SliderEvent::Reset => "reset",
            SliderEvent::Tick => "tick",
            SliderEvent::Resize => "resize",
            SliderEvent::TouchStart { .. } => "touch_start",
            SliderEvent::TouchMove { .. } => "touch_move",
            SliderEvent::SetOrientation(_) => "set_orientation",
            SliderEvent::ToggleOrientation => "toggle_orientation",
            SliderEvent::SetItems(_) => "set_items",
        }
    }
}

impl SliderState {
    fn step(self, delta: i64) -> Self {
        Self {
            selected: self.selected + delta,
            ..self
        }
    }

    /// Apply one event and settle the result.
    pub fn apply(
        self,
        event: SliderEvent,
        measure: &dyn Measure,
        swipe: &mut SwipeTracker,
    ) -> Settled {
        trace!("Slider event: {:?}", event);

        let next = match event {
            SliderEvent::Advance | SliderEvent::Tick => self.step(1),
            SliderEvent::Retreat => self.step(-1),
            SliderEvent::Reset => Self {
                selected: 0,
                ..self
            },
            SliderEvent::Resize => self.remeasure(measure),
            SliderEvent::TouchStart { x } => {
                swipe.start(x);
                self
            }
            SliderEvent::TouchMove { x } => match swipe.moved(x) {
                Some(Swipe::Forward) => self.step(1),
                Some(Swipe::Backward) => self.step(-1),
                None => self,
            },
            SliderEvent::SetOrientation(orientation) => Self {
                orientation,
                ..self
            }
            .remeasure(measure),
            SliderEvent::ToggleOrientation => Self {
                orientation: self.orientation.toggle(),
                ..self
            }
            .remeasure(measure),
            SliderEvent::SetItems(len) => Self { len, ..self },
        };

        let mut settled = next.settle();
        settled.changed |= next.moved_from(&self);
        settled
    }
}
