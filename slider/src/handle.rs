//! Imperative handle given to the carousel's owner.

use std::sync::Arc;

use crate::component::Core;
use crate::events::SliderEvent;

/// Navigation methods exposed to the owning page.
///
/// Cheap to clone. Each call runs a full update (step, settle, notify)
/// before returning.
#[derive(Debug, Clone)]
pub struct SliderHandle {
    core: Arc<Core>,
}

impl SliderHandle {
    pub(crate) fn from_core(core: Arc<Core>) -> Self {
        Self { core }
    }

    /// Step to the next item, wrapping to the first after the last.
    pub fn advance(&self) {
        self.core.dispatch(SliderEvent::Advance);
    }

    /// Step to the previous item, wrapping to the last before the first.
    pub fn retreat(&self) {
        self.core.dispatch(SliderEvent::Retreat);
    }

    /// Go back to the first item.
    pub fn reset(&self) {
        self.core.dispatch(SliderEvent::Reset);
    }

    pub fn index(&self) -> Option<usize> {
        self.core.index()
    }

    /// Timer step; ignored once the timer started as `generation` is gone.
    pub(crate) fn tick(&self, generation: u64) {
        self.core.tick(generation);
    }

    pub(crate) fn remeasure(&self) {
        self.core.dispatch(SliderEvent::Resize);
    }
}
