//! The carousel component.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;

use log::{debug, info, trace};
use tokio::runtime::Handle as RuntimeHandle;

use crate::config::SliderConfig;
use crate::error::SliderError;
use crate::events::SliderEvent;
use crate::handle::SliderHandle;
use crate::lifecycle::AutoPlay;
use crate::measure::Measure;
use crate::render::Track;
use crate::state::SliderState;
use crate::touch::SwipeTracker;

/// Owner callback invoked with every settled index.
pub(crate) type IndexCallback = Arc<dyn Fn(usize) + Send + Sync>;

#[derive(Debug)]
struct Inner {
    state: SliderState,
    config: SliderConfig,
    swipe: SwipeTracker,
}

/// State shared between a [`Slider`], its handles and its background tasks.
pub(crate) struct Core {
    inner: RwLock<Inner>,
    measure: Arc<dyn Measure + Send + Sync>,
    callback: RwLock<Option<IndexCallback>>,
    dirty: AtomicBool,
    timer: Mutex<Option<AutoPlay>>,
    /// Bumped whenever the timer is removed; ticks carry the value they
    /// were started with.
    generation: AtomicU64,
    runtime: Mutex<Option<RuntimeHandle>>,
    mounts: Mutex<usize>,
}

impl fmt::Debug for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Core")
            .field("inner", &self.inner)
            .field("dirty", &self.dirty)
            .field("timer", &self.timer)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Core {
    fn read<R>(&self, f: impl FnOnce(&Inner) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Apply an event, settle, then notify the owner.
    ///
    /// The state lock is released before the callback runs, so the callback
    /// may call back into the handle.
    pub(crate) fn dispatch(&self, event: SliderEvent) -> Option<usize> {
        self.dispatch_from(event, None)
    }

    /// Advance on behalf of the timer started as `generation`.
    ///
    /// Ticks from a timer that has since been removed are dropped, both
    /// before the state changes and before the owner is notified.
    pub(crate) fn tick(&self, generation: u64) -> Option<usize> {
        self.dispatch_from(SliderEvent::Tick, Some(generation))
    }

    fn dispatch_from(&self, event: SliderEvent, generation: Option<u64>) -> Option<usize> {
        let stale = |generation: Option<u64>| {
            generation.is_some_and(|g| g != self.generation.load(Ordering::SeqCst))
        };

        let applied = self.write(|inner| {
            if stale(generation) {
                return None;
            }
            let previous = inner.state;
            let settled = previous.apply(event, self.measure.as_ref(), &mut inner.swipe);
            inner.state = settled.state;
            Some((previous, settled))
        });
        let Some((previous, settled)) = applied else {
            trace!("Dropped {} from a removed timer", event.name());
            return self.index();
        };

        // Any visible difference needs a repaint; only index moves reach the owner
        if settled.state != previous || settled.changed {
            self.dirty.store(true, Ordering::SeqCst);
        }
        if !settled.changed {
            return settled.index;
        }

        debug!(
            "Slider settled on {:?} after {} (visible={}, offset={:.1})",
            settled.index,
            event.name(),
            settled.state.visible,
            settled.state.offset
        );

        if let Some(index) = settled.index {
            let callback = self
                .callback
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone();
            if let Some(callback) = callback {
                if stale(generation) {
                    return settled.index;
                }
                callback(index);
            }
        }

        settled.index
    }

    pub(crate) fn index(&self) -> Option<usize> {
        self.read(|inner| inner.state.index())
    }

    /// Register one mount. The first mount installs the runtime the timer
    /// runs on and starts it if configured.
    pub(crate) fn activate(self: &Arc<Self>, runtime: RuntimeHandle) {
        let mut mounts = self.mounts.lock().unwrap_or_else(PoisonError::into_inner);
        *mounts += 1;
        if *mounts > 1 {
            debug!("Slider mounted {} times, timer kept", *mounts);
            return;
        }

        *self.runtime.lock().unwrap_or_else(PoisonError::into_inner) = Some(runtime);
        let config = self.read(|inner| inner.config.clone());
        self.install_timer(config.auto_play, config.auto_play_interval);
    }

    /// Release one mount. The last one tears down the timer and forgets the
    /// runtime.
    pub(crate) fn deactivate(&self) {
        let mut mounts = self.mounts.lock().unwrap_or_else(PoisonError::into_inner);
        *mounts = mounts.saturating_sub(1);
        if *mounts > 0 {
            return;
        }

        let timer = {
            let mut timer = self.timer.lock().unwrap_or_else(PoisonError::into_inner);
            self.generation.fetch_add(1, Ordering::SeqCst);
            timer.take()
        };
        if timer.is_some() {
            debug!("Auto-play timer removed");
        }
        drop(timer);
        *self.runtime.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn install_timer(self: &Arc<Self>, enabled: bool, interval: Duration) {
        let runtime = self
            .runtime
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let mut timer = self.timer.lock().unwrap_or_else(PoisonError::into_inner);
        // Old timer is always torn down before a new one starts
        *timer = None;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let (true, Some(runtime)) = (enabled, runtime) {
            *timer = Some(AutoPlay::spawn(
                &runtime,
                SliderHandle::from_core(Arc::clone(self)),
                interval,
                generation,
            ));
        }
    }

    fn has_timer(&self) -> bool {
        self.timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

/// A windowed carousel over `len` externally owned items.
///
/// ```ignore
/// let slider = Slider::new(SliderConfig::new().gap(2), cards.len(), layout.clone())?;
/// slider.on_active_index_update(|index| log::info!("showing card {index}"));
/// let _mounted = slider.mount(&resize_bus)?;
///
/// let handle = slider.handle();
/// handle.advance();
/// ```
#[derive(Debug)]
pub struct Slider {
    pub(crate) core: Arc<Core>,
}

impl Slider {
    /// Create a carousel and take its first measurement.
    pub fn new<M>(config: SliderConfig, len: usize, measure: M) -> Result<Self, SliderError>
    where
        M: Measure + Send + Sync + 'static,
    {
        config.validate()?;

        let state = SliderState::new(len, config.orientation, config.gap)
            .remeasure(&measure)
            .settle()
            .state;
        info!(
            "Slider created: {} items, {} orientation, {} visible",
            len,
            config.orientation.label(),
            state.visible
        );

        Ok(Self {
            core: Arc::new(Core {
                inner: RwLock::new(Inner {
                    state,
                    config,
                    swipe: SwipeTracker::new(),
                }),
                measure: Arc::new(measure),
                callback: RwLock::new(None),
                dirty: AtomicBool::new(true),
                timer: Mutex::new(None),
                generation: AtomicU64::new(0),
                runtime: Mutex::new(None),
                mounts: Mutex::new(0),
            }),
        })
    }

    /// Register the owner callback for settled indexes.
    ///
    /// Replaces any previously registered callback.
    pub fn on_active_index_update<F>(&self, callback: F)
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        *self
            .core
            .callback
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(callback));
    }

    /// Handle exposing the navigation methods to the owner.
    pub fn handle(&self) -> SliderHandle {
        SliderHandle::from_core(Arc::clone(&self.core))
    }

    /// Process one event. Returns the settled index.
    pub fn dispatch(&self, event: SliderEvent) -> Option<usize> {
        self.core.dispatch(event)
    }

    pub fn set_items(&self, len: usize) -> Option<usize> {
        self.core.dispatch(SliderEvent::SetItems(len))
    }

    /// Switch auto-play on or off, or change its interval.
    ///
    /// While mounted the running timer is always removed and, if enabled,
    /// reinstalled with the new interval.
    pub fn set_auto_play(&self, enabled: bool, interval: Duration) -> Result<(), SliderError> {
        if enabled && interval.is_zero() {
            return Err(SliderError::InvalidInterval);
        }

        self.core.write(|inner| {
            inner.config.auto_play = enabled;
            inner.config.auto_play_interval = interval;
        });
        self.core.install_timer(enabled, interval);
        self.core.dirty.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Whether an auto-play timer is currently installed.
    pub fn is_auto_playing(&self) -> bool {
        self.core.has_timer()
    }

    pub fn state(&self) -> SliderState {
        self.core.read(|inner| inner.state)
    }

    pub fn config(&self) -> SliderConfig {
        self.core.read(|inner| inner.config.clone())
    }

    pub fn index(&self) -> Option<usize> {
        self.core.index()
    }

    pub fn len(&self) -> usize {
        self.core.read(|inner| inner.state.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the render model for the current snapshot.
    pub fn view(&self) -> Track {
        self.core
            .read(|inner| Track::build(&inner.state, &inner.config))
    }

    /// Check if the carousel changed since the last repaint.
    pub fn is_dirty(&self) -> bool {
        self.core.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.core.dirty.store(false, Ordering::SeqCst);
    }
}
