//! Scoped resources owned by a mounted carousel.
//!
//! Mounting acquires two resources: a listener on the host's [`ResizeBus`]
//! and, when configured, an [`AutoPlay`] timer. Both are released when the
//! [`Mounted`] guard is dropped, on every exit path.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, trace, warn};
use tokio::runtime::Handle as RuntimeHandle;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::component::{Core, Slider};
use crate::error::SliderError;
use crate::handle::SliderHandle;
use crate::types::Extent;

// =============================================================================
// ResizeBus
// =============================================================================

/// Broadcast of layout-change notifications, one per host window.
///
/// Hosts call [`notify`](Self::notify) after their layout changed; every
/// mounted carousel then remeasures.
#[derive(Debug, Clone)]
pub struct ResizeBus {
    tx: broadcast::Sender<Extent>,
}

impl Default for ResizeBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    /// Announce a new window size.
    ///
    /// Errors are ignored (no listeners = nothing mounted).
    pub fn notify(&self, extent: Extent) {
        let _ = self.tx.send(extent);
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }

    fn subscribe(&self) -> broadcast::Receiver<Extent> {
        self.tx.subscribe()
    }
}

// =============================================================================
// AutoPlay
// =============================================================================

/// Recurring timer that advances a carousel.
///
/// The first tick fires one full interval after installation. Dropping the
/// value aborts the timer task; a tick already running when it is dropped
/// is discarded by the carousel.
#[derive(Debug)]
pub struct AutoPlay {
    task: JoinHandle<()>,
}

impl AutoPlay {
    pub(crate) fn spawn(
        runtime: &RuntimeHandle,
        handle: SliderHandle,
        interval: Duration,
        generation: u64,
    ) -> Self {
        debug!("Auto-play timer {} installed ({:?})", generation, interval);
        let task = runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                trace!("Auto-play tick");
                handle.tick(generation);
            }
        });
        Self { task }
    }
}

impl Drop for AutoPlay {
    fn drop(&mut self) {
        self.task.abort();
    }
}

// =============================================================================
// Mounted
// =============================================================================

/// Guard for a mounted carousel.
///
/// Dropping it (or calling [`unmount`](Self::unmount)) deregisters its resize
/// listener. The auto-play timer is removed with the last guard of a
/// carousel mounted more than once.
#[derive(Debug)]
pub struct Mounted {
    core: Arc<Core>,
    listener: Option<JoinHandle<()>>,
}

impl Mounted {
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
            debug!("Resize listener removed");
        }
        self.core.deactivate();
    }
}

impl Slider {
    /// Activate the carousel: remeasure, listen for resizes and start
    /// auto-play if configured.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&self, bus: &ResizeBus) -> Result<Mounted, SliderError> {
        let runtime = RuntimeHandle::try_current().map_err(|_| SliderError::NoRuntime)?;

        self.core.dispatch(crate::events::SliderEvent::Resize);

        let mut rx = bus.subscribe();
        let handle = self.handle();
        let listener = runtime.spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(extent) => {
                        trace!("Resize to {}x{}", extent.width, extent.height);
                        handle.remeasure();
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        // Measuring is idempotent; one pass covers every missed event
                        warn!("Resize listener lagged by {} events", skipped);
                        handle.remeasure();
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
        debug!("Resize listener registered");

        self.core.activate(runtime);

        Ok(Mounted {
            core: Arc::clone(&self.core),
            listener: Some(listener),
        })
    }
}
