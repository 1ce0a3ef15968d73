//! Wakeup channel for passive rendering.
//!
//! The event loop blocks when idle. The carousel's index callback runs on
//! whichever task settled the index (auto-play timer, resize listener) and
//! signals here so the loop repaints.

use tokio::sync::mpsc;

#[derive(Clone, Debug)]
pub struct WakeupSender {
    tx: mpsc::Sender<()>,
}

impl WakeupSender {
    /// Non-blocking. Errors are ignored (full = a repaint is already
    /// pending, closed = shutting down).
    pub fn send(&self) {
        let _ = self.tx.try_send(());
    }
}

#[derive(Debug)]
pub struct WakeupReceiver {
    rx: mpsc::Receiver<()>,
}

impl WakeupReceiver {
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Multiple buffered wakeups collapse into a single render.
    pub fn drain(&mut self) {
        while self.rx.try_recv().is_ok() {}
    }
}

pub fn channel() -> (WakeupSender, WakeupReceiver) {
    let (tx, rx) = mpsc::channel(16);
    (WakeupSender { tx }, WakeupReceiver { rx })
}
