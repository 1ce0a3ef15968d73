//! Page runtime: owns the terminal, the carousel and the event loop.

mod events;
mod terminal;
mod wakeup;

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, error, info, trace};
use slider::config::DEFAULT_AUTO_PLAY_INTERVAL;
use slider::{Extent, ResizeBus, Slider, SliderConfig};

use crate::content;
use crate::error::RuntimeError;
use crate::layout::TerminalLayout;
use crate::paint::{self, HitMap, Scene};

use events::{Action, convert_event};
use terminal::TerminalGuard;

/// Show the page until the user quits.
pub async fn run(config: SliderConfig) -> Result<(), RuntimeError> {
    let mut term = TerminalGuard::new()?;
    let (width, height) = term.size();

    let cards = content::cards();
    let controls = slider::Controls {
        arrows: !config.hide_arrows,
        dev_panel: !config.hide_dev_panel,
    };
    let layout = TerminalLayout::new(Extent::new(width, height), controls);
    let carousel = Slider::new(config, cards.len(), layout.clone())?;

    let (wakeup_tx, mut wakeup_rx) = wakeup::channel();
    carousel.on_active_index_update(move |index| {
        debug!("Showing card {}", index);
        wakeup_tx.send();
    });

    let bus = ResizeBus::new();
    let mounted = carousel.mount(&bus)?;
    info!("Page mounted at {}x{}", width, height);

    let mut events = EventStream::new();
    let mut hits = HitMap::default();
    let mut force_render = true;

    loop {
        if force_render || carousel.is_dirty() {
            let track = carousel.view();
            let config = carousel.config();
            let scene = Scene {
                regions: layout.regions(),
                track: &track,
                cards,
                auto_play: config.auto_play.then_some(config.auto_play_interval),
            };
            hits = term.draw(|buffer| paint::paint(buffer, &scene))?;
            carousel.clear_dirty();
            force_render = false;
        }

        let action = tokio::select! {
            next = events.next() => match next {
                Some(Ok(event)) => {
                    trace!("Crossterm event: {:?}", event);
                    convert_event(event, &hits)
                }
                Some(Err(e)) => {
                    error!("Event stream error: {}", e);
                    None
                }
                None => Some(Action::Quit),
            },
            Some(()) = wakeup_rx.recv() => {
                wakeup_rx.drain();
                None
            }
        };

        let Some(action) = action else {
            continue;
        };
        debug!("Action: {:?}", action);

        match action {
            Action::Quit => break,
            Action::Slider(event) => {
                carousel.dispatch(event);
            }
            Action::ToggleAutoPlay => {
                let config = carousel.config();
                let interval = if config.auto_play_interval.is_zero() {
                    DEFAULT_AUTO_PLAY_INTERVAL
                } else {
                    config.auto_play_interval
                };
                carousel.set_auto_play(!config.auto_play, interval)?;
            }
            Action::Resize { width, height } => {
                layout.resize(Extent::new(width, height));
                bus.notify(Extent::new(width, height));
                force_render = true;
            }
        }
    }

    mounted.unmount();
    info!("Page closed");
    Ok(())
}
