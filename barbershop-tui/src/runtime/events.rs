//! Convert crossterm events into page actions.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use log::trace;
use slider::{Orientation, SliderEvent};

use crate::paint::HitMap;

/// What the page should do in response to one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward to the carousel.
    Slider(SliderEvent),
    ToggleAutoPlay,
    Resize { width: u16, height: u16 },
    Quit,
}

fn convert_key(event: KeyEvent) -> Option<Action> {
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match event.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            Action::Slider(SliderEvent::Retreat)
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            Action::Slider(SliderEvent::Advance)
        }
        KeyCode::Home | KeyCode::Char('r') => Action::Slider(SliderEvent::Reset),
        KeyCode::Char('o') => Action::Slider(SliderEvent::ToggleOrientation),
        KeyCode::Char('a') => Action::ToggleAutoPlay,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

fn convert_mouse(event: MouseEvent, hits: &HitMap) -> Option<Action> {
    let (x, y) = (event.column, event.row);
    let hit = |rect: Option<slider::Rect>| rect.is_some_and(|rect| rect.contains(x, y));

    let event = match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if hit(hits.previous) {
                SliderEvent::Retreat
            } else if hit(hits.next) {
                SliderEvent::Advance
            } else if hit(hits.horizontal) {
                SliderEvent::SetOrientation(Orientation::Horizontal)
            } else if hit(hits.vertical) {
                SliderEvent::SetOrientation(Orientation::Vertical)
            } else if hits.viewport.contains(x, y) {
                // A press on the strip starts a swipe
                SliderEvent::TouchStart { x: x as i32 }
            } else {
                return None;
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => SliderEvent::TouchMove { x: x as i32 },
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => SliderEvent::Advance,
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => SliderEvent::Retreat,
        _ => return None,
    };
    Some(Action::Slider(event))
}

pub fn convert_event(event: CrosstermEvent, hits: &HitMap) -> Option<Action> {
    match event {
        CrosstermEvent::Key(key_event) => {
            trace!(
                "Key event: code={:?}, modifiers={:?}, kind={:?}",
                key_event.code, key_event.modifiers, key_event.kind
            );
            // Only presses, not releases or repeats
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            convert_key(key_event)
        }
        CrosstermEvent::Mouse(mouse_event) => convert_mouse(mouse_event, hits),
        CrosstermEvent::Resize(width, height) => Some(Action::Resize { width, height }),
        _ => None,
    }
}
