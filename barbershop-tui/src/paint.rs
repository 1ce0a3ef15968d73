//! Draw the page into a [`Buffer`].

use std::time::Duration;

use crossterm::style::Color;
use slider::{ItemSlot, Orientation, Rect, Track};

use crate::buffer::{Buffer, Pen};
use crate::content::Card;
use crate::layout::{CARD_HEIGHT, CARD_WIDTH, Regions};

const GOLD: Color = Color::Rgb {
    r: 212,
    g: 175,
    b: 55,
};
const MUTED: Color = Color::Rgb {
    r: 140,
    g: 140,
    b: 140,
};
const TEXT: Color = Color::Rgb {
    r: 235,
    g: 235,
    b: 235,
};

/// Clickable areas from the last paint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitMap {
    pub viewport: Rect,
    pub previous: Option<Rect>,
    pub next: Option<Rect>,
    pub horizontal: Option<Rect>,
    pub vertical: Option<Rect>,
}

/// Everything the painter needs besides the buffer.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub regions: Regions,
    pub track: &'a Track,
    pub cards: &'a [Card],
    pub auto_play: Option<Duration>,
}

pub fn paint(buffer: &mut Buffer, scene: &Scene<'_>) -> HitMap {
    let mut hits = HitMap {
        viewport: scene.regions.viewport,
        ..Default::default()
    };

    paint_header(buffer, scene.regions.header);
    paint_track(buffer, scene);
    paint_controls(buffer, scene, &mut hits);
    paint_status(buffer, scene);

    hits
}

fn paint_header(buffer: &mut Buffer, area: Rect) {
    if area.is_empty() {
        return;
    }
    let clip = (area.x as i32, area.right() as i32);
    buffer.put_str(2, area.y as i32, "DN BARBER SHOP", Pen::fg(GOLD).bold(), clip);
    if area.height > 1 {
        buffer.put_str(
            2,
            area.y as i32 + 1,
            "←/→ navigate · r reset · o orientation · a auto-play · q quit",
            Pen::fg(MUTED).dim(),
            clip,
        );
    }
}

fn paint_track(buffer: &mut Buffer, scene: &Scene<'_>) {
    let viewport = scene.regions.viewport;
    if viewport.is_empty() {
        return;
    }

    let track = scene.track;
    let cross = track.min_cross.unwrap_or(0);
    for slot in &track.items {
        let Some(card) = scene.cards.get(slot.index) else {
            continue;
        };
        let frame = card_frame(viewport, track.orientation, slot, cross);
        draw_card(buffer, viewport, frame, card, track.selected == Some(slot.index));
    }
}

/// Card rectangle in screen coordinates, possibly partly off the viewport.
fn card_frame(viewport: Rect, orientation: Orientation, slot: &ItemSlot, cross: u16) -> (i32, i32, i32, i32) {
    match orientation {
        Orientation::Horizontal => {
            let height = CARD_HEIGHT.max(cross).min(viewport.height);
            (viewport.x as i32 + slot.start, viewport.y as i32, slot.extent as i32, height as i32)
        }
        Orientation::Vertical => {
            let width = CARD_WIDTH.max(cross).max(viewport.width / 2).min(viewport.width);
            (viewport.x as i32, viewport.y as i32 + slot.start, width as i32, slot.extent as i32)
        }
    }
}

fn draw_card(buffer: &mut Buffer, clip: Rect, frame: (i32, i32, i32, i32), card: &Card, selected: bool) {
    let (x, y, width, height) = frame;
    if width < 2 || height < 2 {
        return;
    }

    let inside = |cx: i32, cy: i32| {
        cx >= clip.x as i32 && cx < clip.right() as i32 && cy >= clip.y as i32 && cy < clip.bottom() as i32
    };
    let border = if selected {
        Pen::fg(GOLD).bold()
    } else {
        Pen::fg(MUTED)
    };

    let right = x + width - 1;
    let bottom = y + height - 1;
    for cy in y..=bottom {
        for cx in x..=right {
            let ch = match (cx == x, cx == right, cy == y, cy == bottom) {
                (true, _, true, _) => '┌',
                (_, true, true, _) => '┐',
                (true, _, _, true) => '└',
                (_, true, _, true) => '┘',
                (_, _, true, _) | (_, _, _, true) => '─',
                (true, _, _, _) | (_, true, _, _) => '│',
                _ => continue,
            };
            if inside(cx, cy) {
                buffer.paint(cx, cy, ch, border);
            }
        }
    }

    let text_clip = (
        (x + 1).max(clip.x as i32),
        right.min(clip.right() as i32),
    );
    let rows = std::iter::once((card.title, Pen::fg(GOLD).bold()))
        .chain(card.lines.iter().map(|line| (*line, Pen::fg(TEXT))));
    for (row, (text, pen)) in rows.enumerate() {
        let cy = y + 1 + row as i32;
        if cy >= bottom {
            break;
        }
        if cy < clip.y as i32 || cy >= clip.bottom() as i32 {
            continue;
        }
        buffer.put_str(x + 2, cy, text, pen, text_clip);
    }
}

fn paint_controls(buffer: &mut Buffer, scene: &Scene<'_>, hits: &mut HitMap) {
    let area = scene.regions.controls;
    let controls = scene.track.controls;
    if area.is_empty() || !controls.any() {
        return;
    }

    let clip = (area.x as i32, area.right() as i32);
    let mut y = area.y;

    if controls.arrows {
        let pen = Pen::fg(TEXT).bold();
        let start = area.x as i32;
        let end = buffer.put_str(start, y as i32, "◀ Previous", pen, clip);
        hits.previous = Some(Rect::new(start as u16, y, (end - start) as u16, 1));

        let start = end + 3;
        let end = buffer.put_str(start, y as i32, "Next ▶", pen, clip);
        hits.next = Some(Rect::new(start as u16, y, (end - start).max(0) as u16, 1));
        y += 1;
    }

    if controls.dev_panel && y < area.bottom() {
        let current = scene.track.orientation;
        let radio = |orientation: Orientation| {
            if orientation == current {
                format!("(•) {}", orientation.label())
            } else {
                format!("( ) {}", orientation.label())
            }
        };

        let label_end = buffer.put_str(area.x as i32, y as i32, "Orientation: ", Pen::fg(MUTED), clip);
        let start = label_end;
        let end = buffer.put_str(start, y as i32, &radio(Orientation::Horizontal), Pen::fg(TEXT), clip);
        hits.horizontal = Some(Rect::new(start as u16, y, (end - start).max(0) as u16, 1));

        let start = end + 2;
        let end = buffer.put_str(start, y as i32, &radio(Orientation::Vertical), Pen::fg(TEXT), clip);
        hits.vertical = Some(Rect::new(start as u16, y, (end - start).max(0) as u16, 1));
    }
}

fn paint_status(buffer: &mut Buffer, scene: &Scene<'_>) {
    let area = scene.regions.status;
    if area.is_empty() {
        return;
    }

    let position = match scene.track.selected {
        Some(index) => format!("card {}/{}", index + 1, scene.track.items.len()),
        None => "no cards".to_string(),
    };
    let auto_play = match scene.auto_play {
        Some(interval) => format!("auto-play every {} ms", interval.as_millis()),
        None => "auto-play off".to_string(),
    };
    let text = format!("{} · {} · {}", position, auto_play, scene.track.orientation.label());

    let clip = (area.x as i32, area.right() as i32);
    buffer.put_str(2, area.y as i32, &text, Pen::fg(MUTED), clip);
}
