//! Screen regions and the carousel's view of them.

use std::sync::{Arc, PoisonError, RwLock};

use slider::{Controls, Extent, Measure, Rect};

/// Card size along each axis, in cells.
pub const CARD_WIDTH: u16 = 24;
pub const CARD_HEIGHT: u16 = 7;

const HEADER_ROWS: u16 = 3;
const STATUS_ROWS: u16 = 1;
const MARGIN: u16 = 2;

/// Areas of the screen, recomputed from the terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub viewport: Rect,
    pub controls: Rect,
    pub status: Rect,
}

/// Live terminal layout.
///
/// Cloned into the slider as its [`Measure`]; the runtime updates the
/// screen size on resize and every clone sees the new value.
#[derive(Debug, Clone)]
pub struct TerminalLayout {
    screen: Arc<RwLock<Extent>>,
    controls_rows: u16,
}

impl TerminalLayout {
    pub fn new(screen: Extent, controls: Controls) -> Self {
        Self {
            screen: Arc::new(RwLock::new(screen)),
            controls_rows: controls.arrows as u16 + controls.dev_panel as u16,
        }
    }

    pub fn resize(&self, screen: Extent) {
        *self.screen.write().unwrap_or_else(PoisonError::into_inner) = screen;
    }

    pub fn screen(&self) -> Extent {
        *self.screen.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn regions(&self) -> Regions {
        let screen = Rect::from_extent(self.screen());

        let header = Rect::new(0, 0, screen.width, HEADER_ROWS.min(screen.height));
        let status_y = screen.height.saturating_sub(STATUS_ROWS);
        let status = Rect::new(0, status_y, screen.width, STATUS_ROWS.min(screen.height));
        let controls_y = status_y.saturating_sub(self.controls_rows);
        let controls = Rect::new(MARGIN, controls_y, screen.width.saturating_sub(MARGIN * 2), self.controls_rows);

        let viewport = Rect::new(
            MARGIN,
            HEADER_ROWS,
            screen.width.saturating_sub(MARGIN * 2),
            controls_y.saturating_sub(HEADER_ROWS),
        );

        Regions {
            header,
            viewport,
            controls,
            status,
        }
    }
}

impl Measure for TerminalLayout {
    fn container(&self) -> Option<Extent> {
        let viewport = self.regions().viewport;
        (!viewport.is_empty()).then(|| viewport.extent())
    }

    fn item(&self) -> Option<Extent> {
        // Cards are only laid out once there is room for them
        self.container()
            .map(|_| Extent::new(CARD_WIDTH, CARD_HEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_stack_vertically() {
        let controls = Controls {
            arrows: true,
            dev_panel: true,
        };
        let layout = TerminalLayout::new(Extent::new(80, 24), controls);
        let regions = layout.regions();

        assert_eq!(regions.header, Rect::new(0, 0, 80, 3));
        assert_eq!(regions.status, Rect::new(0, 23, 80, 1));
        assert_eq!(regions.controls, Rect::new(2, 21, 76, 2));
        assert_eq!(regions.viewport, Rect::new(2, 3, 76, 18));
    }

    #[test]
    fn test_measure_follows_resize() {
        let layout = TerminalLayout::new(Extent::new(80, 24), Controls::default());
        assert_eq!(layout.container(), Some(Extent::new(76, 20)));

        let shared = layout.clone();
        layout.resize(Extent::new(50, 12));
        assert_eq!(shared.container(), Some(Extent::new(46, 8)));
    }

    #[test]
    fn test_tiny_terminal_is_unmeasured() {
        let layout = TerminalLayout::new(Extent::new(3, 3), Controls::default());
        assert_eq!(layout.container(), None);
        assert_eq!(layout.item(), None);
    }
}
