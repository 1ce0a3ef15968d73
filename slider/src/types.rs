use serde::Deserialize;

/// Axis the carousel lays its items out along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn toggle(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Size of `extent` along this axis.
    pub fn axis_of(self, extent: Extent) -> u16 {
        match self {
            Orientation::Horizontal => extent.width,
            Orientation::Vertical => extent.height,
        }
    }

    /// Size of `extent` across this axis.
    pub fn cross_of(self, extent: Extent) -> u16 {
        match self {
            Orientation::Horizontal => extent.height,
            Orientation::Vertical => extent.width,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Measured size of a rendered box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Extent {
    pub width: u16,
    pub height: u16,
}

impl Extent {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_extent(extent: Extent) -> Self {
        Self::new(0, 0, extent.width, extent.height)
    }

    pub const fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_follows_orientation() {
        let extent = Extent::new(30, 8);
        assert_eq!(Orientation::Horizontal.axis_of(extent), 30);
        assert_eq!(Orientation::Vertical.axis_of(extent), 8);
        assert_eq!(Orientation::Horizontal.cross_of(extent), 8);
        assert_eq!(Orientation::Vertical.cross_of(extent), 30);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Orientation::Horizontal.toggle(), Orientation::Vertical);
        assert_eq!(Orientation::Horizontal.toggle().toggle(), Orientation::Horizontal);
    }

    #[test]
    fn test_rect_contains_excludes_far_edges() {
        let rect = Rect::new(2, 2, 4, 4);
        assert!(rect.contains(2, 2));
        assert!(rect.contains(5, 5));
        assert!(!rect.contains(6, 5));
        assert!(!rect.contains(5, 6));
    }
}
