//! Swipe detection.

use log::trace;

/// Minimum travel, in pixels, before a move counts as a swipe.
pub const SWIPE_THRESHOLD: i32 = 2;

/// Direction of a detected swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved towards the start of the axis; show the next item.
    Forward,
    /// Finger moved towards the end of the axis; show the previous item.
    Backward,
}

/// Tracks the origin of an in-progress touch gesture.
///
/// Only the first move after a touch-start is considered. The origin is
/// cleared afterwards whether or not the move crossed the threshold, so a
/// gesture produces at most one step however far the finger keeps going.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeTracker {
    origin: Option<i32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, x: i32) {
        trace!("Touch start at {}", x);
        self.origin = Some(x);
    }

    pub fn origin(&self) -> Option<i32> {
        self.origin
    }

    /// Resolve a move event against the recorded origin.
    pub fn moved(&mut self, x: i32) -> Option<Swipe> {
        let origin = self.origin.take()?;
        let diff = origin - x;
        trace!("Touch move to {} (diff {})", x, diff);

        if diff > SWIPE_THRESHOLD {
            Some(Swipe::Forward)
        } else if diff < -SWIPE_THRESHOLD {
            Some(Swipe::Backward)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leftward_swipe_goes_forward() {
        let mut tracker = SwipeTracker::new();
        tracker.start(100);
        assert_eq!(tracker.moved(95), Some(Swipe::Forward));
    }

    #[test]
    fn test_rightward_swipe_goes_backward() {
        let mut tracker = SwipeTracker::new();
        tracker.start(100);
        assert_eq!(tracker.moved(104), Some(Swipe::Backward));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut tracker = SwipeTracker::new();
        tracker.start(100);
        assert_eq!(tracker.moved(98), None);
        tracker.start(100);
        assert_eq!(tracker.moved(99), None);
        tracker.start(100);
        assert_eq!(tracker.moved(102), None);
    }

    #[test]
    fn test_origin_cleared_after_first_move() {
        let mut tracker = SwipeTracker::new();
        tracker.start(100);
        assert_eq!(tracker.moved(99), None);
        assert_eq!(tracker.origin(), None);
        // Further travel in the same gesture is ignored
        assert_eq!(tracker.moved(40), None);
    }

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.moved(0), None);
    }
}
