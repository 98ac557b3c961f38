//! Gesture accumulation
//!
//! Converts continuous input deltas (wheel, touch-move) into discrete
//! navigation intents once the accumulated magnitude crosses a threshold.

use crate::config::Axis;

/// Discrete navigation intent produced by the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Not enough accumulated movement yet
    None,
    /// Move to the next page
    Advance,
    /// Move to the previous page
    Retreat,
}

/// Stateful converter from raw input deltas to navigation intents
///
/// The accumulated delta is reset only on a committed page change, never on
/// merely crossing the threshold: an intent rejected by the controller (e.g.
/// while the transition lock is held) leaves the accumulated value in place.
#[derive(Debug)]
pub struct GestureAccumulator {
    axis: Axis,
    threshold: f32,
    delta: f32,
}

impl GestureAccumulator {
    pub fn new(axis: Axis, threshold: f32) -> Self {
        Self {
            axis,
            threshold,
            delta: 0.0,
        }
    }

    /// Feed one input event; selects the configured axis component
    pub fn feed(&mut self, dx: f32, dy: f32) -> Intent {
        let component = match self.axis {
            Axis::Vertical => dy,
            Axis::Horizontal => dx,
        };
        self.delta += component;

        if self.delta > self.threshold {
            Intent::Advance
        } else if self.delta < -self.threshold {
            Intent::Retreat
        } else {
            Intent::None
        }
    }

    /// Clear the accumulated delta; called by the controller on a committed
    /// page change regardless of which trigger caused it
    pub fn reset(&mut self) {
        self.delta = 0.0;
    }

    /// Currently accumulated delta along the configured axis
    pub fn pending(&self) -> f32 {
        self.delta
    }
}

/// Rolling reference point for touch input
///
/// Each touch-move yields the movement of that segment only
/// (`previous - current`), not the total drag distance from touch-start.
#[derive(Debug, Default)]
pub struct TouchTracker {
    last: Option<(f32, f32)>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the initial contact point
    pub fn begin(&mut self, x: f32, y: f32) {
        self.last = Some((x, y));
    }

    /// Movement since the previous point, updating the reference.
    /// Returns `None` when no touch is in progress.
    pub fn motion(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let (px, py) = self.last?;
        self.last = Some((x, y));
        Some((px - x, py - y))
    }

    /// Forget the reference point when the touch lifts or is cancelled
    pub fn end(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_event_past_threshold_advances() {
        let mut acc = GestureAccumulator::new(Axis::Vertical, 100.0);
        assert_eq!(acc.feed(0.0, 150.0), Intent::Advance);
    }

    #[test]
    fn test_cumulative_threshold_crossing() {
        let mut acc = GestureAccumulator::new(Axis::Vertical, 100.0);
        assert_eq!(acc.feed(0.0, 60.0), Intent::None);
        assert_eq!(acc.feed(0.0, 50.0), Intent::Advance);
    }

    #[test]
    fn test_retreat_on_negative_accumulation() {
        let mut acc = GestureAccumulator::new(Axis::Vertical, 100.0);
        assert_eq!(acc.feed(0.0, -70.0), Intent::None);
        assert_eq!(acc.feed(0.0, -70.0), Intent::Retreat);
    }

    #[test]
    fn test_horizontal_axis_ignores_vertical_component() {
        let mut acc = GestureAccumulator::new(Axis::Horizontal, 100.0);
        assert_eq!(acc.feed(0.0, 500.0), Intent::None);
        assert_eq!(acc.feed(120.0, 0.0), Intent::Advance);
    }

    #[test]
    fn test_delta_preserved_until_reset() {
        let mut acc = GestureAccumulator::new(Axis::Vertical, 100.0);
        assert_eq!(acc.feed(0.0, 150.0), Intent::Advance);
        // Intent was not committed; the accumulated value stays put and the
        // next event re-triggers immediately.
        assert_eq!(acc.feed(0.0, 1.0), Intent::Advance);
        acc.reset();
        assert_eq!(acc.pending(), 0.0);
        assert_eq!(acc.feed(0.0, 1.0), Intent::None);
    }

    #[test]
    fn test_opposite_movement_cancels_out() {
        let mut acc = GestureAccumulator::new(Axis::Vertical, 100.0);
        assert_eq!(acc.feed(0.0, 80.0), Intent::None);
        assert_eq!(acc.feed(0.0, -80.0), Intent::None);
        assert_eq!(acc.pending(), 0.0);
    }

    #[test]
    fn test_touch_tracker_uses_segment_movement() {
        let mut touch = TouchTracker::new();
        assert_eq!(touch.motion(10.0, 10.0), None);

        touch.begin(0.0, 100.0);
        // Finger moves up: previous - current is positive (advance direction)
        assert_eq!(touch.motion(0.0, 60.0), Some((0.0, 40.0)));
        // Delta reflects this segment only, not the distance from touch-start
        assert_eq!(touch.motion(0.0, 50.0), Some((0.0, 10.0)));

        touch.end();
        assert_eq!(touch.motion(0.0, 0.0), None);
    }
}
