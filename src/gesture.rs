// SPDX-License-Identifier: MPL-2.0
//! Touch-swipe gesture classification.
//!
//! The [`SwipeTracker`] converts a touch-start/touch-end coordinate pair
//! into a directional intent. It owns a single pending start point and
//! discards it after every classification, so each gesture needs a fresh
//! start before the next one is interpreted.
//!
//! The threshold comparison is `>=` on both axes: a movement whose
//! distance equals the threshold exactly does trigger. The opposing axis
//! must stay strictly below the threshold, which rejects diagonal
//! movement where both axes reach it simultaneously.

/// Default swipe distance threshold in logical pixels.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// A single 2D coordinate sample taken at gesture start or gesture end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Directional intent produced by a classified swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Swipe left: advance to the next item.
    Left,
    /// Swipe right: go back to the previous item.
    Right,
    /// Swipe down: dismiss the current view.
    Down,
}

/// Configuration for one gesture classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Minimum movement distance before a swipe is recognized.
    pub threshold_px: f32,
    /// Number of items reachable by horizontal navigation. Horizontal
    /// swipes are suppressed when there is at most one item; down-swipes
    /// are always allowed.
    pub navigable_items: usize,
}

impl SwipeConfig {
    /// Creates a config with the default threshold.
    #[must_use]
    pub fn new(navigable_items: usize) -> Self {
        Self {
            threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            navigable_items,
        }
    }
}

/// Interprets raw touch start/end pairs as discrete swipe directions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<TouchPoint>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the start of a gesture, replacing any pending start point.
    pub fn touch_started(&mut self, point: TouchPoint) {
        self.start = Some(point);
    }

    /// Classifies the gesture ending at `end` and clears the stored
    /// start point.
    ///
    /// Returns `None` when no start point was recorded, when the
    /// movement stays below the threshold on both axes, when both axes
    /// reach the threshold simultaneously (diagonal), for upward
    /// movement, and for horizontal movement over a single-item
    /// collection.
    pub fn touch_ended(&mut self, end: TouchPoint, config: &SwipeConfig) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        classify(start, end, config)
    }

    /// Discards any pending start point (e.g. the platform lost the touch).
    pub fn reset(&mut self) {
        self.start = None;
    }

    /// Whether a gesture is currently in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

/// Pure classification of a completed gesture. First match wins.
fn classify(start: TouchPoint, end: TouchPoint, config: &SwipeConfig) -> Option<SwipeDirection> {
    // Positive dx = leftward movement, positive dy = downward movement.
    let dx = start.x - end.x;
    let dy = end.y - start.y;
    let threshold = config.threshold_px;

    if dy >= threshold && dx.abs() < threshold {
        return Some(SwipeDirection::Down);
    }

    if config.navigable_items > 1 && dx.abs() >= threshold && dy.abs() < threshold {
        return Some(if dx > 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(start: (f32, f32), end: (f32, f32), items: usize) -> Option<SwipeDirection> {
        let mut tracker = SwipeTracker::new();
        tracker.touch_started(TouchPoint::new(start.0, start.1));
        tracker.touch_ended(TouchPoint::new(end.0, end.1), &SwipeConfig::new(items))
    }

    #[test]
    fn leftward_movement_past_threshold_is_left() {
        assert_eq!(
            swipe((200.0, 100.0), (100.0, 100.0), 3),
            Some(SwipeDirection::Left)
        );
    }

    #[test]
    fn rightward_movement_past_threshold_is_right() {
        assert_eq!(
            swipe((100.0, 100.0), (200.0, 100.0), 3),
            Some(SwipeDirection::Right)
        );
    }

    #[test]
    fn downward_movement_past_threshold_is_down() {
        assert_eq!(
            swipe((100.0, 100.0), (100.0, 200.0), 3),
            Some(SwipeDirection::Down)
        );
    }

    #[test]
    fn distance_exactly_at_threshold_triggers() {
        // Horizontal distance of exactly 50 must classify (>= convention).
        assert_eq!(
            swipe((100.0, 100.0), (50.0, 100.0), 3),
            Some(SwipeDirection::Left)
        );
        // Same convention on the vertical axis.
        assert_eq!(
            swipe((100.0, 100.0), (100.0, 150.0), 3),
            Some(SwipeDirection::Down)
        );
    }

    #[test]
    fn movement_below_threshold_is_ignored() {
        assert_eq!(swipe((100.0, 100.0), (90.0, 100.0), 3), None);
        assert_eq!(swipe((100.0, 100.0), (100.0, 110.0), 3), None);
    }

    #[test]
    fn diagonal_movement_on_both_axes_is_ignored() {
        assert_eq!(swipe((200.0, 100.0), (100.0, 200.0), 3), None);
    }

    #[test]
    fn upward_movement_is_ignored() {
        assert_eq!(swipe((100.0, 200.0), (100.0, 100.0), 3), None);
    }

    #[test]
    fn horizontal_swipe_suppressed_for_single_item() {
        assert_eq!(swipe((200.0, 100.0), (100.0, 100.0), 1), None);
        assert_eq!(swipe((100.0, 100.0), (200.0, 100.0), 0), None);
    }

    #[test]
    fn down_swipe_allowed_for_single_item() {
        assert_eq!(
            swipe((100.0, 100.0), (100.0, 200.0), 1),
            Some(SwipeDirection::Down)
        );
    }

    #[test]
    fn end_without_start_yields_none() {
        let mut tracker = SwipeTracker::new();
        let result = tracker.touch_ended(TouchPoint::new(0.0, 0.0), &SwipeConfig::new(3));
        assert_eq!(result, None);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn classification_discards_the_start_point() {
        let mut tracker = SwipeTracker::new();
        let config = SwipeConfig::new(3);

        tracker.touch_started(TouchPoint::new(200.0, 100.0));
        let first = tracker.touch_ended(TouchPoint::new(100.0, 100.0), &config);
        assert_eq!(first, Some(SwipeDirection::Left));

        // Without a fresh start the same end point classifies to nothing.
        let second = tracker.touch_ended(TouchPoint::new(100.0, 100.0), &config);
        assert_eq!(second, None);
    }

    #[test]
    fn reset_clears_pending_gesture() {
        let mut tracker = SwipeTracker::new();
        tracker.touch_started(TouchPoint::new(200.0, 100.0));
        assert!(tracker.is_tracking());

        tracker.reset();
        assert!(!tracker.is_tracking());
        assert_eq!(
            tracker.touch_ended(TouchPoint::new(100.0, 100.0), &SwipeConfig::new(3)),
            None
        );
    }

    #[test]
    fn new_start_replaces_pending_start() {
        let mut tracker = SwipeTracker::new();
        tracker.touch_started(TouchPoint::new(500.0, 100.0));
        tracker.touch_started(TouchPoint::new(110.0, 100.0));

        // Classified against the second start: distance 10, below threshold.
        assert_eq!(
            tracker.touch_ended(TouchPoint::new(100.0, 100.0), &SwipeConfig::new(3)),
            None
        );
    }
}
