// SPDX-License-Identifier: MPL-2.0
//! Lightbox gallery navigation state.
//!
//! The [`Lightbox`] tracks which image (if any) of a fixed-size ordered
//! collection is displayed in the full-screen overlay, and computes
//! next/previous indexes with wraparound. It never raises errors:
//! out-of-range requests are silently ignored so a bad call leaves the
//! UI unchanged instead of crashing it.

use crate::gesture::SwipeDirection;

/// Navigation state for the image lightbox overlay.
///
/// Either closed, or open at a valid index into a collection of
/// `item_count` images. The rendering layer re-validates through
/// [`Lightbox::counter`] before drawing, which reports closed whenever
/// the stored index no longer fits the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    current: Option<usize>,
    item_count: usize,
}

impl Lightbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the lightbox at `index` within a collection of `item_count`
    /// images. Out-of-range indexes leave the lightbox closed.
    pub fn open(&mut self, index: usize, item_count: usize) {
        if index < item_count {
            self.current = Some(index);
            self.item_count = item_count;
        }
    }

    /// Closes the lightbox.
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Advances to the next image, wrapping to the first after the last.
    /// No-op when closed or when there is at most one image.
    pub fn next(&mut self) {
        if self.item_count <= 1 {
            return;
        }
        if let Some(index) = self.current {
            self.current = Some((index + 1) % self.item_count);
        }
    }

    /// Goes back to the previous image, wrapping to the last before the
    /// first. No-op when closed or when there is at most one image.
    pub fn previous(&mut self) {
        if self.item_count <= 1 {
            return;
        }
        if let Some(index) = self.current {
            self.current = Some((index + self.item_count - 1) % self.item_count);
        }
    }

    /// Routes a classified swipe to the matching transition.
    pub fn apply(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Left => self.next(),
            SwipeDirection::Right => self.previous(),
            SwipeDirection::Down => self.close(),
        }
    }

    /// Currently displayed index, if open.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Number of images in the collection the lightbox was opened over.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Whether the overlay should be rendered.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.counter().is_some()
    }

    /// 1-based display counter, e.g. `(2, 3)` for "2 / 3".
    ///
    /// Re-validates defensively: returns `None` when closed, when the
    /// collection is empty, or when the index points past the end of a
    /// collection that has shrunk since `open`.
    #[must_use]
    pub fn counter(&self) -> Option<(usize, usize)> {
        let index = self.current?;
        if index < self.item_count {
            Some((index + 1, self.item_count))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lightbox_is_closed() {
        let lightbox = Lightbox::new();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current(), None);
        assert_eq!(lightbox.counter(), None);
    }

    #[test]
    fn open_with_valid_index_shows_counter() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 3);
        assert!(lightbox.is_open());
        assert_eq!(lightbox.counter(), Some((1, 3)));
    }

    #[test]
    fn open_with_out_of_range_index_stays_closed() {
        let mut lightbox = Lightbox::new();
        lightbox.open(3, 3);
        assert!(!lightbox.is_open());

        lightbox.open(0, 0);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn next_wraps_around() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 3);

        lightbox.next();
        assert_eq!(lightbox.counter(), Some((2, 3)));
        lightbox.next();
        assert_eq!(lightbox.counter(), Some((3, 3)));
        lightbox.next();
        assert_eq!(lightbox.counter(), Some((1, 3))); // wraps to first
    }

    #[test]
    fn previous_wraps_around() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 3);

        lightbox.previous();
        assert_eq!(lightbox.counter(), Some((3, 3))); // wraps to last
    }

    #[test]
    fn next_then_previous_round_trips() {
        for start in 0..4 {
            let mut lightbox = Lightbox::new();
            lightbox.open(start, 4);

            lightbox.next();
            lightbox.previous();
            assert_eq!(lightbox.current(), Some(start));

            lightbox.previous();
            lightbox.next();
            assert_eq!(lightbox.current(), Some(start));
        }
    }

    #[test]
    fn navigation_is_noop_when_closed() {
        let mut lightbox = Lightbox::new();
        lightbox.next();
        lightbox.previous();
        assert_eq!(lightbox.current(), None);
    }

    #[test]
    fn navigation_is_noop_for_single_item() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 1);

        lightbox.next();
        assert_eq!(lightbox.counter(), Some((1, 1)));
        lightbox.previous();
        assert_eq!(lightbox.counter(), Some((1, 1)));
    }

    #[test]
    fn close_clears_current_index() {
        let mut lightbox = Lightbox::new();
        lightbox.open(2, 3);
        lightbox.close();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current(), None);
    }

    #[test]
    fn swipe_left_advances_and_right_goes_back() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0, 3);

        lightbox.apply(SwipeDirection::Left);
        assert_eq!(lightbox.counter(), Some((2, 3)));

        lightbox.apply(SwipeDirection::Right);
        assert_eq!(lightbox.counter(), Some((1, 3)));
    }

    #[test]
    fn swipe_down_closes() {
        let mut lightbox = Lightbox::new();
        lightbox.open(1, 3);
        lightbox.apply(SwipeDirection::Down);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn counter_reports_closed_when_collection_shrank() {
        let mut lightbox = Lightbox::new();
        lightbox.open(2, 3);

        // The backing collection shrank; the stored index is now stale.
        lightbox.item_count = 2;
        assert_eq!(lightbox.counter(), None);
        assert!(!lightbox.is_open());
    }
}
