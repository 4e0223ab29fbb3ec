//! Hero carousel state machine.
//!
//! The carousel is an index into an externally supplied slide sequence of
//! length `len`. With no slides there is no current index and every transition
//! is a no-op. Transitions wrap at both ends.

use thiserror::Error;

/// The browser refused to start playback on its own (autoplay policy).
///
/// Only ever logged: the slide still changes and shows its first frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("autoplay was rejected: {0}")]
pub struct PlaybackError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the slide on screen, `None` when there are no slides.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Moves to the next slide, wrapping to the first. Returns the new index.
    pub fn advance(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Moves to the previous slide, wrapping to the last. Returns the new index.
    pub fn retreat(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + self.len - 1) % self.len;
        Some(self.index)
    }

    /// Jumps straight to `index` when it is in range.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.index = index;
        Some(self.index)
    }

    /// Applies a new slide sequence length. The index survives while it stays
    /// in range, otherwise it is reset to the first slide.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }

    /// Previous/next controls are only offered when there is somewhere to go.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    /// One `(slide index, is active)` entry per slide for the position dots.
    pub fn indicators(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.len).map(move |i| (i, i == self.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_len_times_closes_the_cycle() {
        for len in 1..6 {
            for start in 0..len {
                let mut carousel = Carousel::new(len);
                carousel.select(start);
                for _ in 0..len {
                    carousel.advance();
                }
                assert_eq!(carousel.current(), Some(start));
            }
        }
    }

    #[test]
    fn retreat_then_advance_is_identity() {
        for len in 1..6 {
            for start in 0..len {
                let mut carousel = Carousel::new(len);
                carousel.select(start);
                carousel.retreat();
                carousel.advance();
                assert_eq!(carousel.current(), Some(start));
            }
        }
    }

    #[test]
    fn advance_wraps_from_last_to_first() {
        let mut carousel = Carousel::new(3);
        carousel.select(2);
        assert_eq!(carousel.advance(), Some(0));
    }

    #[test]
    fn retreat_wraps_from_first_to_last() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.retreat(), Some(2));
    }

    #[test]
    fn empty_carousel_ignores_transitions() {
        let mut carousel = Carousel::new(0);
        let before = carousel;
        assert_eq!(carousel.advance(), None);
        assert_eq!(carousel.retreat(), None);
        assert_eq!(carousel.select(0), None);
        assert_eq!(carousel, before);
        assert_eq!(carousel.current(), None);
        assert_eq!(carousel.indicators().count(), 0);
    }

    #[test]
    fn single_slide_has_no_controls_but_replays() {
        let mut carousel = Carousel::new(1);
        assert!(!carousel.has_controls());
        assert_eq!(carousel.advance(), Some(0));
        assert!(Carousel::new(2).has_controls());
    }

    #[test]
    fn indicators_mark_the_active_slide() {
        let mut carousel = Carousel::new(3);
        carousel.advance();
        let dots: Vec<(usize, bool)> = carousel.indicators().collect();
        assert_eq!(dots, vec![(0, false), (1, true), (2, false)]);
    }

    #[test]
    fn shrinking_resets_an_out_of_range_index() {
        let mut carousel = Carousel::new(4);
        carousel.select(3);
        carousel.set_len(2);
        assert_eq!(carousel.current(), Some(0));

        carousel.select(1);
        carousel.set_len(5);
        assert_eq!(carousel.current(), Some(1));

        carousel.set_len(0);
        assert_eq!(carousel.current(), None);
    }
}
