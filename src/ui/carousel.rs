// SPDX-License-Identifier: MPL-2.0
//! Rotating carousel.
//!
//! Shows one item at a time and advances on a fixed interval. A carousel
//! with fewer than two items never rotates.

use crate::config::DEFAULT_CAROUSEL_INTERVAL_MS;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Interval elapsed.
    Tick,
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The item at this index is now the only one displayed.
    Shown(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    count: usize,
    interval: Duration,
}

impl Carousel {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self::with_interval(count, Duration::from_millis(DEFAULT_CAROUSEL_INTERVAL_MS))
    }

    #[must_use]
    pub fn with_interval(count: usize, interval: Duration) -> Self {
        Self {
            index: 0,
            count,
            interval,
        }
    }

    /// Returns whether the carousel rotates at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.count > 1
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns whether item `i` is the one displayed.
    #[must_use]
    pub fn is_visible(&self, i: usize) -> bool {
        self.is_active() && i == self.index
    }

    /// Returns the CSS `display` value for item `i`.
    #[must_use]
    pub fn display(&self, i: usize) -> &'static str {
        if self.is_visible(i) {
            "block"
        } else {
            "none"
        }
    }
}

pub fn update(carousel: &mut Carousel, message: Message) -> Event {
    if !carousel.is_active() {
        return Event::None;
    }
    carousel.index = match message {
        Message::Tick | Message::Next => (carousel.index + 1) % carousel.count,
        Message::Previous => (carousel.index + carousel.count - 1) % carousel.count,
    };
    Event::Shown(carousel.index)
}
