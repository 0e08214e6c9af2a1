// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shadow.
//!
//! The fixed navbar gets a deeper shadow once the page is scrolled past a
//! threshold, and the resting shadow back when it returns above it.

use crate::config::DEFAULT_NAVBAR_SHADOW_THRESHOLD_PX;
use crate::domain::ui::ScrollOffset;

/// Navbar shadow depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shadow {
    #[default]
    Resting,
    Raised,
}

impl Shadow {
    /// Returns the CSS `box-shadow` value.
    #[must_use]
    pub fn css(&self) -> &'static str {
        match self {
            Shadow::Resting => "0 4px 6px rgba(0, 0, 0, 0.1)",
            Shadow::Raised => "0 4px 15px rgba(0, 0, 0, 0.2)",
        }
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Scrolled(ScrollOffset),
}

/// Events propagated to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    ShadowChanged(Shadow),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    shadow: Shadow,
    threshold_px: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_NAVBAR_SHADOW_THRESHOLD_PX)
    }
}

impl State {
    #[must_use]
    pub fn new(threshold_px: f32) -> Self {
        Self {
            shadow: Shadow::Resting,
            threshold_px,
        }
    }

    #[must_use]
    pub fn shadow(&self) -> Shadow {
        self.shadow
    }
}

/// Process a navbar message; an event is produced only when the shadow changes.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Scrolled(offset) => {
            let shadow = if offset.is_past(state.threshold_px) {
                Shadow::Raised
            } else {
                Shadow::Resting
            };
            if shadow == state.shadow {
                return Event::None;
            }
            state.shadow = shadow;
            Event::ShadowChanged(shadow)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(state: &mut State, px: f32) -> Event {
        update(state, Message::Scrolled(ScrollOffset::new(px)))
    }

    #[test]
    fn shadow_raises_only_past_threshold() {
        let mut state = State::default();
        assert_eq!(scroll(&mut state, 50.0), Event::None);
        assert_eq!(scroll(&mut state, 51.0), Event::ShadowChanged(Shadow::Raised));
        assert_eq!(state.shadow().css(), "0 4px 15px rgba(0, 0, 0, 0.2)");
    }

    #[test]
    fn repeated_scrolls_on_same_side_emit_nothing() {
        let mut state = State::default();
        scroll(&mut state, 200.0);
        assert_eq!(scroll(&mut state, 400.0), Event::None);
        assert_eq!(scroll(&mut state, 10.0), Event::ShadowChanged(Shadow::Resting));
        assert_eq!(scroll(&mut state, 0.0), Event::None);
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut state = State::new(100.0);
        assert_eq!(scroll(&mut state, 75.0), Event::None);
        assert_eq!(scroll(&mut state, 101.0), Event::ShadowChanged(Shadow::Raised));
    }
}
