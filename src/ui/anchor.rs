// SPDX-License-Identifier: MPL-2.0
//! In-page anchor navigation.
//!
//! Clicks on `#id` links cancel the jump and request a smooth scroll to the
//! target element instead, when that element exists.

use std::collections::BTreeSet;

/// Scroll animation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

/// Vertical alignment of the target after scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
}

/// Request to bring an element into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: String,
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Clicked { href: String },
}

/// Events propagated to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Not an in-page link; default navigation is left alone.
    Ignored,
    /// Navigation cancelled but the target does not exist.
    Suppressed,
    /// Navigation cancelled and a smooth scroll requested.
    ScrollTo(ScrollRequest),
}

impl Event {
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Event::Ignored)
    }
}

/// Element ids present on the page.
#[derive(Debug, Clone, Default)]
pub struct State {
    targets: BTreeSet<String>,
}

impl State {
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn has_target(&self, id: &str) -> bool {
        self.targets.contains(id)
    }
}

/// Returns whether `href` is an in-page link (starts with `#`).
#[must_use]
pub fn is_in_page(href: &str) -> bool {
    href.starts_with('#')
}

pub fn update(state: &State, message: Message) -> Event {
    match message {
        Message::Clicked { href } => {
            if !is_in_page(&href) {
                return Event::Ignored;
            }
            let id = &href[1..];
            if id.is_empty() || !state.has_target(id) {
                return Event::Suppressed;
            }
            Event::ScrollTo(ScrollRequest {
                target: id.to_string(),
                behavior: ScrollBehavior::Smooth,
                block: ScrollBlock::Start,
            })
        }
    }
}
