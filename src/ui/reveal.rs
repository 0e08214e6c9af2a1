// SPDX-License-Identifier: MPL-2.0
//! Reveal-on-scroll for feature cards.
//!
//! Observed elements start hidden and shifted down. The first time one
//! becomes visible enough it is revealed and no longer observed.

use crate::config::DEFAULT_REVEAL_THRESHOLD;
use crate::domain::ui::VisibilityRatio;
use std::collections::BTreeSet;

/// Inline style applied to an observed element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
    pub transition: Option<&'static str>,
}

impl ElementStyle {
    /// Style set when observation starts.
    pub const HIDDEN: Self = Self {
        opacity: "0",
        transform: "translateY(30px)",
        transition: Some("opacity 0.5s ease, transform 0.5s ease"),
    };

    /// Style set once the element is revealed.
    pub const REVEALED: Self = Self {
        opacity: "1",
        transform: "translateY(0)",
        transition: None,
    };
}

/// One viewport intersection report.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: String,
    pub is_intersecting: bool,
    pub ratio: VisibilityRatio,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<String>, is_intersecting: bool, ratio: f32) -> Self {
        Self {
            target: target.into(),
            is_intersecting,
            ratio: VisibilityRatio::new(ratio),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Intersections(Vec<IntersectionEntry>),
}

/// Events propagated to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// These elements were revealed, in entry order.
    Revealed(Vec<String>),
}

/// Tracks elements still waiting to be revealed.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: VisibilityRatio,
    observed: BTreeSet<String>,
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self::new(VisibilityRatio::new(DEFAULT_REVEAL_THRESHOLD))
    }
}

impl RevealObserver {
    #[must_use]
    pub fn new(threshold: VisibilityRatio) -> Self {
        Self {
            threshold,
            observed: BTreeSet::new(),
        }
    }

    /// Starts observing `id` and returns the style it starts with.
    pub fn observe(&mut self, id: impl Into<String>) -> ElementStyle {
        self.observed.insert(id.into());
        ElementStyle::HIDDEN
    }

    #[must_use]
    pub fn is_observing(&self, id: &str) -> bool {
        self.observed.contains(id)
    }

    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }
}

pub fn update(observer: &mut RevealObserver, message: Message) -> Event {
    match message {
        Message::Intersections(entries) => {
            let mut revealed = Vec::new();
            for entry in entries {
                if !entry.is_intersecting || !entry.ratio.reaches(observer.threshold) {
                    continue;
                }
                // Unobserve on first reveal; later entries for it are ignored.
                if observer.observed.remove(&entry.target) {
                    revealed.push(entry.target);
                }
            }
            if revealed.is_empty() {
                Event::None
            } else {
                Event::Revealed(revealed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer_with(ids: &[&str]) -> RevealObserver {
        let mut observer = RevealObserver::default();
        for id in ids {
            assert_eq!(observer.observe(*id), ElementStyle::HIDDEN);
        }
        observer
    }

    #[test]
    fn visible_element_is_revealed_once() {
        let mut observer = observer_with(&["card-1", "card-2"]);

        let event = update(
            &mut observer,
            Message::Intersections(vec![IntersectionEntry::new("card-1", true, 0.25)]),
        );
        assert_eq!(event, Event::Revealed(vec!["card-1".into()]));
        assert!(!observer.is_observing("card-1"));
        assert!(observer.is_observing("card-2"));

        let again = update(
            &mut observer,
            Message::Intersections(vec![IntersectionEntry::new("card-1", true, 1.0)]),
        );
        assert_eq!(again, Event::None);
    }

    #[test]
    fn below_threshold_or_not_intersecting_is_ignored() {
        let mut observer = observer_with(&["card"]);
        let event = update(
            &mut observer,
            Message::Intersections(vec![
                IntersectionEntry::new("card", true, 0.05),
                IntersectionEntry::new("card", false, 0.5),
            ]),
        );
        assert_eq!(event, Event::None);
        assert_eq!(observer.observed_count(), 1);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut observer = observer_with(&["card"]);
        let event = update(
            &mut observer,
            Message::Intersections(vec![IntersectionEntry::new("card", true, 0.1)]),
        );
        assert_eq!(event, Event::Revealed(vec!["card".into()]));
    }

    #[test]
    fn unobserved_elements_are_ignored() {
        let mut observer = observer_with(&[]);
        let event = update(
            &mut observer,
            Message::Intersections(vec![IntersectionEntry::new("stranger", true, 1.0)]),
        );
        assert_eq!(event, Event::None);
    }
}
