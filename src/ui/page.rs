// SPDX-License-Identifier: MPL-2.0
//! The classifier page: wires each component to its trigger.
//!
//! A [`Page`] is mounted from a [`PageLayout`] describing which elements
//! exist. Components whose element is missing are simply not wired, and
//! triggers aimed at them produce no effects. Every trigger is handled
//! synchronously to completion before `dispatch` returns.

use crate::config::Config;
use crate::domain::format::format_size_limit;
use crate::domain::ui::ScrollOffset;
use crate::domain::upload::{RejectionReason, SelectedFile, ValidationPolicy};
use crate::i18n::I18n;
use crate::ui::anchor::{self, ScrollRequest};
use crate::ui::carousel::{self, Carousel};
use crate::ui::file_input;
use crate::ui::navbar;
use crate::ui::reveal::{self, ElementStyle, IntersectionEntry, RevealObserver};
use crate::ui::upload_form::{self, FormSubmission, SubmitButton};
use std::time::Duration;

/// Elements present on the page.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// The `image` file input.
    pub file_input: bool,
    /// The label showing the chosen file name.
    pub file_label: bool,
    pub upload_form: bool,
    pub submit_button: bool,
    pub navbar: bool,
    /// Whether the page has `#id` links.
    pub anchor_links: bool,
    /// Ids of elements that in-page links may target.
    pub element_ids: Vec<String>,
    /// Ids of the cards revealed on scroll.
    pub feature_cards: Vec<String>,
    /// Number of carousel items, when a carousel exists.
    pub carousel_items: Option<usize>,
}

impl PageLayout {
    /// The prediction page: upload form, navbar, section links and feature cards.
    #[must_use]
    pub fn classifier() -> Self {
        Self {
            file_input: true,
            file_label: true,
            upload_form: true,
            submit_button: true,
            navbar: true,
            anchor_links: true,
            element_ids: ["home", "about", "upload"].map(String::from).to_vec(),
            feature_cards: ["feature-accuracy", "feature-speed", "feature-vegetables"]
                .map(String::from)
                .to_vec(),
            carousel_items: None,
        }
    }
}

/// Kinds of triggers a page can be wired for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    FileChanged,
    Submit,
    AnchorClicked,
    Scrolled,
    Intersections,
    CarouselTick,
}

/// A registered handler; `every` is set for interval-driven triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    pub trigger: TriggerKind,
    pub every: Option<Duration>,
}

/// Typed event payloads delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    FileChanged(Option<SelectedFile>),
    Submit,
    AnchorClicked { href: String },
    Scrolled(ScrollOffset),
    Intersections(Vec<IntersectionEntry>),
    CarouselTick,
}

impl Trigger {
    #[must_use]
    pub fn kind(&self) -> TriggerKind {
        match self {
            Trigger::FileChanged(_) => TriggerKind::FileChanged,
            Trigger::Submit => TriggerKind::Submit,
            Trigger::AnchorClicked { .. } => TriggerKind::AnchorClicked,
            Trigger::Scrolled(_) => TriggerKind::Scrolled,
            Trigger::Intersections(_) => TriggerKind::Intersections,
            Trigger::CarouselTick => TriggerKind::CarouselTick,
        }
    }
}

/// Changes the host applies to the page, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetFileLabel(String),
    /// Cancel the event's default action (navigation or form submission).
    PreventDefault,
    /// Blocking alert with a user-facing message.
    Alert(String),
    SetSubmitButton { label: String, disabled: bool },
    /// Let the form go to the classification server.
    Submit(FormSubmission),
    ScrollIntoView(ScrollRequest),
    SetNavbarShadow(&'static str),
    SetStyle { element: String, style: ElementStyle },
    SetCarouselItem { index: usize, display: &'static str },
}

pub struct Page<'a> {
    i18n: &'a I18n,
    file_input: Option<file_input::State>,
    file_label: bool,
    form: Option<upload_form::State>,
    submit_button: bool,
    navbar: Option<navbar::State>,
    anchors: Option<anchor::State>,
    reveal: Option<RevealObserver>,
    carousel: Option<Carousel>,
}

impl<'a> Page<'a> {
    /// Wires the components present in `layout` and returns the page with
    /// its initial effects (hidden feature cards, first carousel item).
    pub fn mount(layout: PageLayout, config: &Config, i18n: &'a I18n) -> (Self, Vec<Effect>) {
        let mut effects = Vec::new();

        let reveal = (!layout.feature_cards.is_empty()).then(|| {
            let mut observer = RevealObserver::new(config.page.reveal_threshold());
            for card in layout.feature_cards {
                let style = observer.observe(card.clone());
                effects.push(Effect::SetStyle {
                    element: card,
                    style,
                });
            }
            observer
        });

        let carousel = layout
            .carousel_items
            .map(|count| Carousel::with_interval(count, config.page.carousel_interval()));
        if let Some(carousel) = carousel.filter(Carousel::is_active) {
            effects.extend(carousel_effects(&carousel));
        }

        let page = Self {
            i18n,
            file_input: layout.file_input.then(file_input::State::default),
            file_label: layout.file_label,
            form: layout
                .upload_form
                .then(|| upload_form::State::from_config(&config.upload)),
            submit_button: layout.submit_button,
            navbar: layout
                .navbar
                .then(|| navbar::State::new(config.page.navbar_shadow_threshold_px)),
            anchors: layout
                .anchor_links
                .then(|| anchor::State::new(layout.element_ids)),
            reveal,
            carousel,
        };

        tracing::debug!(handlers = page.subscriptions().len(), "page mounted");
        (page, effects)
    }

    /// Returns whether a handler is wired for `kind`.
    #[must_use]
    pub fn handles(&self, kind: TriggerKind) -> bool {
        match kind {
            TriggerKind::FileChanged => self.file_input.is_some() && self.file_label,
            TriggerKind::Submit => self.form.is_some(),
            TriggerKind::AnchorClicked => self.anchors.is_some(),
            TriggerKind::Scrolled => self.navbar.is_some(),
            TriggerKind::Intersections => self.reveal.is_some(),
            TriggerKind::CarouselTick => self.carousel.is_some_and(|c| c.is_active()),
        }
    }

    /// Lists the wired handlers.
    #[must_use]
    pub fn subscriptions(&self) -> Vec<Subscription> {
        [
            TriggerKind::FileChanged,
            TriggerKind::Submit,
            TriggerKind::AnchorClicked,
            TriggerKind::Scrolled,
            TriggerKind::Intersections,
            TriggerKind::CarouselTick,
        ]
        .into_iter()
        .filter(|kind| self.handles(*kind))
        .map(|trigger| Subscription {
            trigger,
            every: match trigger {
                TriggerKind::CarouselTick => self.carousel.map(|c| c.interval()),
                _ => None,
            },
        })
        .collect()
    }

    /// Runs the handler wired for `trigger` and returns its effects.
    pub fn dispatch(&mut self, trigger: Trigger) -> Vec<Effect> {
        match trigger {
            Trigger::FileChanged(selection) => self.on_file_changed(selection),
            Trigger::Submit => self.on_submit(),
            Trigger::AnchorClicked { href } => self.on_anchor_clicked(href),
            Trigger::Scrolled(offset) => self.on_scrolled(offset),
            Trigger::Intersections(entries) => self.on_intersections(entries),
            Trigger::CarouselTick => self.on_carousel(carousel::Message::Tick),
        }
    }

    /// Returns the submit button state, if the form exists.
    #[must_use]
    pub fn submit_button(&self) -> Option<SubmitButton> {
        self.form.as_ref().map(upload_form::State::button)
    }

    #[must_use]
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file_input.as_ref().and_then(file_input::State::selected)
    }

    fn on_file_changed(&mut self, selection: Option<SelectedFile>) -> Vec<Effect> {
        let Some(state) = self.file_input.as_mut() else {
            return Vec::new();
        };
        if !self.file_label {
            // No label to update: the selection is still kept for submission.
            let _ = file_input::update(state, file_input::Message::Changed(selection));
            return Vec::new();
        }
        match file_input::update(state, file_input::Message::Changed(selection)) {
            file_input::Event::LabelChanged(label) => {
                vec![Effect::SetFileLabel(label.text(self.i18n))]
            }
        }
    }

    fn on_submit(&mut self) -> Vec<Effect> {
        let attempt = self
            .file_input
            .as_ref()
            .map(file_input::State::attempt)
            .unwrap_or_default();
        let Some(form) = self.form.as_mut() else {
            return Vec::new();
        };

        match upload_form::update(form, upload_form::Message::Submit(attempt)) {
            upload_form::Event::None => vec![Effect::PreventDefault],
            upload_form::Event::Blocked(reason) => vec![
                Effect::PreventDefault,
                Effect::Alert(rejection_alert(self.i18n, reason, form.policy())),
            ],
            upload_form::Event::Proceed(submission) => {
                let mut effects = Vec::with_capacity(2);
                if self.submit_button {
                    let button = form.button();
                    effects.push(Effect::SetSubmitButton {
                        label: self.i18n.tr(button.label_key()),
                        disabled: button.is_disabled(),
                    });
                }
                effects.push(Effect::Submit(submission));
                effects
            }
        }
    }

    fn on_anchor_clicked(&mut self, href: String) -> Vec<Effect> {
        let Some(anchors) = self.anchors.as_ref() else {
            return Vec::new();
        };
        match anchor::update(anchors, anchor::Message::Clicked { href }) {
            anchor::Event::Ignored => Vec::new(),
            anchor::Event::Suppressed => vec![Effect::PreventDefault],
            anchor::Event::ScrollTo(request) => {
                vec![Effect::PreventDefault, Effect::ScrollIntoView(request)]
            }
        }
    }

    fn on_scrolled(&mut self, offset: ScrollOffset) -> Vec<Effect> {
        let Some(state) = self.navbar.as_mut() else {
            return Vec::new();
        };
        match navbar::update(state, navbar::Message::Scrolled(offset)) {
            navbar::Event::None => Vec::new(),
            navbar::Event::ShadowChanged(shadow) => vec![Effect::SetNavbarShadow(shadow.css())],
        }
    }

    fn on_intersections(&mut self, entries: Vec<IntersectionEntry>) -> Vec<Effect> {
        let Some(observer) = self.reveal.as_mut() else {
            return Vec::new();
        };
        match reveal::update(observer, reveal::Message::Intersections(entries)) {
            reveal::Event::None => Vec::new(),
            reveal::Event::Revealed(ids) => ids
                .into_iter()
                .map(|element| Effect::SetStyle {
                    element,
                    style: ElementStyle::REVEALED,
                })
                .collect(),
        }
    }

    fn on_carousel(&mut self, message: carousel::Message) -> Vec<Effect> {
        let Some(state) = self.carousel.as_mut() else {
            return Vec::new();
        };
        match carousel::update(state, message) {
            carousel::Event::None => Vec::new(),
            carousel::Event::Shown(_) => carousel_effects(state),
        }
    }
}

/// Localized alert for a blocked submission; the size message names the
/// configured limit.
fn rejection_alert(i18n: &I18n, reason: RejectionReason, policy: &ValidationPolicy) -> String {
    match reason {
        RejectionReason::FileTooLarge => {
            let limit = format_size_limit(policy.max_size_bytes());
            i18n.tr_with_args(reason.i18n_key(), &[("limit", limit.as_str())])
        }
        _ => i18n.tr(reason.i18n_key()),
    }
}

fn carousel_effects(carousel: &Carousel) -> Vec<Effect> {
    (0..carousel.count())
        .map(|index| Effect::SetCarouselItem {
            index,
            display: carousel.display(index),
        })
        .collect()
}
