// SPDX-License-Identifier: MPL-2.0
//! File input component.
//!
//! Tracks the file currently picked in the upload input and keeps the
//! filename label next to it in sync.

use crate::domain::upload::{SelectedFile, UploadAttempt};
use crate::i18n::I18n;

/// Messages emitted by the file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The selection changed; `None` when the user cleared it.
    Changed(Option<SelectedFile>),
}

/// Text shown in the filename label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLabel {
    FileName(String),
    Placeholder,
}

impl FileLabel {
    /// Resolves the label to display text.
    pub fn text(&self, i18n: &I18n) -> String {
        match self {
            FileLabel::FileName(name) => name.clone(),
            FileLabel::Placeholder => i18n.tr("file-input-placeholder"),
        }
    }
}

/// Events propagated to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LabelChanged(FileLabel),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    selected: Option<SelectedFile>,
}

impl State {
    #[must_use]
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Builds the attempt a form submission would carry right now.
    #[must_use]
    pub fn attempt(&self) -> UploadAttempt {
        UploadAttempt::new(self.selected.clone())
    }

    #[must_use]
    pub fn label(&self) -> FileLabel {
        match &self.selected {
            Some(file) => FileLabel::FileName(file.name().to_string()),
            None => FileLabel::Placeholder,
        }
    }
}

/// Process a file input message and return the label update.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Changed(selection) => {
            if let Some(file) = &selection {
                tracing::debug!(
                    name = file.name(),
                    mime = file.mime_type(),
                    size = file.size_bytes(),
                    "file selected"
                );
            }
            state.selected = selection;
            Event::LabelChanged(state.label())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_file_shows_its_name() {
        let mut state = State::default();
        let event = update(
            &mut state,
            Message::Changed(Some(SelectedFile::new("tomato.jpg", "image/jpeg", 10))),
        );
        assert_eq!(event, Event::LabelChanged(FileLabel::FileName("tomato.jpg".into())));
        assert_eq!(state.attempt().mime_type(), Some("image/jpeg"));
    }

    #[test]
    fn clearing_the_selection_restores_placeholder() {
        let mut state = State::default();
        update(
            &mut state,
            Message::Changed(Some(SelectedFile::new("a.png", "image/png", 1))),
        );
        let event = update(&mut state, Message::Changed(None));

        assert_eq!(event, Event::LabelChanged(FileLabel::Placeholder));
        assert!(state.selected().is_none());
        assert_eq!(state.attempt(), UploadAttempt::empty());
    }

    #[test]
    fn placeholder_text_is_localized() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        assert_eq!(FileLabel::Placeholder.text(&i18n), "No file chosen");
        assert_eq!(FileLabel::FileName("x.gif".into()).text(&i18n), "x.gif");
    }
}
