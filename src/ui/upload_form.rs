// SPDX-License-Identifier: MPL-2.0
//! Upload form component.
//!
//! Runs the upload guard when the form is submitted. Accepted attempts go
//! through to the classification endpoint and put the submit button into
//! its busy state; rejected attempts are cancelled and leave the button
//! untouched.

use crate::config::UploadConfig;
use crate::domain::upload::{
    evaluate, RejectionReason, SelectedFile, UploadAttempt, ValidationPolicy, ValidationResult,
};

/// Submit button display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitButton {
    #[default]
    Idle,
    /// Submission in flight: disabled, "Classifying..." label.
    Busy,
}

impl SubmitButton {
    /// Returns the i18n key of the button label.
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            SubmitButton::Idle => "submit-button-idle",
            SubmitButton::Busy => "submit-button-busy",
        }
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        matches!(self, SubmitButton::Busy)
    }
}

/// Where and how the form is sent to the classification server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTarget {
    pub action: String,
    pub method: &'static str,
    pub enctype: &'static str,
    pub field_name: String,
}

impl FormTarget {
    #[must_use]
    pub fn new(action: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            method: "POST",
            enctype: "multipart/form-data",
            field_name: field_name.into(),
        }
    }
}

impl Default for FormTarget {
    fn default() -> Self {
        let config = UploadConfig::default();
        Self::new(config.form_action, config.field_name)
    }
}

/// A submission allowed through the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub target: FormTarget,
    pub file: SelectedFile,
}

/// Messages emitted by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Submit(UploadAttempt),
}

/// Events propagated to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Nothing happens (a submission is already in flight).
    None,
    /// The browser proceeds with the submission.
    Proceed(FormSubmission),
    /// The submission is cancelled for `reason`.
    Blocked(RejectionReason),
}

impl Event {
    /// Returns whether the default form submission must be cancelled.
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Event::Proceed(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    button: SubmitButton,
    policy: ValidationPolicy,
    target: FormTarget,
}

impl State {
    #[must_use]
    pub fn new(policy: ValidationPolicy, target: FormTarget) -> Self {
        Self {
            button: SubmitButton::Idle,
            policy,
            target,
        }
    }

    #[must_use]
    pub fn from_config(config: &UploadConfig) -> Self {
        Self::new(
            config.policy(),
            FormTarget::new(config.form_action.clone(), config.field_name.clone()),
        )
    }

    #[must_use]
    pub fn button(&self) -> SubmitButton {
        self.button
    }

    #[must_use]
    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Returns the button to its interactive state (e.g. after the response).
    pub fn reset(&mut self) {
        self.button = SubmitButton::Idle;
    }
}

/// Process a form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Submit(attempt) => {
            if state.button == SubmitButton::Busy {
                tracing::debug!("submission already in flight, ignoring");
                return Event::None;
            }

            match evaluate(&attempt, &state.policy) {
                ValidationResult::Accepted => {
                    let Some(file) = attempt.into_file() else {
                        // The guard never accepts an attempt without a file.
                        return Event::Blocked(RejectionReason::NoFileSelected);
                    };
                    tracing::info!(
                        name = file.name(),
                        size = file.size_bytes(),
                        action = %state.target.action,
                        "upload accepted"
                    );
                    state.button = SubmitButton::Busy;
                    Event::Proceed(FormSubmission {
                        target: state.target.clone(),
                        file,
                    })
                }
                ValidationResult::Rejected(reason) => {
                    tracing::debug!(%reason, "upload rejected");
                    Event::Blocked(reason)
                }
            }
        }
    }
}
