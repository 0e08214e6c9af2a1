// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the front end.
//!
//! Every string the user sees (input labels, button labels, validation
//! alerts, command line reports) is looked up here using Fluent.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded at build time
//! - Runtime language switching
//! - Fallback to `en-US` when no requested locale is shipped

pub mod fluent;

pub use fluent::I18n;
