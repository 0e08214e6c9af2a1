// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core rules with ZERO external dependencies.
//!
//! This module contains pure value types and decisions. It has no
//! dependencies on external crates (except `std`) so it can be tested
//! without any page, runtime or settings in place.
//!
//! # Modules
//!
//! - [`upload`]: The upload guard ([`evaluate`](upload::evaluate),
//!   [`ValidationPolicy`](upload::ValidationPolicy), [`UploadAttempt`](upload::UploadAttempt))
//! - [`format`]: Byte count formatting ([`format_file_size`](format::format_file_size))
//! - [`ui`]: Page value objects ([`ScrollOffset`](ui::ScrollOffset),
//!   [`VisibilityRatio`](ui::VisibilityRatio), [`BannerLifetime`](ui::BannerLifetime))

pub mod format;
pub mod ui;
pub mod upload;
