// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Upload**: Form target and guard limits
//! - **Notifications**: Banner lifetime
//! - **Page**: Scroll, visibility and carousel timings

use crate::domain::ui::newtypes::lifetime_bounds;
use crate::domain::upload::MAX_UPLOAD_BYTES;

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Largest accepted upload in bytes (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = MAX_UPLOAD_BYTES;

/// Endpoint the upload form posts to.
pub const DEFAULT_FORM_ACTION: &str = "/result";

/// Multipart field carrying the image.
pub const DEFAULT_FIELD_NAME: &str = "image";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Time a banner stays visible before removing itself (in milliseconds).
pub const DEFAULT_BANNER_LIFETIME_MS: u64 = lifetime_bounds::DEFAULT_MS;

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Scroll offset past which the navbar shadow is raised (in pixels).
pub const DEFAULT_NAVBAR_SHADOW_THRESHOLD_PX: f32 = 50.0;

/// Fraction of an element that must be visible before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.1;

/// Interval between automatic carousel advances (in milliseconds).
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 5_000;

/// Shortest carousel interval accepted from settings (in milliseconds).
pub const MIN_CAROUSEL_INTERVAL_MS: u64 = 500;
