// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains page-related value objects that are independent
//! of any presentation surface.

pub mod newtypes;

// Re-export commonly used types
pub use newtypes::{BannerLifetime, ScrollOffset, VisibilityRatio};
