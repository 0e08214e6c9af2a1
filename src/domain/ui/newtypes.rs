// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for page values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// ScrollOffset
// =============================================================================

/// Vertical scroll position of the page in CSS pixels.
///
/// Elastic overscroll can report negative offsets; they are clamped to zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollOffset(f32);

impl ScrollOffset {
    /// Creates a scroll offset, clamping negative and NaN values to zero.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self(0.0);
        }
        Self(pixels.max(0.0))
    }

    /// Returns the offset in pixels.
    #[must_use]
    pub fn pixels(self) -> f32 {
        self.0
    }

    /// Returns whether the page is scrolled strictly past `threshold` pixels.
    #[must_use]
    pub fn is_past(self, threshold: f32) -> bool {
        self.0 > threshold
    }
}

// =============================================================================
// VisibilityRatio
// =============================================================================

/// Fraction of an element inside the viewport, in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct VisibilityRatio(f32);

impl VisibilityRatio {
    /// Nothing visible.
    pub const HIDDEN: Self = Self(0.0);
    /// Fully visible.
    pub const FULL: Self = Self(1.0);

    /// Creates a ratio, clamping to the valid range. NaN maps to hidden.
    #[must_use]
    pub fn new(ratio: f32) -> Self {
        if ratio.is_nan() {
            return Self::HIDDEN;
        }
        Self(ratio.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether this ratio reaches `threshold`.
    #[must_use]
    pub fn reaches(self, threshold: VisibilityRatio) -> bool {
        self.0 >= threshold.0
    }
}

// =============================================================================
// Banner Lifetime Bounds
// =============================================================================

/// Banner lifetime bounds (0.5 to 60 seconds).
pub mod lifetime_bounds {
    /// Minimum banner lifetime in milliseconds.
    pub const MIN_MS: u64 = 500;
    /// Maximum banner lifetime in milliseconds.
    pub const MAX_MS: u64 = 60_000;
    /// Default banner lifetime in milliseconds.
    pub const DEFAULT_MS: u64 = 3_000;
}

// =============================================================================
// BannerLifetime
// =============================================================================

/// How long a notification banner stays on screen before removing itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BannerLifetime(u64);

impl BannerLifetime {
    /// Creates a lifetime in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(lifetime_bounds::MIN_MS, lifetime_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for BannerLifetime {
    fn default() -> Self {
        Self(lifetime_bounds::DEFAULT_MS)
    }
}
