// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::domain::ui::BannerLifetime;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the banner's colour and CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (green).
    #[default]
    Info,
    /// Something went wrong (red).
    Error,
}

impl Severity {
    /// Returns the banner background colour as a CSS hex string.
    #[must_use]
    pub fn background(&self) -> &'static str {
        match self {
            Severity::Info => "#4caf50",
            Severity::Error => "#f44336",
        }
    }

    /// Returns the severity name used in the `notification-<name>` class.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }
}

/// A banner shown to the user, removed after its lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
    lifetime: Duration,
}

impl Notification {
    /// Creates a notification shown from `created_at` for `lifetime`.
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        created_at: Instant,
        lifetime: BannerLifetime,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at,
            lifetime: lifetime.as_duration(),
        }
    }

    /// Creates an info notification starting now with the default lifetime.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message, Instant::now(), BannerLifetime::default())
    }

    /// Creates an error notification starting now with the default lifetime.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message, Instant::now(), BannerLifetime::default())
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the instant at which this banner removes itself.
    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.created_at + self.lifetime
    }

    /// Returns whether the banner's own timer has elapsed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}
