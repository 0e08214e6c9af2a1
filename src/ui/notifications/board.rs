// SPDX-License-Identifier: MPL-2.0
//! Timer-driven banner board.
//!
//! [`Board::show`] is fire-and-forget: it puts the banner up and spawns one
//! tokio timer that removes that banner, and only that banner, when it
//! fires. There is no shared queue between banners.

use super::manager::Manager;
use super::notification::{Notification, NotificationId, Severity};
use crate::domain::ui::BannerLifetime;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::time::{sleep_until, Instant};

/// Shared set of banners with one removal timer per banner.
#[derive(Debug, Clone)]
pub struct Board {
    manager: Arc<Mutex<Manager>>,
    runtime: Handle,
}

impl Board {
    /// Creates a board whose timers run on `runtime`.
    #[must_use]
    pub fn new(runtime: Handle, lifetime: BannerLifetime) -> Self {
        Self {
            manager: Arc::new(Mutex::new(Manager::with_lifetime(lifetime))),
            runtime,
        }
    }

    /// Creates a board on the current tokio runtime, if there is one.
    #[must_use]
    pub fn current(lifetime: BannerLifetime) -> Option<Self> {
        Handle::try_current()
            .ok()
            .map(|runtime| Self::new(runtime, lifetime))
    }

    /// Shows a banner and schedules its removal after the board's lifetime.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let created = Instant::now();
        let (id, deadline) = {
            let mut manager = self.lock();
            let lifetime = manager.lifetime();
            let id = manager.show(message, severity, created.into_std());
            (id, created + lifetime.as_duration())
        };

        let manager = Arc::clone(&self.manager);
        self.runtime.spawn(async move {
            sleep_until(deadline).await;
            let removed = manager
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(id);
            if removed {
                tracing::debug!(?id, "notification expired");
            }
        });

        id
    }

    /// Shows an info banner.
    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Info)
    }

    /// Shows an error banner.
    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Error)
    }

    #[must_use]
    pub fn is_visible(&self, id: NotificationId) -> bool {
        self.lock().is_visible(id)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.lock().visible_count()
    }

    /// Returns a snapshot of the visible banners, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().visible().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, Manager> {
        self.manager.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
