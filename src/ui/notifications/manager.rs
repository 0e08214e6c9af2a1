// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` keeps the banners currently on screen. Each banner carries
//! its own deadline; a tick removes exactly the banners whose deadline has
//! passed, so banners never wait on or shorten each other.

use super::notification::{Notification, NotificationId, Severity};
use crate::domain::ui::BannerLifetime;
use std::time::Instant;

/// Holds the visible banners in creation order.
#[derive(Debug, Default)]
pub struct Manager {
    visible: Vec<Notification>,
    lifetime: BannerLifetime,
}

impl Manager {
    /// Creates a manager using the default banner lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager whose banners live for `lifetime`.
    #[must_use]
    pub fn with_lifetime(lifetime: BannerLifetime) -> Self {
        Self {
            visible: Vec::new(),
            lifetime,
        }
    }

    #[must_use]
    pub fn lifetime(&self) -> BannerLifetime {
        self.lifetime
    }

    /// Shows a new banner starting at `now` and returns its ID.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: Instant,
    ) -> NotificationId {
        let notification = Notification::new(severity, message, now, self.lifetime);
        let id = notification.id();
        self.push(notification);
        id
    }

    /// Adds an already built banner.
    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(
            id = ?notification.id(),
            severity = notification.severity().as_str(),
            "notification shown"
        );
        self.visible.push(notification);
    }

    /// Removes one banner by ID, leaving all others in place.
    ///
    /// Returns `true` if the banner was still visible.
    pub(crate) fn remove(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            return true;
        }
        false
    }

    /// Removes every banner whose own timer has elapsed at `now`.
    ///
    /// Returns the IDs removed, oldest first.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired(now))
            .map(Notification::id)
            .collect();

        for id in &expired {
            self.remove(*id);
        }
        expired
    }

    /// Returns the currently visible notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_visible(&self, id: NotificationId) -> bool {
        self.visible.iter().any(|n| n.id() == id)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Removes all banners (page teardown).
    pub fn clear(&mut self) {
        self.visible.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
        assert_eq!(manager.lifetime(), BannerLifetime::default());
    }

    #[test]
    fn show_makes_banner_visible_immediately() {
        let mut manager = Manager::new();
        let id = manager.show("saved", Severity::Info, Instant::now());
        assert!(manager.is_visible(id));
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn overlapping_banners_expire_independently() {
        let mut manager = Manager::new();
        let t0 = Instant::now();

        let first = manager.show("first", Severity::Info, t0);
        let second = manager.show("second", Severity::Error, t0 + ms(100));

        manager.tick(t0 + ms(150));
        assert!(manager.is_visible(first));
        assert!(manager.is_visible(second));

        let removed = manager.tick(t0 + ms(3_000));
        assert_eq!(removed, vec![first]);
        assert!(manager.is_visible(second));

        let removed = manager.tick(t0 + ms(3_100));
        assert_eq!(removed, vec![second]);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn tick_before_deadline_removes_nothing() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        manager.show("a", Severity::Info, t0);
        assert!(manager.tick(t0 + ms(2_999)).is_empty());
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn custom_lifetime_is_applied() {
        let mut manager = Manager::with_lifetime(BannerLifetime::from_millis(1_000));
        let t0 = Instant::now();
        let id = manager.show("quick", Severity::Info, t0);
        assert_eq!(manager.tick(t0 + ms(1_000)), vec![id]);
        assert!(!manager.is_visible(id));
    }

    #[test]
    fn removing_one_banner_keeps_the_others() {
        let mut manager = Manager::new();
        let now = Instant::now();
        let a = manager.show("a", Severity::Info, now);
        let b = manager.show("b", Severity::Info, now);

        assert!(manager.remove(a));
        assert!(!manager.remove(a));
        assert!(manager.is_visible(b));
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        let now = Instant::now();
        for i in 0..5 {
            manager.show(format!("test-{i}"), Severity::Info, now);
        }
        manager.clear();
        assert_eq!(manager.visible_count(), 0);
    }
}
