// SPDX-License-Identifier: MPL-2.0
//! Banner presentation.
//!
//! A toast is the visual form of a notification: a fixed element in the
//! top-right corner with a severity-coloured background.

use super::notification::Notification;

/// Rendered attributes of one banner element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub class: String,
    pub style: String,
    pub text: String,
}

impl Toast {
    /// Renders the element attributes for `notification`.
    #[must_use]
    pub fn view(notification: &Notification) -> Self {
        let severity = notification.severity();
        Self {
            class: format!("notification notification-{}", severity.as_str()),
            style: [
                "position: fixed".to_string(),
                "top: 20px".to_string(),
                "right: 20px".to_string(),
                "padding: 1rem 2rem".to_string(),
                format!("background: {}", severity.background()),
                "color: white".to_string(),
                "border-radius: 5px".to_string(),
                "z-index: 9999".to_string(),
                "animation: slideIn 0.3s ease".to_string(),
            ]
            .join("; "),
            text: notification.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_toast_uses_error_class_and_red_background() {
        let toast = Toast::view(&Notification::error("Upload failed"));
        assert_eq!(toast.class, "notification notification-error");
        assert!(toast.style.contains("background: #f44336"));
        assert_eq!(toast.text, "Upload failed");
    }

    #[test]
    fn info_toast_uses_green_background() {
        let toast = Toast::view(&Notification::info("Done"));
        assert_eq!(toast.class, "notification notification-info");
        assert!(toast.style.contains("background: #4caf50"));
        assert!(toast.style.starts_with("position: fixed"));
    }
}
