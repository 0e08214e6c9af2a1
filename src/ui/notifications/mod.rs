// SPDX-License-Identifier: MPL-2.0
//! Transient notification banners.
//!
//! Banners appear in the top-right corner and remove themselves after a
//! fixed lifetime (3 seconds by default). Each banner owns its timer, so
//! several banners can be on screen at once and each disappears on its own
//! schedule.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` holding visible banners, expired by clock ticks
//! - [`board`] - `Board` running one tokio timer per banner
//! - [`toast`] - Element attributes for rendering a banner
//!
//! # Usage
//!
//! ```ignore
//! use green_classify::ui::notifications::{Board, Severity};
//!
//! let board = Board::current(BannerLifetime::default()).expect("tokio runtime");
//! board.show("Image selected", Severity::Info);
//! ```

mod board;
mod manager;
mod notification;
mod toast;

pub use board::Board;
pub use manager::Manager;
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
