// SPDX-License-Identifier: MPL-2.0
//! `green_classify` is the front end of the GreenClassify vegetable classifier.
//!
//! It guards the image upload form (file type and size checks before the
//! image is sent for classification), keeps the page's small behaviours
//! (file label, navbar shadow, smooth in-page scrolling, reveal-on-scroll,
//! carousel) as typed components, and shows self-dismissing notification
//! banners.
//!
//! The helpers below are usable on their own, without mounting a page:
//!
//! ```
//! use green_classify::{format_file_size, is_image_mime_type};
//!
//! assert_eq!(format_file_size(1536), "1.5 KB");
//! assert!(is_image_mime_type("image/webp"));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

pub use domain::format::format_file_size;
pub use domain::upload::{is_image_mime_type, is_valid_image};
pub use ui::notifications::{Board as NotificationBoard, Severity};
