// SPDX-License-Identifier: MPL-2.0
//! Page behaviour and notification components.
//!
//! This module organizes the front end following a component-based
//! architecture with the Elm-style "state down, messages up" pattern: each
//! component takes a typed `Message`, updates its state and returns a typed
//! `Event` that the [`page`] turns into effects on the page surface.
//!
//! # Page
//!
//! - [`page`] - Wires components to triggers based on which elements exist
//!
//! # Components
//!
//! - [`file_input`] - Selected file and its filename label
//! - [`upload_form`] - Upload guard on submission and the busy submit button
//! - [`navbar`] - Navbar shadow depending on scroll position
//! - [`anchor`] - Smooth scrolling for in-page links
//! - [`reveal`] - One-shot reveal of feature cards entering the viewport
//! - [`carousel`] - Rotating item display
//! - [`notifications`] - Self-dismissing banners

pub mod anchor;
pub mod carousel;
pub mod file_input;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod reveal;
pub mod upload_form;
