// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal project portfolio browser built with the
//! Iced GUI framework.
//!
//! It renders an embedded project catalog as a searchable card grid with
//! a touch-friendly lightbox, and demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.2.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod i18n;
pub mod ui;
