// SPDX-License-Identifier: MPL-2.0
//! UI components and screens.

pub mod cards;
pub mod design_tokens;
pub mod detail;
pub mod lightbox;
pub mod navbar;
pub mod settings;
pub mod theming;
