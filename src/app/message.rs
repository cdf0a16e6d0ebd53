// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::cards;
use crate::ui::detail;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::settings;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Cards(cards::Message),
    Detail(detail::Message),
    Lightbox(lightbox::Message),
    Settings(settings::Message),
    /// Periodic tick that settles the debounced search input.
    Tick(Instant),
}

/// Command-line flags consumed at startup.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// UI language override, e.g. `--lang fr`.
    pub lang: Option<String>,
}
