// SPDX-License-Identifier: MPL-2.0
//! Top-level screens the application can display.

/// The screen currently occupying the window. The lightbox is not a
/// screen: it is an overlay stacked above whichever screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Searchable, paginated project card grid.
    #[default]
    Cards,
    /// Detail page of one selected project.
    Detail,
    /// Language and theme preferences.
    Settings,
}
