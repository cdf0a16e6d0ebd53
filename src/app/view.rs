// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar plus the active screen, and stacks the lightbox
//! overlay above them whenever it is open.

use super::{App, Message, Screen};
use crate::ui::cards::{self, ViewContext as CardsViewContext};
use crate::ui::detail::{self, ViewContext as DetailViewContext};
use crate::ui::lightbox::{self, ViewContext as LightboxViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use iced::{
    widget::{Column, Stack},
    Element, Length,
};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: &app.i18n,
        screen: app.screen,
    })
    .map(Message::Navbar);

    let screen_view: Element<'_, Message> = match app.screen {
        Screen::Cards => view_cards(app),
        Screen::Detail => view_detail(app),
        Screen::Settings => view_settings(app),
    };

    let base: Element<'_, Message> = Column::new()
        .push(navbar)
        .push(screen_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    // The lightbox re-validates its own state; a stale index renders
    // nothing and the base view shows through.
    if let Some(project) = app.selected_project() {
        if let Some(overlay) = lightbox::view(LightboxViewContext {
            i18n: &app.i18n,
            project,
            lightbox: &app.lightbox,
        }) {
            return Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(base)
                .push(overlay.map(Message::Lightbox))
                .into();
        }
    }

    base
}

fn view_cards(app: &App) -> Element<'_, Message> {
    let filtered = app.filtered_projects();
    let total = filtered.len();

    // The filter may have shrunk the result set since the page index was
    // last moved; clamp a copy rather than mutating state from the view.
    let mut page = app.page;
    page.clamp(total);
    let (start, end) = page.bounds(total);

    cards::view(CardsViewContext {
        i18n: &app.i18n,
        page_projects: filtered[start..end].to_vec(),
        tags: app.catalog.tags(),
        selected_tag: app.filter.tag.as_deref(),
        search_input: &app.search_input,
        page: page.index + 1,
        page_count: page.page_count(total),
        match_count: total,
    })
    .map(Message::Cards)
}

fn view_detail(app: &App) -> Element<'_, Message> {
    match app.selected_project() {
        Some(project) => detail::view(DetailViewContext {
            i18n: &app.i18n,
            project,
        })
        .map(Message::Detail),
        // Stale selection, e.g. after a catalog reload; fall back to the
        // card grid instead of failing.
        None => view_cards(app),
    }
}

fn view_settings(app: &App) -> Element<'_, Message> {
    settings::view(SettingsViewContext {
        i18n: &app.i18n,
        theme_mode: app.theme_mode,
    })
    .map(Message::Settings)
}
