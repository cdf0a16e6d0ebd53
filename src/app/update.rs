// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every state transition lives here: screen switching, search and
//! pagination, lightbox navigation, gesture classification, and settings
//! persistence.

use super::{App, Message, Screen};
use crate::config;
use crate::gesture::TouchPoint;
use crate::ui::cards;
use crate::ui::detail;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::settings;
use iced::{Point, Task};
use std::time::Instant;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => update_navbar(app, message),
        Message::Cards(message) => update_cards(app, message),
        Message::Detail(message) => update_detail(app, message),
        Message::Lightbox(message) => update_lightbox(app, message),
        Message::Settings(message) => update_settings(app, message),
        Message::Tick(now) => update_tick(app, now),
    }
}

fn update_navbar(app: &mut App, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::OpenCards => {
            app.screen = Screen::Cards;
            app.selected = None;
        }
        navbar::Message::OpenSettings => {
            app.screen = Screen::Settings;
        }
    }
    Task::none()
}

fn update_cards(app: &mut App, message: cards::Message) -> Task<Message> {
    match message {
        cards::Message::SearchInputChanged(text) => {
            // The raw input echoes immediately; the filter only changes
            // once the debounce delay elapses (see update_tick).
            app.search_input = text.clone();
            app.debouncer.push(text, Instant::now());
        }
        cards::Message::TagSelected(choice) => {
            app.filter.tag = choice.as_tag().map(str::to_string);
            app.page.reset();
        }
        cards::Message::ProjectOpened(id) => {
            if app.catalog.get(&id).is_some() {
                app.selected = Some(id);
                app.screen = Screen::Detail;
            }
        }
        cards::Message::NextPage => {
            let total = app.filtered_projects().len();
            app.page.next(total);
        }
        cards::Message::PreviousPage => {
            app.page.previous();
        }
    }
    Task::none()
}

fn update_detail(app: &mut App, message: detail::Message) -> Task<Message> {
    match message {
        detail::Message::Back => {
            app.screen = Screen::Cards;
            app.selected = None;
        }
        detail::Message::OpenImage(index) => {
            let image_count = app.selected_project().map(|project| project.images.len());
            if let Some(count) = image_count {
                app.lightbox.open(index, count);
                app.swipe.reset();
            }
        }
    }
    Task::none()
}

fn update_lightbox(app: &mut App, message: lightbox::Message) -> Task<Message> {
    match message {
        lightbox::Message::Next => app.lightbox.next(),
        lightbox::Message::Previous => app.lightbox.previous(),
        lightbox::Message::Close => {
            app.lightbox.close();
            app.swipe.reset();
        }
        lightbox::Message::TouchStarted(position) => {
            app.swipe.touch_started(touch_point(position));
        }
        lightbox::Message::TouchEnded(position) => {
            let config = app.swipe_config();
            if let Some(direction) = app.swipe.touch_ended(touch_point(position), &config) {
                app.lightbox.apply(direction);
            }
        }
        lightbox::Message::TouchCancelled => app.swipe.reset(),
    }
    Task::none()
}

fn update_settings(app: &mut App, message: settings::Message) -> Task<Message> {
    match message {
        settings::Message::LanguageSelected(locale) => {
            app.i18n.set_locale(locale.clone());
            app.config.general.language = Some(locale.to_string());
            persist(app);
        }
        settings::Message::ThemeSelected(mode) => {
            app.theme_mode = mode;
            app.config.general.theme_mode = mode;
            persist(app);
        }
        settings::Message::Back => {
            app.screen = Screen::Cards;
        }
    }
    Task::none()
}

fn update_tick(app: &mut App, now: Instant) -> Task<Message> {
    if let Some(query) = app.debouncer.poll(now) {
        app.filter.query = query;
        app.page.reset();
    }
    Task::none()
}

fn touch_point(position: Point) -> TouchPoint {
    TouchPoint::new(position.x, position.y)
}

fn persist(app: &App) {
    if let Err(error) = config::save(&app.config) {
        eprintln!("Failed to save config: {:?}", error);
    }
}
