// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the catalog, localization, gesture
//! tracking, and gallery state, and translates messages into side effects
//! like config persistence. Policy decisions (window size, debounce
//! polling, swipe threshold resolution) stay close to the main update
//! loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::debounce::Debouncer;
use crate::catalog::search::{self, Page, SearchFilter};
use crate::catalog::{Catalog, Project};
use crate::config::{self, Config};
use crate::gallery::Lightbox;
use crate::gesture::{SwipeConfig, SwipeTracker, DEFAULT_SWIPE_THRESHOLD_PX};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the catalog, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    catalog: Catalog,
    config: Config,
    /// Applied (debounced) search and tag filter.
    filter: SearchFilter,
    /// Current page over the filtered card grid.
    page: Page,
    /// Raw search box content, echoed before the debounce settles.
    search_input: String,
    debouncer: Debouncer,
    /// Id of the project shown on the detail screen.
    selected: Option<String>,
    lightbox: Lightbox,
    swipe: SwipeTracker,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("selected", &self.selected)
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);
        let catalog = Catalog::load().unwrap_or_default();
        let page = Page::new(config.browse.page_size.unwrap_or(config::DEFAULT_PAGE_SIZE));
        let theme_mode = config.general.theme_mode;

        (
            Self {
                i18n,
                screen: Screen::Cards,
                catalog,
                config,
                filter: SearchFilter::default(),
                page,
                search_input: String::new(),
                debouncer: Debouncer::default(),
                selected: None,
                lightbox: Lightbox::new(),
                swipe: SwipeTracker::new(),
                theme_mode,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.selected_project() {
            Some(project) => format!("{} - {}", self.i18n.tr(&project.title_key()), app_name),
            None => app_name,
        }
    }

    pub fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.lightbox.is_open()),
            subscription::create_tick_subscription(self.debouncer.is_pending()),
        ])
    }

    /// Projects matching the applied filter, searched over the localized
    /// titles so results follow the current UI language.
    fn filtered_projects(&self) -> Vec<&Project> {
        search::apply(self.catalog.projects(), &self.filter, |project| {
            self.i18n.tr(&project.title_key())
        })
    }

    fn selected_project(&self) -> Option<&Project> {
        self.selected.as_deref().and_then(|id| self.catalog.get(id))
    }

    /// Gesture config for the open lightbox: threshold from the user
    /// config, navigable item count from the gallery.
    fn swipe_config(&self) -> SwipeConfig {
        SwipeConfig {
            threshold_px: self
                .config
                .browse
                .swipe_threshold_px
                .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX),
            navigable_items: self.lightbox.item_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::debounce::SEARCH_DEBOUNCE;
    use crate::catalog::sample_project;
    use crate::ui::{cards, detail, lightbox, navbar};
    use iced::Point;
    use std::time::Instant;

    fn test_app(projects: Vec<Project>) -> App {
        App {
            i18n: I18n::default(),
            screen: Screen::Cards,
            catalog: Catalog::from_projects(projects),
            config: Config::default(),
            filter: SearchFilter::default(),
            page: Page::new(config::DEFAULT_PAGE_SIZE),
            search_input: String::new(),
            debouncer: Debouncer::default(),
            selected: None,
            lightbox: Lightbox::new(),
            swipe: SwipeTracker::new(),
            theme_mode: ThemeMode::Light,
        }
    }

    fn gallery_app() -> App {
        let mut project = sample_project("alpha", 2021, &["rust"]);
        project.images = vec![
            "a.png".to_string(),
            "b.png".to_string(),
            "c.png".to_string(),
        ];
        let mut app = test_app(vec![project]);
        let _ = app.update(Message::Cards(cards::Message::ProjectOpened(
            "alpha".to_string(),
        )));
        let _ = app.update(Message::Detail(detail::Message::OpenImage(0)));
        app
    }

    #[test]
    fn opening_a_known_project_switches_to_detail() {
        let mut app = test_app(vec![sample_project("alpha", 2021, &[])]);

        let _ = app.update(Message::Cards(cards::Message::ProjectOpened(
            "alpha".to_string(),
        )));
        assert_eq!(app.screen, Screen::Detail);
        assert_eq!(app.selected.as_deref(), Some("alpha"));
    }

    #[test]
    fn opening_an_unknown_project_is_ignored() {
        let mut app = test_app(vec![sample_project("alpha", 2021, &[])]);

        let _ = app.update(Message::Cards(cards::Message::ProjectOpened(
            "ghost".to_string(),
        )));
        assert_eq!(app.screen, Screen::Cards);
        assert_eq!(app.selected, None);
    }

    #[test]
    fn search_input_only_applies_after_the_debounce_delay() {
        let mut app = test_app(vec![
            sample_project("alpha", 2021, &[]),
            sample_project("beta", 2023, &[]),
        ]);

        let _ = app.update(Message::Cards(cards::Message::SearchInputChanged(
            "alpha".to_string(),
        )));
        assert_eq!(app.search_input, "alpha");
        assert_eq!(app.filter.query, "");
        assert!(app.debouncer.is_pending());

        let _ = app.update(Message::Tick(Instant::now() + SEARCH_DEBOUNCE));
        assert_eq!(app.filter.query, "alpha");
        assert_eq!(app.filtered_projects().len(), 1);
        assert!(!app.debouncer.is_pending());
    }

    #[test]
    fn applying_a_search_resets_the_page() {
        let mut app = test_app(
            (0..20)
                .map(|i| sample_project(&format!("project-{i}"), 2020, &[]))
                .collect(),
        );
        let _ = app.update(Message::Cards(cards::Message::NextPage));
        assert_eq!(app.page.index, 1);

        let _ = app.update(Message::Cards(cards::Message::SearchInputChanged(
            "project".to_string(),
        )));
        let _ = app.update(Message::Tick(Instant::now() + SEARCH_DEBOUNCE));
        assert_eq!(app.page.index, 0);
    }

    #[test]
    fn selecting_a_tag_resets_the_page_and_filters() {
        let mut app = test_app(vec![
            sample_project("alpha", 2021, &["rust"]),
            sample_project("beta", 2023, &["web"]),
        ]);

        let _ = app.update(Message::Cards(cards::Message::TagSelected(
            cards::TagChoice::Tag("rust".to_string()),
        )));
        assert_eq!(app.filter.tag.as_deref(), Some("rust"));
        assert_eq!(app.filtered_projects().len(), 1);

        let _ = app.update(Message::Cards(cards::Message::TagSelected(
            cards::TagChoice::All,
        )));
        assert_eq!(app.filter.tag, None);
        assert_eq!(app.filtered_projects().len(), 2);
    }

    #[test]
    fn open_image_opens_the_lightbox() {
        let app = gallery_app();
        assert!(app.lightbox.is_open());
        assert_eq!(app.lightbox.counter(), Some((1, 3)));
    }

    #[test]
    fn arrow_messages_navigate_with_wraparound() {
        let mut app = gallery_app();

        let _ = app.update(Message::Lightbox(lightbox::Message::Next));
        assert_eq!(app.lightbox.counter(), Some((2, 3)));

        let _ = app.update(Message::Lightbox(lightbox::Message::Previous));
        let _ = app.update(Message::Lightbox(lightbox::Message::Previous));
        assert_eq!(app.lightbox.counter(), Some((3, 3)));

        let _ = app.update(Message::Lightbox(lightbox::Message::Next));
        assert_eq!(app.lightbox.counter(), Some((1, 3)));
    }

    #[test]
    fn left_swipe_advances_to_the_next_image() {
        let mut app = gallery_app();

        let _ = app.update(Message::Lightbox(lightbox::Message::TouchStarted(
            Point::new(200.0, 100.0),
        )));
        let _ = app.update(Message::Lightbox(lightbox::Message::TouchEnded(
            Point::new(100.0, 110.0),
        )));
        assert_eq!(app.lightbox.counter(), Some((2, 3)));
    }

    #[test]
    fn down_swipe_closes_the_lightbox() {
        let mut app = gallery_app();

        let _ = app.update(Message::Lightbox(lightbox::Message::TouchStarted(
            Point::new(200.0, 100.0),
        )));
        let _ = app.update(Message::Lightbox(lightbox::Message::TouchEnded(
            Point::new(210.0, 200.0),
        )));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn cancelled_touch_discards_the_gesture() {
        let mut app = gallery_app();

        let _ = app.update(Message::Lightbox(lightbox::Message::TouchStarted(
            Point::new(200.0, 100.0),
        )));
        let _ = app.update(Message::Lightbox(lightbox::Message::TouchCancelled));
        // The lift alone is not a gesture without a start point.
        let _ = app.update(Message::Lightbox(lightbox::Message::TouchEnded(
            Point::new(100.0, 100.0),
        )));
        assert_eq!(app.lightbox.counter(), Some((1, 3)));
    }

    #[test]
    fn escape_close_resets_the_swipe_tracker() {
        let mut app = gallery_app();

        let _ = app.update(Message::Lightbox(lightbox::Message::TouchStarted(
            Point::new(200.0, 100.0),
        )));
        let _ = app.update(Message::Lightbox(lightbox::Message::Close));
        assert!(!app.lightbox.is_open());
        assert!(!app.swipe.is_tracking());
    }

    #[test]
    fn navbar_switches_screens() {
        let mut app = test_app(vec![sample_project("alpha", 2021, &[])]);

        let _ = app.update(Message::Navbar(navbar::Message::OpenSettings));
        assert_eq!(app.screen, Screen::Settings);

        let _ = app.update(Message::Navbar(navbar::Message::OpenCards));
        assert_eq!(app.screen, Screen::Cards);
    }

    #[test]
    fn detail_back_clears_the_selection() {
        let mut app = test_app(vec![sample_project("alpha", 2021, &[])]);
        let _ = app.update(Message::Cards(cards::Message::ProjectOpened(
            "alpha".to_string(),
        )));

        let _ = app.update(Message::Detail(detail::Message::Back));
        assert_eq!(app.screen, Screen::Cards);
        assert_eq!(app.selected, None);
    }

    #[test]
    fn view_renders_on_every_screen() {
        let mut app = gallery_app();
        drop(app.view());

        let _ = app.update(Message::Lightbox(lightbox::Message::Close));
        let _ = app.update(Message::Navbar(navbar::Message::OpenSettings));
        drop(app.view());

        let _ = app.update(Message::Navbar(navbar::Message::OpenCards));
        drop(app.view());
    }

    #[test]
    fn title_reflects_the_open_project() {
        let mut app = test_app(vec![sample_project("alpha", 2021, &[])]);
        let base = app.title();

        let _ = app.update(Message::Cards(cards::Message::ProjectOpened(
            "alpha".to_string(),
        )));
        assert_ne!(app.title(), base);
        assert!(app.title().contains(&base));
    }

    #[test]
    fn subscription_is_quiet_when_idle() {
        let app = test_app(vec![sample_project("alpha", 2021, &[])]);
        // Smoke test: batching two none-subscriptions must not panic.
        let _subscription = app.subscription();
    }
}
