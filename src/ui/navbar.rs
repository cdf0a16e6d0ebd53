// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar shows the portfolio title and switches between the card grid
//! and the settings screen.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenCards,
    OpenSettings,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let cards_button = nav_button(
        ctx.i18n.tr("navbar-projects"),
        Message::OpenCards,
        ctx.screen == Screen::Cards,
    );
    let settings_button = nav_button(
        ctx.i18n.tr("navbar-settings"),
        Message::OpenSettings,
        ctx.screen == Screen::Settings,
    );

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(cards_button)
        .push(settings_button);

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| iced::widget::container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

/// Build one navigation button, highlighted when its screen is active.
fn nav_button<'a>(label: String, message: Message, active: bool) -> Element<'a, Message> {
    let styled = if active {
        button(Text::new(label)).style(active_style)
    } else {
        button(Text::new(label)).style(button::text)
    };
    styled
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .into()
}

fn active_style(theme: &Theme, _status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    button::Style {
        background: Some(palette.primary.weak.color.into()),
        text_color: palette.primary.weak.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
