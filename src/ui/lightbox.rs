// SPDX-License-Identifier: MPL-2.0
//! Full-screen lightbox overlay.
//!
//! Renders the active image of the open project above the current
//! screen, with previous/next buttons, a 1-based position counter, and
//! a close button. Keyboard and touch events are routed here by the app
//! subscription only while the overlay is open.

use crate::catalog::Project;
use crate::gallery::Lightbox;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Border, Color, Element, Length, Point, Theme,
};

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub project: &'a Project,
    pub lightbox: &'a Lightbox,
}

/// Messages emitted by the lightbox (buttons, keyboard, touch).
#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    Close,
    /// A finger touched down at the given position.
    TouchStarted(Point),
    /// A finger lifted at the given position, ending the gesture.
    TouchEnded(Point),
    /// The platform lost the touch; the pending gesture is discarded.
    TouchCancelled,
}

/// Render the lightbox overlay. Returns nothing when the gallery state
/// is closed or stale, so the caller can skip stacking it.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let (current, total) = ctx.lightbox.counter()?;
    let index = ctx.lightbox.current()?;

    let image: Element<'a, Message> = match ctx.project.image_handle(index) {
        Some(handle) => iced::widget::image::Image::new(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(
            Text::new(ctx.i18n.tr("cards-no-image"))
                .size(typography::TITLE_SM)
                .color(palette::WHITE),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
    };

    let close = button(Text::new("✕").size(typography::TITLE_SM))
        .on_press(Message::Close)
        .padding(spacing::XS)
        .style(nav_button_style);
    let top_bar = Row::new()
        .width(Length::Fill)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(close);

    // Arrows are hidden for single-image galleries; navigation would be
    // a no-op anyway.
    let mut middle = Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .spacing(spacing::SM);
    if total > 1 {
        middle = middle.push(
            button(Text::new("‹").size(typography::TITLE_LG))
                .on_press(Message::Previous)
                .width(Length::Fixed(sizing::NAV_BUTTON))
                .style(nav_button_style),
        );
    }
    middle = middle.push(image);
    if total > 1 {
        middle = middle.push(
            button(Text::new("›").size(typography::TITLE_LG))
                .on_press(Message::Next)
                .width(Length::Fixed(sizing::NAV_BUTTON))
                .style(nav_button_style),
        );
    }

    let counter = ctx.i18n.tr_with(
        "lightbox-counter",
        &[
            ("current", current.to_string()),
            ("total", total.to_string()),
        ],
    );
    let bottom_bar = Container::new(
        Text::new(counter)
            .size(typography::BODY)
            .color(palette::WHITE),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding(spacing::SM);

    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .push(top_bar)
        .push(middle)
        .push(bottom_bar);

    Some(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|theme: &Theme| {
                let scheme = if theme.extended_palette().is_dark {
                    ColorScheme::dark()
                } else {
                    ColorScheme::light()
                };
                iced::widget::container::Style {
                    background: Some(scheme.overlay_background.into()),
                    text_color: Some(scheme.overlay_text),
                    ..Default::default()
                }
            })
            .into(),
    )
}

fn nav_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::TRANSPARENT,
    };
    button::Style {
        background: Some(
            Color {
                a: alpha,
                ..palette::GRAY_700
            }
            .into(),
        ),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
