// SPDX-License-Identifier: MPL-2.0
//! Project detail screen: localized description, tag badges, links, and
//! clickable thumbnails that open the lightbox.

use crate::catalog::Project;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Scrollable, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the detail screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub project: &'a Project,
}

/// Messages emitted by the detail screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    /// Open the lightbox at the given image index.
    OpenImage(usize),
}

/// Render the detail screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back = button(Text::new(ctx.i18n.tr("detail-back")))
        .on_press(Message::Back)
        .padding([spacing::XXS, spacing::SM]);

    let title = Text::new(ctx.i18n.tr(&ctx.project.title_key())).size(typography::TITLE_LG);
    let year = Text::new(
        ctx.i18n
            .tr_with("detail-year", &[("year", ctx.project.year.to_string())]),
    )
    .size(typography::BODY);

    let mut badges = Row::new().spacing(spacing::XXS);
    for tag in &ctx.project.tags {
        badges = badges.push(
            Container::new(Text::new(tag.clone()).size(typography::CAPTION))
                .padding([1.0, spacing::XXS])
                .style(badge_style),
        );
    }

    let description =
        Text::new(ctx.i18n.tr(&ctx.project.description_key())).size(typography::BODY);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(back)
        .push(title)
        .push(year)
        .push(badges)
        .push(description);

    content = content.push(build_links(&ctx));

    if !ctx.project.images.is_empty() {
        content = content.push(
            Text::new(ctx.i18n.tr("detail-images")).size(typography::TITLE_SM),
        );
        content = content.push(build_thumbnails(&ctx));
    }

    Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Repository and demo links rendered as plain text rows.
fn build_links<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS);
    if let Some(repository) = &ctx.project.repository {
        column = column.push(
            Text::new(format!(
                "{} {repository}",
                ctx.i18n.tr("detail-repository")
            ))
            .size(typography::BODY),
        );
    }
    if let Some(demo) = &ctx.project.demo {
        column = column.push(
            Text::new(format!("{} {demo}", ctx.i18n.tr("detail-demo"))).size(typography::BODY),
        );
    }
    column.into()
}

/// Row of clickable screenshot thumbnails.
fn build_thumbnails<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM);
    for index in 0..ctx.project.images.len() {
        let thumb: Element<'a, Message> = match ctx.project.image_handle(index) {
            Some(handle) => iced::widget::image::Image::new(handle)
                .width(Length::Fixed(sizing::DETAIL_THUMB))
                .height(Length::Fixed(sizing::DETAIL_THUMB))
                .into(),
            None => Container::new(
                Text::new(ctx.i18n.tr("cards-no-image")).size(typography::CAPTION),
            )
            .width(Length::Fixed(sizing::DETAIL_THUMB))
            .height(Length::Fixed(sizing::DETAIL_THUMB))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(|theme: &Theme| iced::widget::container::Style {
                background: Some(theme.extended_palette().background.weak.color.into()),
                ..Default::default()
            })
            .into(),
        };

        row = row.push(
            button(thumb)
                .on_press(Message::OpenImage(index))
                .padding(0)
                .style(thumbnail_style),
        );
    }
    Scrollable::new(row)
        .direction(iced::widget::scrollable::Direction::Horizontal(
            iced::widget::scrollable::Scrollbar::default(),
        ))
        .into()
}

fn thumbnail_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        _ => palette.background.strong.color,
    };
    button::Style {
        background: None,
        border: Border {
            radius: radius::SM.into(),
            width: 2.0,
            color: border_color,
        },
        ..Default::default()
    }
}

fn badge_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();
    iced::widget::container::Style {
        background: Some(palette.primary.weak.color.into()),
        text_color: Some(palette.primary.weak.text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
