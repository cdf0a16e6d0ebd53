// SPDX-License-Identifier: MPL-2.0
//! Card grid screen: searchable, tag-filtered, paginated project cards.

use crate::catalog::Project;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, pick_list, text_input, Column, Container, Row, Scrollable, Space, Text},
    Border, Element, Length, Theme,
};
use std::fmt;

/// Entry in the tag pick list; `All` clears the restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagChoice {
    All,
    Tag(String),
}

impl TagChoice {
    /// The tag to filter by, if any.
    #[must_use]
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            TagChoice::All => None,
            TagChoice::Tag(tag) => Some(tag),
        }
    }
}

impl fmt::Display for TagChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The pick list renders Display directly; "*" stands for the
            // unrestricted choice across locales.
            TagChoice::All => write!(f, "*"),
            TagChoice::Tag(tag) => write!(f, "{tag}"),
        }
    }
}

/// Contextual data needed to render the card grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Projects visible on the current page, already filtered.
    pub page_projects: Vec<&'a Project>,
    /// Every tag present in the catalog.
    pub tags: Vec<String>,
    /// Currently selected tag restriction.
    pub selected_tag: Option<&'a str>,
    /// Raw (not yet debounced) search box content.
    pub search_input: &'a str,
    /// 1-based current page.
    pub page: usize,
    /// Total page count for the filtered set.
    pub page_count: usize,
    /// Total number of matching projects.
    pub match_count: usize,
}

/// Messages emitted by the card grid.
#[derive(Debug, Clone)]
pub enum Message {
    SearchInputChanged(String),
    TagSelected(TagChoice),
    ProjectOpened(String),
    NextPage,
    PreviousPage,
}

/// Render the card grid screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let controls = build_controls(&ctx);
    let grid: Element<'a, Message> = if ctx.page_projects.is_empty() {
        empty_state(&ctx)
    } else {
        build_grid(&ctx)
    };
    let pagination = build_pagination(&ctx);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(controls)
        .push(Scrollable::new(grid).height(Length::Fill))
        .push(pagination);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Search box and tag filter row.
fn build_controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let placeholder = ctx.i18n.tr("cards-search-placeholder");
    let search = text_input(&placeholder, ctx.search_input)
        .on_input(Message::SearchInputChanged)
        .padding(spacing::XS)
        .width(Length::FillPortion(3));

    let mut options = vec![TagChoice::All];
    options.extend(ctx.tags.iter().cloned().map(TagChoice::Tag));
    let selected = match ctx.selected_tag {
        Some(tag) => TagChoice::Tag(tag.to_string()),
        None => TagChoice::All,
    };
    let tag_picker = pick_list(options, Some(selected), Message::TagSelected)
        .padding(spacing::XS)
        .width(Length::FillPortion(1));

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(search)
        .push(tag_picker)
        .into()
}

/// Wrapping rows of project cards.
fn build_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // Fixed three columns; the scrollable handles vertical overflow.
    const COLUMNS: usize = 3;

    let mut column = Column::new().spacing(spacing::MD);
    for chunk in ctx.page_projects.chunks(COLUMNS) {
        let mut row = Row::new().spacing(spacing::MD);
        for &project in chunk {
            row = row.push(build_card(ctx, project));
        }
        column = column.push(row);
    }
    column.into()
}

/// A single project card: thumbnail, title, summary, year and tags.
fn build_card<'a>(ctx: &ViewContext<'a>, project: &'a Project) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match project.image_handle(0) {
        Some(handle) => iced::widget::image::Image::new(handle)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_THUMB_HEIGHT))
            .into(),
        None => Container::new(Text::new(ctx.i18n.tr("cards-no-image")).size(typography::CAPTION))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_THUMB_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(|theme: &Theme| iced::widget::container::Style {
                background: Some(theme.extended_palette().background.weak.color.into()),
                ..Default::default()
            })
            .into(),
    };

    let title = Text::new(ctx.i18n.tr(&project.title_key())).size(typography::TITLE_SM);
    let summary = Text::new(ctx.i18n.tr(&project.summary_key())).size(typography::BODY);

    let mut badges = Row::new().spacing(spacing::XXS);
    badges = badges.push(Text::new(project.year.to_string()).size(typography::CAPTION));
    for tag in &project.tags {
        badges = badges.push(
            Container::new(Text::new(tag.clone()).size(typography::CAPTION))
                .padding([1.0, spacing::XXS])
                .style(badge_style),
        );
    }

    let body = Column::new()
        .spacing(spacing::XS)
        .push(thumbnail)
        .push(title)
        .push(summary)
        .push(badges);

    button(body)
        .on_press(Message::ProjectOpened(project.id.clone()))
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(card_style)
        .into()
}

/// Message shown when no project matches the filter.
fn empty_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(Text::new(ctx.i18n.tr("cards-empty")).size(typography::TITLE_SM))
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}

/// Previous/next page buttons with a localized page indicator.
fn build_pagination<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let indicator = ctx.i18n.tr_with(
        "cards-page-indicator",
        &[
            ("page", ctx.page.to_string()),
            ("pages", ctx.page_count.to_string()),
            ("matches", ctx.match_count.to_string()),
        ],
    );

    let previous = if ctx.page > 1 {
        button(Text::new("<")).on_press(Message::PreviousPage)
    } else {
        button(Text::new("<"))
    };
    let next = if ctx.page < ctx.page_count {
        button(Text::new(">")).on_press(Message::NextPage)
    } else {
        button(Text::new(">"))
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Space::new().width(Length::Fill))
        .push(previous)
        .push(Text::new(indicator).size(typography::BODY))
        .push(next)
        .push(Space::new().width(Length::Fill))
        .into()
}

fn card_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
        _ => palette.background.weak.color,
    };
    button::Style {
        background: Some(background.into()),
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette.background.strong.color,
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
