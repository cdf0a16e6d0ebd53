// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language and theme selection.
//!
//! Changes take effect immediately and are persisted to `settings.toml`
//! by the app update loop.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, Column, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeSelected(ThemeMode),
    Back,
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back = button(Text::new(ctx.i18n.tr("detail-back")))
        .on_press(Message::Back)
        .padding([spacing::XXS, spacing::SM]);

    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let language_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("settings-language")).size(typography::BODY))
        .push(pick_list(
            ctx.i18n.available_locales.clone(),
            Some(ctx.i18n.current_locale().clone()),
            Message::LanguageSelected,
        ));

    let theme_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("settings-theme")).size(typography::BODY))
        .push(pick_list(
            ThemeMode::ALL,
            Some(ctx.theme_mode),
            Message::ThemeSelected,
        ));

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .push(back)
        .push(title)
        .push(language_row)
        .push(theme_row)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            theme_mode: ThemeMode::System,
        });
    }
}
