// SPDX-License-Identifier: MPL-2.0
//! Floating theme toggle button.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::widget::{button, svg};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle,
}

/// Icon for the current theme: the sun switches to light, the moon to dark.
#[must_use]
pub fn icon(theme: &AppTheme) -> svg::Handle {
    if theme.is_dark() {
        icons::sun()
    } else {
        icons::moon()
    }
}

pub fn view<'a>(theme: &AppTheme) -> Element<'a, Message> {
    let colors = &theme.colors;

    button(icons::tinted(icon(theme), sizing::ICON_MD, colors.toggle_icon))
        .width(Length::Fixed(sizing::TOGGLE_BUTTON))
        .height(Length::Fixed(sizing::TOGGLE_BUTTON))
        .padding(spacing::SM)
        .on_press(Message::Toggle)
        .style(styles::button::floating(colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::theme::ThemePreference;

    #[test]
    fn dark_theme_shows_sun() {
        let theme = AppTheme::new(ThemePreference::Dark);
        assert_eq!(icon(&theme).id(), icons::sun().id());
    }

    #[test]
    fn light_theme_shows_moon() {
        let theme = AppTheme::new(ThemePreference::Light);
        assert_eq!(icon(&theme).id(), icons::moon().id());
    }
}
