// SPDX-License-Identifier: MPL-2.0
//! Page footer with the copyright line.

use crate::content;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::Datelike;
use iced::widget::{Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Height of the footer strip.
pub const HEIGHT: f32 = 80.0;

/// Copyright notice for `year`.
#[must_use]
pub fn copyright(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", content::OWNER)
}

/// Year shown in the footer, from the local clock.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn view<'a, Message: 'a>(colors: &ColorScheme, year: i32) -> Element<'a, Message> {
    Container::new(Text::new(copyright(year)).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(HEIGHT))
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .style(styles::container::footer(colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_owner() {
        assert_eq!(copyright(2025), "© 2025 Itam James. All rights reserved.");
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
