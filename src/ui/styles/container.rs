// SPDX-License-Identifier: MPL-2.0
//! Container styles.
//!
//! Surfaces take their colors from the active [`ColorScheme`] rather than the
//! Iced palette so the page, cards and navbar match the brand tokens exactly.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::styles::button::brand_gradient;
use crate::ui::theming::{fade, ColorScheme};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background behind every section.
pub fn section(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.page_background;
    let text_color = colors.text_primary;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Fixed navigation bar backdrop and its dropdown.
pub fn navbar(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.navbar_background;
    let text_color = colors.text_primary;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Raised card (skills, projects, testimonials, form).
pub fn card(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_primary;
    let text_color = colors.text_primary;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Tag pill on a project card.
pub fn badge(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.badge_background;
    let text_color = colors.badge_text;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Empty part of a skill bar.
pub fn track(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_secondary;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled part of a skill bar, and any other brand-gradient strip.
pub fn gradient_fill(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let start = colors.brand_start;
    let end = colors.brand_end;

    move |_theme: &Theme| container::Style {
        background: Some(brand_gradient(start, end)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Footer strip at the bottom of the page.
pub fn footer(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_primary;
    let text_color = colors.text_muted;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Stand-in for an image that is loading or failed to load.
pub fn placeholder(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_secondary;
    let text_color = colors.text_muted;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Inline status line under the contact form.
pub fn status(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fade(color, opacity::OVERLAY_SUBTLE))),
        text_color: Some(color),
        border: Border {
            color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
