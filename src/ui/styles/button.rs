// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Each constructor captures the colors it needs from the active
//! [`ColorScheme`] and returns a style closure, so a theme switch restyles
//! every button on the next frame.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::{fade, ColorScheme};
use iced::gradient::Linear;
use iced::widget::button;
use iced::{Background, Border, Color, Degrees, Gradient, Shadow, Theme};

/// Left-to-right brand gradient.
#[must_use]
pub fn brand_gradient(start: Color, end: Color) -> Background {
    Background::Gradient(Gradient::Linear(
        Linear::new(Degrees(90.0)).add_stop(0.0, start).add_stop(1.0, end),
    ))
}

/// Gradient call-to-action button (submit, hero links).
pub fn gradient(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let start = colors.brand_start;
    let end = colors.brand_end;

    move |_theme: &Theme, status: button::Status| {
        let (alpha, lift) = match status {
            button::Status::Active => (opacity::OPAQUE, shadow::MD),
            button::Status::Hovered => (opacity::OPAQUE, shadow::LG),
            button::Status::Pressed => (opacity::OVERLAY_PRESSED, shadow::MD),
            button::Status::Disabled => (opacity::OVERLAY_MEDIUM, shadow::NONE),
        };

        button::Style {
            background: Some(brand_gradient(fade(start, alpha), fade(end, alpha))),
            text_color: fade(Color::WHITE, alpha.max(opacity::OVERLAY_STRONG)),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: lift,
            snap: true,
        }
    }
}

/// Navigation link; the active section and hovered links take the brand
/// color.
pub fn nav_link(colors: &ColorScheme, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    let idle = colors.text_secondary;
    let accent = colors.brand_start;

    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => accent,
            _ if active => accent,
            _ => idle,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Borderless icon button (menu toggle, social links).
pub fn icon(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let idle = colors.text_secondary;
    let accent = colors.brand_start;
    let hover_bg = fade(colors.surface_secondary, opacity::OVERLAY_MEDIUM);

    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match status {
            button::Status::Hovered | button::Status::Pressed => (Some(Background::Color(hover_bg)), accent),
            _ => (None, idle),
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Carousel indicator dot.
pub fn indicator(colors: &ColorScheme, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    let idle = colors.indicator_idle;
    let accent = colors.brand_start;

    move |_theme: &Theme, status: button::Status| {
        let color = match status {
            _ if active => accent,
            button::Status::Hovered => fade(accent, opacity::OVERLAY_STRONG),
            _ => idle,
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Round floating button holding the sun/moon icon.
pub fn floating(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let start = colors.brand_start;
    let end = colors.brand_end;
    let text_color = colors.toggle_icon;

    move |_theme: &Theme, status: button::Status| {
        let shadow = match status {
            button::Status::Hovered | button::Status::Pressed => shadow::LG,
            _ => shadow::MD,
        };

        button::Style {
            background: Some(brand_gradient(start, end)),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow,
            snap: true,
        }
    }
}
