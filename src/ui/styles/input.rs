// SPDX-License-Identifier: MPL-2.0
//! Form field styles for the contact form.
//!
//! Both styles start from Iced's default for the current status and swap in
//! the scheme's field colors, with a brand-colored border on focus.

use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::{text_editor, text_input};
use iced::{Background, Border, Color, Theme};

#[derive(Debug, Clone, Copy)]
struct FieldColors {
    background: Color,
    border: Color,
    focus: Color,
    value: Color,
    placeholder: Color,
}

impl FieldColors {
    fn from_scheme(colors: &ColorScheme) -> Self {
        Self {
            background: colors.input_background,
            border: colors.input_border,
            focus: colors.brand_start,
            value: colors.text_primary,
            placeholder: colors.text_muted,
        }
    }

    fn border(self, focused: bool) -> Border {
        Border {
            color: if focused { self.focus } else { self.border },
            width: if focused { 2.0 } else { 1.0 },
            radius: radius::MD.into(),
        }
    }
}

/// Single-line field (name, email).
pub fn field(colors: &ColorScheme) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let field = FieldColors::from_scheme(colors);

    move |theme: &Theme, status: text_input::Status| {
        let focused = matches!(status, text_input::Status::Focused { .. });
        let mut style = text_input::default(theme, status);
        style.background = Background::Color(field.background);
        style.border = field.border(focused);
        style.value = field.value;
        style.placeholder = field.placeholder;
        style
    }
}

/// Multi-line message field.
pub fn message(colors: &ColorScheme) -> impl Fn(&Theme, text_editor::Status) -> text_editor::Style {
    let field = FieldColors::from_scheme(colors);

    move |theme: &Theme, status: text_editor::Status| {
        let focused = matches!(status, text_editor::Status::Focused { .. });
        let mut style = text_editor::default(theme, status);
        style.background = Background::Color(field.background);
        style.border = field.border(focused);
        style.value = field.value;
        style.placeholder = field.placeholder;
        style
    }
}
