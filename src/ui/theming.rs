// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes.
//!
//! Every widget style reads its colors from the active [`ColorScheme`], and
//! [`AppTheme::iced_theme`] feeds the same scheme to Iced so built-in widget
//! styles (text inputs, scrollbars) follow the preference too.

use crate::domain::theme::ThemePreference;
use crate::ui::design_tokens::{opacity, palette};
use iced::theme::Palette;
use iced::{Color, Theme};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub page_background: Color,
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub navbar_background: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand colors (gradient endpoints)
    pub brand_start: Color,
    pub brand_end: Color,

    // Form fields
    pub input_background: Color,
    pub input_border: Color,

    // Project tags
    pub badge_background: Color,
    pub badge_text: Color,

    /// Sun or moon glyph on the theme toggle.
    pub toggle_icon: Color,

    // Semantic colors
    pub error: Color,
    pub success: Color,

    /// Inactive carousel indicator.
    pub indicator_idle: Color,

    /// Translucent layer over the hero panel.
    pub panel_veil: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::GRAY_50,
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_200,
            navbar_background: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,
            text_muted: palette::GRAY_500,

            brand_start: palette::BLUE_500,
            brand_end: palette::PURPLE_500,

            input_background: palette::GRAY_100,
            input_border: palette::GRAY_200,

            badge_background: palette::GRAY_100,
            badge_text: palette::GRAY_700,

            toggle_icon: palette::GRAY_900,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,

            indicator_idle: palette::GRAY_400,

            panel_veil: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::GRAY_900,
            surface_primary: palette::GRAY_800,
            surface_secondary: palette::GRAY_700,
            navbar_background: Color {
                a: opacity::SURFACE,
                ..palette::GRAY_900
            },

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            text_muted: palette::GRAY_400,

            brand_start: palette::BLUE_500,
            brand_end: palette::PURPLE_500,

            input_background: palette::GRAY_800,
            input_border: palette::GRAY_700,

            badge_background: palette::GRAY_700,
            badge_text: palette::GRAY_300,

            toggle_icon: palette::YELLOW_300,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,

            indicator_idle: palette::GRAY_500,

            panel_veil: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::BLACK
            },
        }
    }

    /// Color halfway along the brand gradient, for single-color accents.
    #[must_use]
    pub fn brand_mid(&self) -> Color {
        mix(self.brand_start, self.brand_end, 0.5)
    }
}

/// Linear interpolation between two colors, `t` clamped to `0..=1`.
#[must_use]
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a + (b.a - a.a) * t,
    }
}

/// Returns `color` with its alpha multiplied by `alpha`.
#[must_use]
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Active theme: the preference plus the scheme derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub preference: ThemePreference,
}

impl AppTheme {
    #[must_use]
    pub fn new(preference: ThemePreference) -> Self {
        let colors = match preference {
            ThemePreference::Light => ColorScheme::light(),
            ThemePreference::Dark => ColorScheme::dark(),
        };

        Self { colors, preference }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.preference.is_dark()
    }

    /// Builds the Iced theme matching this scheme.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        let name = match self.preference {
            ThemePreference::Light => "Folio Light",
            ThemePreference::Dark => "Folio Dark",
        };

        Theme::custom(
            name.to_string(),
            Palette {
                background: self.colors.page_background,
                text: self.colors.text_primary,
                primary: self.colors.brand_start,
                success: self.colors.success,
                warning: palette::PURPLE_600,
                danger: self.colors.error,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.page_background.r > 0.9);
        assert!(scheme.text_primary.r < 0.2);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.page_background.r < 0.2);
        assert!(scheme.text_primary.r > 0.9);
    }

    #[test]
    fn both_themes_share_the_brand_gradient() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert_eq!(light.brand_start, dark.brand_start);
        assert_eq!(light.brand_end, dark.brand_end);
        assert!(light.brand_start.b > light.brand_start.r);
    }

    #[test]
    fn app_theme_follows_preference() {
        assert!(AppTheme::new(ThemePreference::Dark).is_dark());
        assert!(!AppTheme::new(ThemePreference::Light).is_dark());
        assert_eq!(AppTheme::new(ThemePreference::Light).colors, ColorScheme::light());
    }

    #[test]
    fn iced_theme_uses_scheme_background() {
        let theme = AppTheme::new(ThemePreference::Light).iced_theme();
        assert_eq!(theme.palette().background, ColorScheme::light().page_background);
    }

    #[test]
    fn mix_hits_endpoints() {
        let a = palette::BLUE_500;
        let b = palette::PURPLE_500;
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        assert_eq!(mix(a, b, 7.0), b);
    }

    #[test]
    fn fade_scales_alpha() {
        let faded = fade(palette::WHITE, 0.25);
        assert!((faded.a - 0.25).abs() < f32::EPSILON);
        assert_eq!(faded.r, 1.0);
    }
}
