// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by every section of the page.

## Organization

- **Palette**: Base colors (neutral gray scale plus the blue/purple brand pair)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Animation durations

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);

    // Brand gradient endpoints
    pub const BLUE_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
    pub const PURPLE_500: Color = Color::from_rgb(0.659, 0.333, 0.969);
    pub const PURPLE_600: Color = Color::from_rgb(0.576, 0.200, 0.918);

    /// Sun icon on the theme toggle.
    pub const YELLOW_300: Color = Color::from_rgb(0.992, 0.878, 0.278);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;

    /// Navigation bar backdrop.
    pub const SURFACE: f32 = 0.9;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    /// Fixed navigation bar height.
    pub const NAVBAR_HEIGHT: f32 = 64.0;

    /// Skill progress track thickness.
    pub const SKILL_BAR_HEIGHT: f32 = 10.0;

    /// Project card image height.
    pub const PROJECT_IMAGE_HEIGHT: f32 = 192.0;

    /// Carousel indicator dot diameter.
    pub const INDICATOR: f32 = 12.0;

    /// Floating theme toggle diameter.
    pub const TOGGLE_BUTTON: f32 = 48.0;

    /// Widest content column.
    pub const CONTENT_MAX_WIDTH: f32 = 1152.0;

    /// Narrower column for the form and carousel.
    pub const NARROW_MAX_WIDTH: f32 = 720.0;

    pub const MESSAGE_HEIGHT: f32 = 128.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const DISPLAY: f32 = 48.0;

    /// Section headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Brand, role line.
    pub const TITLE_MD: f32 = 24.0;

    /// Card titles.
    pub const TITLE_SM: f32 = 20.0;

    pub const BODY_LG: f32 = 18.0;
    pub const BODY: f32 = 16.0;
    pub const BODY_SM: f32 = 14.0;

    /// Badges, footer.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Frame interval of the animation tick.
    pub const FRAME: Duration = Duration::from_millis(16);

    /// Section fade-in on first reveal.
    pub const REVEAL: Duration = Duration::from_millis(800);

    /// Skill bar fill.
    pub const SKILL_FILL: Duration = Duration::from_millis(1000);

    /// Delay between consecutive skill bars.
    pub const SKILL_STAGGER: Duration = Duration::from_millis(100);

    /// Each half of the testimonial crossfade.
    pub const CAROUSEL_FADE: Duration = Duration::from_millis(500);

    /// Typing speed of the hero headline.
    pub const TYPE_CHAR: Duration = Duration::from_millis(100);

    /// Deleting speed of the hero headline.
    pub const DELETE_CHAR: Duration = Duration::from_millis(50);

    /// Pause on a fully typed phrase.
    pub const TYPE_HOLD: Duration = Duration::from_millis(2000);
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn icon_sizes_ascend() {
        assert!(sizing::ICON_SM < sizing::ICON_MD);
        assert!(sizing::ICON_MD < sizing::ICON_XL);
        assert_eq!(sizing::ICON_XL, sizing::TOGGLE_BUTTON);
    }

    #[test]
    fn navbar_height_matches_default_scroll_offset() {
        assert_eq!(
            sizing::NAVBAR_HEIGHT,
            crate::app::config::DEFAULT_SCROLL_OFFSET
        );
    }
}
