// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are monochrome SVGs embedded at compile time from `assets/icons/`
//! and tinted at render time, so one asset serves both themes. Handles are
//! cached using `OnceLock` and created on first access.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let toggle = button(icons::tinted(icons::sun(), 24.0, colors.text_primary));
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `close` not `close_menu`).

use crate::domain::portfolio::IconKind;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use rust_embed::RustEmbed;
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/icons/"]
struct IconAssets;

/// Loads an embedded asset. A missing asset yields an empty handle that
/// renders nothing.
fn load(filename: &str) -> Handle {
    match IconAssets::get(filename) {
        Some(file) => Handle::from_memory(file.data.into_owned()),
        None => {
            tracing::warn!(filename, "missing embedded icon");
            Handle::from_memory(Vec::new())
        }
    }
}

/// Defines an icon function returning a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            HANDLE.get_or_init(|| load($filename)).clone()
        }
    };
}

// =============================================================================
// Skill Icons
// =============================================================================

define_icon!(monitor, "monitor.svg", "Monitor: screen on a stand.");
define_icon!(palette, "palette.svg", "Palette: painter's palette with dots.");
define_icon!(database, "database.svg", "Database: stacked cylinder.");
define_icon!(code, "code.svg", "Code: angle brackets.");
define_icon!(terminal, "terminal.svg", "Terminal: prompt chevron and cursor.");
define_icon!(globe, "globe.svg", "Globe: circle with meridians.");

// =============================================================================
// Social Icons
// =============================================================================

define_icon!(github, "github.svg", "GitHub: octocat outline.");
define_icon!(linkedin, "linkedin.svg", "LinkedIn: \"in\" mark.");
define_icon!(mail, "mail.svg", "Mail: envelope.");

// =============================================================================
// Interface Icons
// =============================================================================

define_icon!(sun, "sun.svg", "Sun: circle with rays.");
define_icon!(moon, "moon.svg", "Moon: crescent.");
define_icon!(menu, "menu.svg", "Menu: three horizontal lines.");
define_icon!(close, "close.svg", "Close: diagonal cross.");
define_icon!(image, "image.svg", "Image: framed landscape.");
define_icon!(image_off, "image_off.svg", "Broken image: framed landscape struck through.");
define_icon!(quote, "quote.svg", "Quote: pair of quotation marks.");
define_icon!(send, "send.svg", "Send: paper plane.");

/// Returns the icon for a content icon kind.
#[must_use]
pub fn for_kind(kind: IconKind) -> Handle {
    match kind {
        IconKind::Monitor => monitor(),
        IconKind::Palette => palette(),
        IconKind::Database => database(),
        IconKind::Code => code(),
        IconKind::Terminal => terminal(),
        IconKind::Globe => globe(),
        IconKind::Github => github(),
        IconKind::Linkedin => linkedin(),
        IconKind::Mail => mail(),
    }
}

/// Renders `handle` as a square icon tinted with `color`.
pub fn tinted<'a>(handle: Handle, size: f32, color: Color) -> Svg<'a> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FILES: &[&str] = &[
        "monitor.svg",
        "palette.svg",
        "database.svg",
        "code.svg",
        "terminal.svg",
        "globe.svg",
        "github.svg",
        "linkedin.svg",
        "mail.svg",
        "sun.svg",
        "moon.svg",
        "menu.svg",
        "close.svg",
        "image.svg",
        "image_off.svg",
        "quote.svg",
        "send.svg",
    ];

    #[test]
    fn every_icon_asset_is_embedded() {
        for filename in ALL_FILES {
            let file = IconAssets::get(filename).unwrap_or_else(|| panic!("{filename} missing"));
            let text = std::str::from_utf8(&file.data).expect("svg is utf-8");
            assert!(text.contains("<svg"), "{filename} is not an svg");
        }
    }

    #[test]
    fn cached_handles_are_stable() {
        assert_eq!(sun().id(), sun().id());
        assert_ne!(sun().id(), moon().id());
    }
}
