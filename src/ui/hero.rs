// SPDX-License-Identifier: MPL-2.0
//! Hero banner.
//!
//! Typing headline, tagline, social links and the decorative gradient panel.
//! Everything fades in once when the page opens.

use crate::content;
use crate::domain::portfolio::SocialLink;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::{fade, ColorScheme};
use crate::ui::widgets::GradientPanel;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    font, Element, Font, Length,
};

/// Vertical distance the text block rises while fading in.
const RISE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Open an external link (profile page or mail client).
    OpenLink(&'static str),
}

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    /// Text currently shown by the typewriter.
    pub typed: &'a str,
    pub links: &'a [SocialLink],
    /// Eased reveal progress, `0.0` to `1.0`.
    pub reveal: f32,
    pub narrow: bool,
    /// Height of the section.
    pub height: f32,
}

/// The headline sentence for a typed role.
#[must_use]
pub fn headline(typed: &str) -> String {
    format!("My Name is {} and I'm a {typed}", content::OWNER)
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let alpha = ctx.reveal;

    let title = Text::new(format!("{}|", headline(ctx.typed)))
        .size(typography::DISPLAY)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        })
        .color(fade(colors.brand_mid(), alpha));

    let tagline = Text::new(content::TAGLINE)
        .size(typography::TITLE_SM)
        .color(fade(colors.text_secondary, alpha));

    let socials = ctx.links.iter().fold(Row::new().spacing(spacing::MD), |row, link| {
        row.push(
            button(icons::tinted(
                icons::for_kind(link.icon),
                sizing::ICON_MD,
                fade(colors.text_primary, alpha),
            ))
            .padding(spacing::XS)
            .on_press(Message::OpenLink(link.url))
            .style(styles::button::icon(colors)),
        )
    });

    let intro = Column::new()
        .spacing(spacing::LG)
        .padding(iced::Padding {
            top: RISE * (1.0 - alpha),
            ..iced::Padding::ZERO
        })
        .push(title)
        .push(tagline)
        .push(socials);

    let panel =
        GradientPanel::new(colors.brand_start, colors.brand_end, colors.panel_veil, alpha).into_element();

    let body: Element<'a, Message> = if ctx.narrow {
        Column::new()
            .spacing(spacing::XXL)
            .push(intro)
            .push(panel)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .align_y(Vertical::Center)
            .push(Container::new(intro).width(Length::FillPortion(1)))
            .push(Container::new(panel).width(Length::FillPortion(1)))
            .into()
    };

    Container::new(
        Column::new()
            .push(Space::new().height(Length::Fixed(sizing::NAVBAR_HEIGHT)))
            .push(body),
    )
    .width(Length::Fill)
    .max_width(sizing::CONTENT_MAX_WIDTH)
    .height(Length::Fixed(ctx.height))
    .padding([0.0, spacing::MD])
    .align_x(Horizontal::Left)
    .align_y(Vertical::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SOCIAL_LINKS;

    #[test]
    fn headline_names_owner_and_role() {
        assert_eq!(
            headline("UI/UX Designer"),
            "My Name is Itam James and I'm a UI/UX Designer"
        );
        assert!(headline("").ends_with("I'm a "));
    }

    #[test]
    fn renders_wide_and_narrow() {
        let colors = ColorScheme::dark();
        for narrow in [false, true] {
            let _element = view(ViewContext {
                colors: &colors,
                typed: "Front",
                links: SOCIAL_LINKS,
                reveal: 0.5,
                narrow,
                height: 800.0,
            });
        }
    }
}
