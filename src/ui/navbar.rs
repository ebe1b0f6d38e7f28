// SPDX-License-Identifier: MPL-2.0
//! Navigation bar pinned to the top of the page.
//!
//! Shows the brand and one link per navigable section. Below the narrow
//! breakpoint the links collapse behind a menu button and open as a dropdown.
//! Selecting a link closes the dropdown and asks the parent to scroll; the
//! scrolling itself lives in the app, which owns the page scrollable.

use crate::content;
use crate::domain::ui::SectionId;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    font,
    widget::{button, Column, Container, Row, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub menu_open: bool,
    /// Window is below the narrow breakpoint.
    pub narrow: bool,
    /// Section currently under the navbar.
    pub active: SectionId,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    SectionSelected(SectionId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ScrollTo(SectionId),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::SectionSelected(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    // The dropdown only exists in the narrow layout.
    if ctx.narrow && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::navbar(ctx.colors))
        .into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(content::BRAND)
        .size(typography::TITLE_MD)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        })
        .color(ctx.colors.brand_mid());

    let mut row = Row::new()
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([0.0, spacing::MD])
        .spacing(spacing::XL)
        .align_y(Vertical::Center)
        .push(Container::new(brand).width(Length::Fill));

    if ctx.narrow {
        let icon = if ctx.menu_open {
            icons::close()
        } else {
            icons::menu()
        };
        let menu_button = button(icons::tinted(icon, sizing::ICON_MD, ctx.colors.text_primary))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::button::icon(ctx.colors));
        row = row.push(menu_button);
    } else {
        for section in SectionId::NAV {
            row = row.push(nav_link(ctx, section));
        }
    }

    row.into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = SectionId::NAV
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, section| {
            column.push(nav_link(ctx, section).width(Length::Fill))
        });

    Container::new(items)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .into()
}

fn nav_link<'a>(ctx: &ViewContext<'a>, section: SectionId) -> button::Button<'a, Message> {
    button(Text::new(section.label()).size(typography::BODY))
        .on_press(Message::SectionSelected(section))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_link(ctx.colors, section == ctx.active))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(narrow: bool, menu_open: bool) {
        let colors = ColorScheme::dark();
        let ctx = ViewContext {
            colors: &colors,
            menu_open,
            narrow,
            active: SectionId::Skills,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_in_every_layout() {
        render(false, false);
        render(true, false);
        render(true, true);
        // An open menu left over from a narrow window is ignored when wide.
        render(false, true);
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert_eq!(event, Event::None);

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut menu_open = false;
        assert_eq!(update(Message::CloseMenu, &mut menu_open), Event::None);
        assert!(!menu_open);
    }

    #[test]
    fn selecting_a_section_closes_menu_and_requests_scroll() {
        for section in SectionId::NAV {
            let mut menu_open = true;
            let event = update(Message::SectionSelected(section), &mut menu_open);
            assert!(!menu_open);
            assert_eq!(event, Event::ScrollTo(section));
        }
    }

    #[test]
    fn selecting_with_closed_menu_keeps_it_closed() {
        let mut menu_open = false;
        let event = update(Message::SectionSelected(SectionId::Contact), &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::ScrollTo(SectionId::Contact));
    }
}
