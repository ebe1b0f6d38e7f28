// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one vertical scrollable holding every section at the height
//! given by [`PageLayout`], with the navbar and the theme toggle stacked on
//! top of it.

use super::Message;
use crate::content;
use crate::domain::portfolio::Project;
use crate::domain::ui::SectionId;
use crate::ui::animation::Reveal;
use crate::ui::carousel::{self, Carousel};
use crate::ui::contact_form::{self, ContactForm};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::footer;
use crate::ui::hero;
use crate::ui::layout::{
    PageLayout, CONTACT_HEIGHT, GRID_GAP, HEADING_BLOCK, SECTION_PADDING, TESTIMONIAL_HEIGHT,
};
use crate::ui::navbar;
use crate::ui::project_card::{self, ImageState};
use crate::ui::skills;
use crate::ui::styles;
use crate::ui::theme_toggle;
use crate::ui::theming::{fade, AppTheme, ColorScheme};
use iced::widget::{stack, Column, Container, Id, Row, Scrollable, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    font, Element, Font, Length,
};
use std::time::Instant;

/// Identifier of the page scrollable, target of smooth scrolling.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub theme: &'a AppTheme,
    pub layout: PageLayout,
    pub menu_open: bool,
    pub active: SectionId,
    pub reveals: &'a [Reveal; SectionId::ALL.len()],
    pub typed: &'a str,
    pub carousel: Option<&'a Carousel>,
    pub images: &'a [ImageState],
    pub contact: &'a ContactForm,
    pub footer_year: i32,
    pub now: Instant,
}

impl<'a> ViewContext<'a> {
    fn reveal(&self, section: SectionId) -> &'a Reveal {
        &self.reveals[section.index()]
    }

    fn opacity(&self, section: SectionId) -> f32 {
        self.reveal(section).opacity(self.now)
    }
}

/// Renders the whole page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = &ctx.theme.colors;

    let page = Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(view_hero(&ctx))
        .push(view_skills(&ctx))
        .push(view_projects(&ctx))
        .push(view_testimonials(&ctx))
        .push(view_contact(&ctx))
        .push(footer::view(colors, ctx.footer_year));

    let page = Scrollable::new(
        Container::new(page)
            .width(Length::Fill)
            .style(styles::container::section(colors)),
    )
    .id(page_id())
    .width(Length::Fill)
    .height(Length::Fill)
    .on_scroll(Message::Scrolled);

    let navbar = navbar::view(navbar::ViewContext {
        colors,
        menu_open: ctx.menu_open,
        narrow: ctx.layout.is_narrow(),
        active: ctx.active,
    })
    .map(Message::Navbar);

    let toggle = Container::new(theme_toggle::view(ctx.theme).map(Message::ThemeToggle))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom);

    stack![page, navbar, toggle].into()
}

fn view_hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let hero = hero::view(hero::ViewContext {
        colors: &ctx.theme.colors,
        typed: ctx.typed,
        links: content::SOCIAL_LINKS,
        reveal: ctx.opacity(SectionId::Home),
        narrow: ctx.layout.is_narrow(),
        height: ctx.layout.height(SectionId::Home),
    })
    .map(Message::Hero);

    Container::new(hero)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn view_skills<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let grid = skills::view(skills::ViewContext {
        skills: content::SKILLS,
        colors: &ctx.theme.colors,
        reveal: ctx.reveal(SectionId::Skills),
        columns: ctx.layout.skill_columns(),
        now: ctx.now,
    });

    framed_section(ctx, SectionId::Skills, "Skills & Expertise", grid)
}

fn view_projects<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = ctx.layout.project_columns().max(1);
    let opacity = ctx.opacity(SectionId::Projects);

    let grid = content::PROJECTS
        .chunks(columns)
        .enumerate()
        .fold(Column::new().spacing(GRID_GAP), |grid, (row_index, chunk)| {
            let mut row = Row::new().spacing(GRID_GAP);
            for (offset, project) in chunk.iter().enumerate() {
                let index = row_index * columns + offset;
                row = row.push(project_cell(ctx, project, index, opacity));
            }
            for _ in chunk.len()..columns {
                row = row.push(Space::new().width(Length::Fill));
            }
            grid.push(row)
        });

    framed_section(ctx, SectionId::Projects, "Featured Projects", grid.into())
}

fn project_cell<'a>(
    ctx: &ViewContext<'a>,
    project: &'a Project,
    index: usize,
    opacity: f32,
) -> Element<'a, Message> {
    static LOADING: ImageState = ImageState::Loading;
    let image = ctx.images.get(index).unwrap_or(&LOADING);

    project_card::view(project_card::ViewContext {
        project,
        image,
        colors: &ctx.theme.colors,
        opacity,
    })
}

fn view_testimonials<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match ctx.carousel {
        Some(carousel) => carousel::view(carousel::ViewContext {
            carousel,
            testimonials: content::TESTIMONIALS,
            colors: &ctx.theme.colors,
            now: ctx.now,
        })
        .map(Message::Carousel),
        None => Space::new().into(),
    };

    let body = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fixed(TESTIMONIAL_HEIGHT))
        .align_x(Horizontal::Center)
        .clip(true);

    framed_section(ctx, SectionId::Testimonials, "Testimonials", body.into())
}

fn view_contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let form = contact_form::view(contact_form::ViewContext {
        form: ctx.contact,
        colors: &ctx.theme.colors,
        opacity: ctx.opacity(SectionId::Contact),
    })
    .map(Message::Contact);

    let body = Container::new(form)
        .width(Length::Fill)
        .height(Length::Fixed(CONTACT_HEIGHT))
        .align_x(Horizontal::Center)
        .clip(true);

    framed_section(ctx, SectionId::Contact, "Get In Touch", body.into())
}

/// Wraps a section body with its heading and vertical padding, at the
/// height the layout reserved for it.
fn framed_section<'a>(
    ctx: &ViewContext<'a>,
    section: SectionId,
    title: &'a str,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(heading(title, &ctx.theme.colors, ctx.opacity(section)))
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.layout.height(section)))
        .padding([SECTION_PADDING, spacing::MD])
        .align_x(Horizontal::Center)
        .into()
}

fn heading<'a>(title: &'a str, colors: &ColorScheme, alpha: f32) -> Element<'a, Message> {
    Container::new(
        Text::new(title)
            .size(typography::TITLE_LG)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            })
            .color(fade(colors.brand_mid(), alpha)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEADING_BLOCK))
    .align_x(Horizontal::Center)
    .into()
}

/// Scrollable identifier as an Iced widget id.
#[must_use]
pub fn page_id() -> Id {
    Id::new(PAGE_SCROLLABLE_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::theme::ThemePreference;
    use iced::Size;

    fn render(size: Size, preference: ThemePreference, with_carousel: bool) {
        let theme = AppTheme::new(preference);
        let layout = PageLayout::new(size, content::SKILLS.len(), content::PROJECTS.len());
        let reveals = [Reveal::default(); SectionId::ALL.len()];
        let carousel = Carousel::new(content::TESTIMONIALS.len()).filter(|_| with_carousel);
        let images = vec![ImageState::Loading; content::PROJECTS.len()];
        let form = ContactForm::new();

        let _element = view(ViewContext {
            theme: &theme,
            layout,
            menu_open: true,
            active: SectionId::Home,
            reveals: &reveals,
            typed: "Front",
            carousel: carousel.as_ref(),
            images: &images,
            contact: &form,
            footer_year: 2025,
            now: Instant::now(),
        });
    }

    #[test]
    fn page_renders_in_both_themes_and_widths() {
        render(Size::new(1280.0, 800.0), ThemePreference::Dark, true);
        render(Size::new(480.0, 800.0), ThemePreference::Light, true);
    }

    #[test]
    fn page_renders_without_testimonials() {
        render(Size::new(1280.0, 800.0), ThemePreference::Dark, false);
    }

    #[test]
    fn missing_image_state_falls_back_to_loading() {
        let theme = AppTheme::new(ThemePreference::Dark);
        let layout = PageLayout::new(Size::new(1280.0, 800.0), 0, content::PROJECTS.len());
        let reveals = [Reveal::default(); SectionId::ALL.len()];
        let form = ContactForm::new();
        let _element = view(ViewContext {
            theme: &theme,
            layout,
            menu_open: false,
            active: SectionId::Projects,
            reveals: &reveals,
            typed: "",
            carousel: None,
            images: &[],
            contact: &form,
            footer_year: 2025,
            now: Instant::now(),
        });
    }
}
