// SPDX-License-Identifier: MPL-2.0
//! Project card.
//!
//! Pure rendering of one [`Project`]: image, title, description and one badge
//! per tag, in the order given. The card owns no state and emits no messages;
//! the image download lives in the app and arrives here as an [`ImageState`].

use crate::domain::portfolio::Project;
use crate::error::Result;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::layout::PROJECT_CARD_HEIGHT;
use crate::ui::styles;
use crate::ui::theming::{fade, ColorScheme};
use iced::gradient::Linear;
use iced::widget::{container, image, stack, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    font, Background, Color, ContentFit, Degrees, Element, Font, Gradient, Length, Theme,
};

/// Download state of a project image.
#[derive(Debug, Clone, Default)]
pub enum ImageState {
    #[default]
    Loading,
    Loaded(image::Handle),
    Failed,
}

impl ImageState {
    /// Converts a finished download into a displayable state.
    pub fn from_download(result: Result<Vec<u8>>) -> Self {
        match result {
            Ok(bytes) => ImageState::Loaded(image::Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::warn!("project image unavailable: {err}");
                ImageState::Failed
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ImageState::Loading)
    }
}

/// Contextual data needed to render a card.
pub struct ViewContext<'a> {
    pub project: &'a Project,
    pub image: &'a ImageState,
    pub colors: &'a ColorScheme,
    /// Reveal progress, `0.0` (hidden) to `1.0`.
    pub opacity: f32,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let alpha = ctx.opacity;

    let title = Text::new(ctx.project.title)
        .size(typography::TITLE_SM)
        .font(Font {
            weight: font::Weight::Semibold,
            ..Font::DEFAULT
        })
        .color(fade(colors.text_primary, alpha));

    let description = Text::new(ctx.project.description)
        .size(typography::BODY)
        .color(fade(colors.text_secondary, alpha));

    let tags = ctx
        .project
        .tags
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, tag| {
            row.push(
                Container::new(Text::new(*tag).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::badge(colors)),
            )
        })
        .wrap();

    let body = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::LG)
        .push(title)
        .push(description)
        .push(tags);

    let card = Column::new()
        .push(image_region(ctx.image, colors, alpha))
        .push(body);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fixed(PROJECT_CARD_HEIGHT))
        .clip(true)
        .style(styles::container::card(colors))
        .into()
}

fn image_region<'a, Message: 'a>(
    state: &'a ImageState,
    colors: &ColorScheme,
    alpha: f32,
) -> Element<'a, Message> {
    let height = Length::Fixed(sizing::PROJECT_IMAGE_HEIGHT);

    match state {
        ImageState::Loaded(handle) => {
            let picture = image(handle.clone())
                .width(Length::Fill)
                .height(height)
                .content_fit(ContentFit::Cover)
                .opacity(alpha);

            // Darkens the bottom edge of the picture.
            let shade = Container::new(Column::new())
                .width(Length::Fill)
                .height(height)
                .style(|_theme: &Theme| container::Style {
                    background: Some(Background::Gradient(Gradient::Linear(
                        Linear::new(Degrees(0.0))
                            .add_stop(0.0, fade(Color::BLACK, opacity::OVERLAY_MEDIUM))
                            .add_stop(1.0, Color::TRANSPARENT),
                    ))),
                    ..Default::default()
                });

            stack![picture, shade].into()
        }
        ImageState::Loading | ImageState::Failed => {
            let (icon, caption) = if state.is_loading() {
                (icons::image(), "Loading image...")
            } else {
                (icons::image_off(), "Image unavailable")
            };

            let content = Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(icons::tinted(icon, sizing::ICON_XL, fade(colors.text_muted, alpha)))
                .push(
                    Text::new(caption)
                        .size(typography::BODY_SM)
                        .color(fade(colors.text_muted, alpha)),
                );

            Container::new(content)
                .width(Length::Fill)
                .height(height)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::placeholder(colors))
                .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use crate::error::Error;

    #[test]
    fn download_result_maps_to_image_state() {
        assert!(matches!(
            ImageState::from_download(Ok(vec![0xff, 0xd8])),
            ImageState::Loaded(_)
        ));
        assert!(matches!(
            ImageState::from_download(Err(Error::Http("HTTP status: 404".into()))),
            ImageState::Failed
        ));
    }

    #[test]
    fn default_state_is_loading() {
        assert!(ImageState::default().is_loading());
        assert!(!ImageState::Failed.is_loading());
    }

    #[test]
    fn card_renders_in_every_image_state() {
        let colors = ColorScheme::light();
        let states = [
            ImageState::Loading,
            ImageState::Failed,
            ImageState::Loaded(image::Handle::from_bytes(vec![0_u8; 4])),
        ];

        for state in &states {
            let _element: Element<'_, ()> = view(ViewContext {
                project: &PROJECTS[0],
                image: state,
                colors: &colors,
                opacity: 1.0,
            });
        }
    }

    #[test]
    fn card_renders_project_without_tags() {
        let project = Project {
            title: "Untitled",
            description: "",
            image: "https://example.com/a.png",
            tags: &[],
        };
        let colors = ColorScheme::dark();
        let _element: Element<'_, ()> = view(ViewContext {
            project: &project,
            image: &ImageState::Loading,
            colors: &colors,
            opacity: 0.0,
        });
    }
}
