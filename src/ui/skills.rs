// SPDX-License-Identifier: MPL-2.0
//! Skills grid.
//!
//! One card per skill with an icon, the skill name, a gradient bar and the
//! percentage. Cards fade in one after the other and each bar fills from
//! zero to its proficiency the first time the section comes into view.

use crate::domain::portfolio::Skill;
use crate::ui::animation::Reveal;
use crate::ui::design_tokens::{motion, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::layout::{GRID_GAP, SKILL_CARD_HEIGHT};
use crate::ui::styles;
use crate::ui::theming::{fade, ColorScheme};
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, font, Element, Font, Length};
use std::time::{Duration, Instant};

/// Resolution of the bar split into filled and empty portions.
const BAR_PORTIONS: u16 = 1000;

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub skills: &'a [Skill],
    pub colors: &'a ColorScheme,
    pub reveal: &'a Reveal,
    pub columns: usize,
    pub now: Instant,
}

/// Delay before the card at `index` starts animating.
#[must_use]
pub fn stagger(index: usize) -> Duration {
    motion::SKILL_STAGGER * u32::try_from(index).unwrap_or(u32::MAX)
}

/// Time from the reveal start until the last bar is full.
#[must_use]
pub fn animation_length(count: usize) -> Duration {
    stagger(count.saturating_sub(1)) + motion::SKILL_FILL.max(motion::REVEAL)
}

/// Filled share of the bar for `skill` at `index`, `0.0` to its proficiency.
#[must_use]
pub fn bar_fill(skill: &Skill, index: usize, reveal: &Reveal, now: Instant) -> f32 {
    skill.proficiency.as_fraction() * reveal.eased(stagger(index), motion::SKILL_FILL, now)
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let columns = ctx.columns.max(1);

    let grid = ctx
        .skills
        .chunks(columns)
        .enumerate()
        .fold(Column::new().spacing(GRID_GAP), |grid, (row_index, chunk)| {
            let mut row = Row::new().spacing(GRID_GAP);
            for (offset, skill) in chunk.iter().enumerate() {
                let index = row_index * columns + offset;
                row = row.push(card(skill, index, &ctx));
            }
            for _ in chunk.len()..columns {
                row = row.push(Space::new().width(Length::Fill));
            }
            grid.push(row)
        });

    grid.width(Length::Fill).into()
}

fn card<'a, Message: 'a>(skill: &'a Skill, index: usize, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let alpha = ctx.reveal.eased(stagger(index), motion::REVEAL, ctx.now);
    let fill = bar_fill(skill, index, ctx.reveal, ctx.now);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::tinted(
            icons::for_kind(skill.icon),
            sizing::ICON_MD,
            fade(colors.brand_start, alpha),
        ))
        .push(
            Text::new(skill.name)
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: font::Weight::Semibold,
                    ..Font::DEFAULT
                })
                .color(fade(colors.text_primary, alpha)),
        );

    let percent = Text::new(format!("{}%", skill.proficiency.value()))
        .size(typography::BODY_SM)
        .color(fade(colors.text_muted, alpha));

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(bar(fill, colors))
        .push(percent);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(SKILL_CARD_HEIGHT))
        .padding(spacing::LG)
        .style(styles::container::card(colors))
        .into()
}

fn bar<'a, Message: 'a>(fill: f32, colors: &ColorScheme) -> Element<'a, Message> {
    let height = Length::Fixed(sizing::SKILL_BAR_HEIGHT);
    let (filled, empty) = split_portions(fill);

    let mut inner = Row::new().height(height);
    if filled > 0 {
        inner = inner.push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(height)
                .style(styles::container::gradient_fill(colors)),
        );
    }
    if empty > 0 {
        inner = inner.push(Space::new().width(Length::FillPortion(empty)));
    }

    Container::new(inner)
        .width(Length::Fill)
        .height(height)
        .style(styles::container::track(colors))
        .into()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn split_portions(fill: f32) -> (u16, u16) {
    // fill is clamped to 0..=1, so the product fits in u16
    let filled = (fill.clamp(0.0, 1.0) * f32::from(BAR_PORTIONS)).round() as u16;
    (filled, BAR_PORTIONS - filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SKILLS;

    #[test]
    fn bars_are_empty_before_reveal() {
        let reveal = Reveal::default();
        let now = Instant::now();
        for (index, skill) in SKILLS.iter().enumerate() {
            assert_eq!(bar_fill(skill, index, &reveal, now), 0.0);
        }
    }

    #[test]
    fn bar_fill_is_monotonic_and_ends_at_proficiency() {
        let start = Instant::now();
        let mut reveal = Reveal::default();
        reveal.start(start);
        let skill = &SKILLS[0];
        let end = animation_length(1);

        let samples: Vec<f32> = (0..=20)
            .map(|step| bar_fill(skill, 0, &reveal, start + end * step / 20))
            .collect();
        assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
        let last = samples.last().copied().unwrap_or_default();
        assert!((last - skill.proficiency.as_fraction()).abs() < 1e-6);
    }

    #[test]
    fn later_cards_start_later() {
        let start = Instant::now();
        let mut reveal = Reveal::default();
        reveal.start(start);
        let at = start + Duration::from_millis(150);
        let skill = &SKILLS[0];
        assert!(bar_fill(skill, 0, &reveal, at) > 0.0);
        assert_eq!(bar_fill(skill, 3, &reveal, at), 0.0);
    }

    #[test]
    fn animation_length_covers_last_card() {
        assert_eq!(animation_length(0), motion::SKILL_FILL);
        assert_eq!(
            animation_length(6),
            motion::SKILL_STAGGER * 5 + motion::SKILL_FILL
        );
    }

    #[test]
    fn portions_split_the_bar() {
        assert_eq!(split_portions(0.0), (0, BAR_PORTIONS));
        assert_eq!(split_portions(1.0), (BAR_PORTIONS, 0));
        assert_eq!(split_portions(0.9), (900, 100));
        assert_eq!(split_portions(-3.0), (0, BAR_PORTIONS));
    }

    #[test]
    fn grid_renders_with_partial_last_row() {
        let colors = ColorScheme::dark();
        let reveal = Reveal::default();
        let _element: Element<'_, ()> = view(ViewContext {
            skills: &SKILLS[..3],
            colors: &colors,
            reveal: &reveal,
            columns: 2,
            now: Instant::now(),
        });
    }
}
