// SPDX-License-Identifier: MPL-2.0
//! Testimonial carousel.
//!
//! Shows one testimonial at a time. The index advances on every timer tick
//! and can be set directly with the indicator dots. Each change plays a keyed
//! transition: the previous quote fades out, then the new one fades in; the
//! two are never visible together.
//!
//! A carousel only exists for a non-empty list, so its index is always
//! valid. The timer subscription is built from [`Carousel::subscription`]
//! and disappears together with the carousel.

use crate::domain::portfolio::Testimonial;
use crate::ui::design_tokens::{motion, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::{fade, ColorScheme};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment::Horizontal, font, Element, Font, Length, Subscription};
use std::time::{Duration, Instant};

/// Messages emitted by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Automatic advance from the timer.
    Tick(Instant),
    /// Indicator dot pressed.
    Select(usize),
}

/// Visible stage of the transition at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// The previous item is fading out.
    Outgoing { index: usize, opacity: f32 },
    /// The current item is fading in.
    Incoming { index: usize, opacity: f32 },
    /// The current item is fully visible.
    Settled { index: usize },
}

impl Phase {
    /// Index of the item drawn in this phase.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Phase::Outgoing { index, .. } | Phase::Incoming { index, .. } | Phase::Settled { index } => index,
        }
    }

    #[must_use]
    pub fn opacity(self) -> f32 {
        match self {
            Phase::Outgoing { opacity, .. } | Phase::Incoming { opacity, .. } => opacity,
            Phase::Settled { .. } => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Transition {
    from: usize,
    started: Instant,
}

/// Rotating index over `len` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    transition: Option<Transition>,
    fade: Duration,
}

impl Carousel {
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            index: 0,
            len,
            transition: None,
            fade: motion::CAROUSEL_FADE,
        })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: an empty carousel cannot be built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Advances to the next item, wrapping to the first.
    pub fn tick(&mut self, now: Instant) {
        let next = (self.index + 1) % self.len;
        self.go_to(next, now);
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, now: Instant) {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "ignoring out-of-range testimonial");
            return;
        }
        self.go_to(index, now);
    }

    fn go_to(&mut self, index: usize, now: Instant) {
        if index == self.index {
            return;
        }
        self.transition = Some(Transition {
            from: self.index,
            started: now,
        });
        self.index = index;
    }

    /// Applies a carousel message.
    pub fn update(&mut self, message: Message, now: Instant) {
        match message {
            Message::Tick(_) => self.tick(now),
            Message::Select(index) => self.select(index, now),
        }
    }

    /// Transition stage at `now`.
    #[must_use]
    pub fn phase(&self, now: Instant) -> Phase {
        let Some(transition) = self.transition else {
            return Phase::Settled { index: self.index };
        };

        let elapsed = now.saturating_duration_since(transition.started);
        let half = self.fade.as_secs_f32();
        if half <= 0.0 {
            return Phase::Settled { index: self.index };
        }

        let t = elapsed.as_secs_f32() / half;
        if t < 1.0 {
            Phase::Outgoing {
                index: transition.from,
                opacity: 1.0 - t,
            }
        } else if t < 2.0 {
            Phase::Incoming {
                index: self.index,
                opacity: t - 1.0,
            }
        } else {
            Phase::Settled { index: self.index }
        }
    }

    /// Whether the transition still needs animation frames.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        !matches!(self.phase(now), Phase::Settled { .. })
    }

    /// Timer that advances the carousel every `interval`.
    pub fn subscription(interval: Duration) -> Subscription<Message> {
        iced::time::every(interval).map(Message::Tick)
    }
}

/// Contextual data needed to render the carousel.
pub struct ViewContext<'a> {
    pub carousel: &'a Carousel,
    pub testimonials: &'a [Testimonial],
    pub colors: &'a ColorScheme,
    pub now: Instant,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let phase = ctx.carousel.phase(ctx.now);

    let quote: Element<'a, Message> = match ctx.testimonials.get(phase.index()) {
        Some(testimonial) => quote_card(testimonial, colors, phase.opacity()),
        None => Column::new().into(),
    };

    let current = ctx.carousel.index();
    let indicators = (0..ctx.carousel.len())
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            row.push(
                button(Column::new())
                    .width(Length::Fixed(sizing::INDICATOR))
                    .height(Length::Fixed(sizing::INDICATOR))
                    .padding(0.0)
                    .on_press(Message::Select(index))
                    .style(styles::button::indicator(colors, index == current)),
            )
        });

    Column::new()
        .width(Length::Fill)
        .max_width(sizing::NARROW_MAX_WIDTH)
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(quote)
        .push(indicators)
        .into()
}

fn quote_card<'a>(testimonial: &'a Testimonial, colors: &ColorScheme, alpha: f32) -> Element<'a, Message> {
    let feedback = Text::new(format!("\"{}\"", testimonial.feedback))
        .size(typography::BODY_LG)
        .font(Font {
            style: font::Style::Italic,
            ..Font::DEFAULT
        })
        .color(fade(colors.text_primary, alpha));

    let name = Text::new(testimonial.name)
        .size(typography::BODY)
        .font(Font {
            weight: font::Weight::Semibold,
            ..Font::DEFAULT
        })
        .color(fade(colors.text_primary, alpha));

    let role = Text::new(testimonial.role)
        .size(typography::BODY_SM)
        .color(fade(colors.text_muted, alpha));

    let content = Column::new()
        .spacing(spacing::XS)
        .push(icons::tinted(icons::quote(), sizing::ICON_MD, fade(colors.brand_start, alpha)))
        .push(feedback)
        .push(name)
        .push(role);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::card(colors))
        .into()
}
