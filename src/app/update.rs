// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized handlers `App::update` dispatches
//! to. Handlers receive an [`UpdateContext`] of mutable references so each
//! one touches only the state it needs.

use super::config::Config;
use super::theme_store::ThemeStore;
use super::{view, Message};
use crate::application::port::EmailRelay;
use crate::content;
use crate::domain::ui::SectionId;
use crate::infrastructure::browser;
use crate::ui::animation::{Reveal, SmoothScroll};
use crate::ui::carousel::Carousel;
use crate::ui::contact_form::{self, ContactForm, Event as ContactEvent};
use crate::ui::design_tokens::motion;
use crate::ui::layout::PageLayout;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::skills;
use crate::ui::theming::AppTheme;
use iced::widget::operation;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::{Size, Task};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub menu_open: &'a mut bool,
    pub viewport: &'a mut Size,
    pub scroll_y: &'a mut f32,
    pub scroll: &'a mut Option<SmoothScroll>,
    pub reveals: &'a mut [Reveal; SectionId::ALL.len()],
    pub now: Instant,
}

impl UpdateContext<'_> {
    /// Section geometry for the current window size.
    #[must_use]
    pub fn layout(&self) -> PageLayout {
        page_layout(*self.viewport)
    }
}

/// Section geometry for a window of `viewport` size.
#[must_use]
pub fn page_layout(viewport: Size) -> PageLayout {
    PageLayout::new(viewport, content::SKILLS.len(), content::PROJECTS.len())
}

/// How long the reveal animation of `section` runs.
#[must_use]
pub fn reveal_length(section: SectionId) -> Duration {
    match section {
        SectionId::Skills => skills::animation_length(content::SKILLS.len()),
        _ => motion::REVEAL,
    }
}

/// Handles navbar component messages.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ScrollTo(section) => {
            let navigation = &ctx.config.navigation;
            let target = ctx.layout().scroll_target(section, navigation.scroll_offset());
            tracing::debug!(section = section.anchor(), target, "smooth scroll");
            *ctx.scroll = Some(SmoothScroll::new(
                *ctx.scroll_y,
                target,
                ctx.now,
                navigation.scroll_duration(),
            ));
            Task::none()
        }
    }
}

/// Records the page offset reported by the scrollable.
pub fn handle_scrolled(ctx: &mut UpdateContext<'_>, viewport: &Viewport) {
    *ctx.scroll_y = viewport.absolute_offset().y;

    let bounds = viewport.bounds();
    if bounds.height > 0.0 {
        ctx.viewport.height = bounds.height;
    }

    // Scrolling by hand dismisses the dropdown.
    if *ctx.menu_open && ctx.scroll.is_none() {
        navbar::update(navbar::Message::CloseMenu, ctx.menu_open);
    }

    reveal_visible_sections(ctx);
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    *ctx.viewport = size;
    reveal_visible_sections(ctx);
}

/// Advances the smooth scroll, if one is running.
pub fn handle_animation_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(scroll) = *ctx.scroll else {
        return Task::none();
    };

    let offset = scroll.offset_at(ctx.now);
    if scroll.is_finished(ctx.now) {
        *ctx.scroll = None;
    }
    *ctx.scroll_y = offset;
    reveal_visible_sections(ctx);

    operation::scroll_to(view::page_id(), AbsoluteOffset { x: 0.0, y: offset })
}

/// Starts the reveal of every section currently inside the window.
pub fn reveal_visible_sections(ctx: &mut UpdateContext<'_>) {
    let layout = ctx.layout();
    for section in SectionId::ALL {
        if layout.is_visible(section, *ctx.scroll_y) && ctx.reveals[section.index()].start(ctx.now) {
            tracing::debug!(section = section.anchor(), "section revealed");
        }
    }
}

/// Whether any frame-driven animation is still running at `now`.
#[must_use]
pub fn is_animating(
    scroll: Option<&SmoothScroll>,
    reveals: &[Reveal; SectionId::ALL.len()],
    carousel: Option<&Carousel>,
    now: Instant,
) -> bool {
    scroll.is_some()
        || SectionId::ALL
            .iter()
            .any(|section| reveals[section.index()].is_running(reveal_length(*section), now))
        || carousel.is_some_and(|carousel| carousel.is_animating(now))
}

/// Flips the theme preference and rebuilds the active theme.
pub fn handle_theme_toggle(store: &mut ThemeStore, theme: &mut AppTheme) {
    let preference = store.toggle();
    *theme = AppTheme::new(preference);
    tracing::info!(%preference, "theme switched");
}

/// Handles contact form messages, sending submissions through `relay`.
pub fn handle_contact_message(
    form: &mut ContactForm,
    relay: &Arc<dyn EmailRelay>,
    message: contact_form::Message,
) -> Task<Message> {
    match form.update(message) {
        ContactEvent::None => Task::none(),
        ContactEvent::Submit(submission) => {
            Task::perform(relay.send(submission), Message::SubmissionFinished)
        }
    }
}

/// Opens a hero link in the system browser or mail client.
pub fn handle_open_link(url: &str) {
    if let Err(err) = browser::open_url(url) {
        tracing::warn!(%url, "could not open link: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context<'a>(
        config: &'a Config,
        menu_open: &'a mut bool,
        viewport: &'a mut Size,
        scroll_y: &'a mut f32,
        scroll: &'a mut Option<SmoothScroll>,
        reveals: &'a mut [Reveal; SectionId::ALL.len()],
        now: Instant,
    ) -> UpdateContext<'a> {
        UpdateContext {
            config,
            menu_open,
            viewport,
            scroll_y,
            scroll,
            reveals,
            now,
        }
    }

    #[test]
    fn selecting_a_section_starts_scroll_to_offset_anchor() {
        let config = Config::default();
        let (mut menu_open, mut viewport, mut scroll_y) = (true, Size::new(1280.0, 800.0), 0.0);
        let mut scroll = None;
        let mut reveals = [Reveal::default(); SectionId::ALL.len()];
        let now = Instant::now();
        let mut ctx = context(
            &config,
            &mut menu_open,
            &mut viewport,
            &mut scroll_y,
            &mut scroll,
            &mut reveals,
            now,
        );

        let _ = handle_navbar_message(&mut ctx, navbar::Message::SectionSelected(SectionId::Projects));
        let expected = page_layout(Size::new(1280.0, 800.0)).top(SectionId::Projects) - 64.0;

        assert!(!menu_open);
        let scroll = scroll.expect("scroll started");
        assert_eq!(scroll.target(), expected);
    }

    #[test]
    fn tick_after_duration_lands_on_target_and_stops() {
        let config = Config::default();
        let (mut menu_open, mut viewport, mut scroll_y) = (false, Size::new(1280.0, 800.0), 0.0);
        let start = Instant::now();
        let mut scroll = Some(SmoothScroll::new(0.0, 900.0, start, Duration::from_millis(500)));
        let mut reveals = [Reveal::default(); SectionId::ALL.len()];
        let mut ctx = context(
            &config,
            &mut menu_open,
            &mut viewport,
            &mut scroll_y,
            &mut scroll,
            &mut reveals,
            start + Duration::from_millis(500),
        );

        let _ = handle_animation_tick(&mut ctx);
        assert!(scroll.is_none());
        assert_eq!(scroll_y, 900.0);
        assert!(reveals[SectionId::Skills.index()].is_started());
    }

    #[test]
    fn resize_reveals_sections_that_fit() {
        let config = Config::default();
        let (mut menu_open, mut viewport, mut scroll_y) = (false, Size::new(1280.0, 800.0), 0.0);
        let mut scroll = None;
        let mut reveals = [Reveal::default(); SectionId::ALL.len()];
        let mut ctx = context(
            &config,
            &mut menu_open,
            &mut viewport,
            &mut scroll_y,
            &mut scroll,
            &mut reveals,
            Instant::now(),
        );

        handle_window_resized(&mut ctx, Size::new(1280.0, 4000.0));
        assert!(reveals[SectionId::Home.index()].is_started());
        assert!(reveals[SectionId::Skills.index()].is_started());
    }

    #[test]
    fn idle_page_is_not_animating() {
        let reveals = [Reveal::default(); SectionId::ALL.len()];
        assert!(!is_animating(None, &reveals, None, Instant::now()));
    }

    #[test]
    fn running_reveal_keeps_frames_coming() {
        let now = Instant::now();
        let mut reveals = [Reveal::default(); SectionId::ALL.len()];
        reveals[SectionId::Skills.index()].start(now);
        assert!(is_animating(None, &reveals, None, now));
        let done = now + reveal_length(SectionId::Skills);
        assert!(!is_animating(None, &reveals, None, done));
    }
}
