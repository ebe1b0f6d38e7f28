// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the portfolio page.
//!
//! The `App` struct owns every piece of mutable state (theme, menu, scroll
//! position, animations, carousel, contact form, project images) and
//! translates messages into side effects like preference persistence, link
//! opening, image downloads and relay requests. Components receive their
//! state by reference and report back through messages.

pub mod config;
mod message;
pub mod paths;
mod subscription;
pub mod theme_store;
mod update;
mod view;

pub use message::{Flags, Message};
pub use theme_store::ThemeStore;

use crate::application::port::{EmailRelay, PreferenceStore};
use crate::content;
use crate::domain::ui::SectionId;
use crate::infrastructure::emailjs::{DisabledRelay, EmailJsRelay};
use crate::infrastructure::image_fetch;
use crate::infrastructure::storage::{FilePreferenceStore, MemoryPreferenceStore};
use crate::ui::animation::{Reveal, SmoothScroll, Typewriter};
use crate::ui::carousel::Carousel;
use crate::ui::contact_form::ContactForm;
use crate::ui::footer;
use crate::ui::hero;
use crate::ui::project_card::ImageState;
use crate::ui::theme_toggle;
use crate::ui::theming::AppTheme;
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    config: Config,
    theme_store: ThemeStore,
    /// Active theme, rebuilt whenever the preference changes.
    theme: AppTheme,
    relay: Arc<dyn EmailRelay>,
    /// Whether the narrow-layout dropdown is open.
    menu_open: bool,
    /// Window size, drives the page layout.
    viewport: Size,
    /// Current vertical offset of the page scrollable.
    scroll_y: f32,
    scroll: Option<SmoothScroll>,
    reveals: [Reveal; SectionId::ALL.len()],
    carousel: Option<Carousel>,
    typewriter: Typewriter,
    /// One entry per project, in content order.
    images: Vec<ImageState>,
    contact: ContactForm,
    footer_year: i32,
    /// Time of the last processed message; animations render against it.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme.preference)
            .field("scroll_y", &self.scroll_y)
            .field("menu_open", &self.menu_open)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Resolves configuration, storage and the email relay from `flags`,
    /// then builds the application.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.map(PathBuf::from));
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let storage: Box<dyn PreferenceStore> =
            match paths::storage_file_with_override(flags.data_dir.map(PathBuf::from)) {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "preference storage");
                    Box::new(FilePreferenceStore::new(path))
                }
                None => {
                    tracing::warn!("no data directory, preferences will not be saved");
                    Box::new(MemoryPreferenceStore::new())
                }
            };

        let contact = &config.contact;
        let relay: Arc<dyn EmailRelay> = match EmailJsRelay::new(contact.endpoint.clone(), contact.account()) {
            Ok(relay) => Arc::new(relay),
            Err(err) => {
                tracing::warn!("email relay unavailable: {err}");
                Arc::new(DisabledRelay::new(err.to_string()))
            }
        };

        Self::with_parts(config, storage, relay)
    }

    /// Builds the application from already-resolved collaborators and
    /// starts the project image downloads.
    pub fn with_parts(
        config: Config,
        storage: Box<dyn PreferenceStore>,
        relay: Arc<dyn EmailRelay>,
    ) -> (Self, Task<Message>) {
        let now = Instant::now();
        let theme_store = ThemeStore::load(storage);
        let theme = AppTheme::new(theme_store.get());

        let mut reveals = [Reveal::default(); SectionId::ALL.len()];
        reveals[SectionId::Home.index()].start(now);

        let app = Self {
            config,
            theme_store,
            theme,
            relay,
            menu_open: false,
            viewport: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            scroll_y: 0.0,
            scroll: None,
            reveals,
            carousel: Carousel::new(content::TESTIMONIALS.len()),
            typewriter: Typewriter::new(content::ROLES),
            images: vec![ImageState::Loading; content::PROJECTS.len()],
            contact: ContactForm::new(),
            footer_year: footer::current_year(),
            now,
        };

        let downloads = content::PROJECTS.iter().enumerate().map(|(index, project)| {
            Task::perform(image_fetch::fetch_image(project.image.to_string()), move |result| {
                Message::ImageLoaded {
                    index,
                    state: ImageState::from_download(result),
                }
            })
        });

        (app, Task::batch(downloads))
    }

    fn title(&self) -> String {
        format!("{} | Portfolio", content::OWNER)
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let carousel_sub = subscription::create_carousel_subscription(
            self.carousel.as_ref(),
            self.config.carousel.interval(),
        );
        let animation_sub = subscription::create_animation_subscription(self.is_animating());
        let typing_sub = subscription::create_typing_subscription(&self.typewriter);

        Subscription::batch([event_sub, carousel_sub, animation_sub, typing_sub])
    }

    /// Whether a scroll, reveal or carousel fade still needs frames.
    fn is_animating(&self) -> bool {
        update::is_animating(
            self.scroll.as_ref(),
            &self.reveals,
            self.carousel.as_ref(),
            self.now,
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match message {
            Message::AnimationTick(now) | Message::TypingTick(now) => now,
            _ => Instant::now(),
        };

        let mut ctx = update::UpdateContext {
            config: &self.config,
            menu_open: &mut self.menu_open,
            viewport: &mut self.viewport,
            scroll_y: &mut self.scroll_y,
            scroll: &mut self.scroll,
            reveals: &mut self.reveals,
            now: self.now,
        };

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Hero(hero::Message::OpenLink(url)) => {
                update::handle_open_link(url);
                Task::none()
            }
            Message::Carousel(carousel_message) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.update(carousel_message, self.now);
                }
                Task::none()
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut self.contact, &self.relay, contact_message)
            }
            Message::ThemeToggle(theme_toggle::Message::Toggle) => {
                update::handle_theme_toggle(&mut self.theme_store, &mut self.theme);
                Task::none()
            }
            Message::Scrolled(viewport) => {
                update::handle_scrolled(&mut ctx, &viewport);
                Task::none()
            }
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut ctx, size);
                Task::none()
            }
            Message::AnimationTick(_) => update::handle_animation_tick(&mut ctx),
            Message::TypingTick(now) => {
                self.typewriter.step(now);
                Task::none()
            }
            Message::ImageLoaded { index, state } => {
                match self.images.get_mut(index) {
                    Some(slot) => *slot = state,
                    None => tracing::debug!(index, "image result for unknown project"),
                }
                Task::none()
            }
            Message::SubmissionFinished(result) => {
                self.contact.finish_submit(result);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let layout = update::page_layout(self.viewport);
        let active = layout.section_at(self.scroll_y, self.config.navigation.scroll_offset());

        view::view(view::ViewContext {
            theme: &self.theme,
            layout,
            menu_open: self.menu_open,
            active,
            reveals: &self.reveals,
            typed: self.typewriter.text(),
            carousel: self.carousel.as_ref(),
            images: &self.images,
            contact: &self.contact,
            footer_year: self.footer_year,
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::RelayError;
    use crate::domain::contact::{FormFields, SubmissionStatus};
    use crate::domain::theme::ThemePreference;
    use crate::ui::{carousel, contact_form, navbar};
    use futures_util::future::{self, BoxFuture, FutureExt};

    struct AcceptingRelay;

    impl EmailRelay for AcceptingRelay {
        fn send(
            &self,
            _submission: crate::domain::contact::FormSubmission,
        ) -> BoxFuture<'static, Result<(), RelayError>> {
            future::ready(Ok(())).boxed()
        }
    }

    fn app_with(storage: MemoryPreferenceStore) -> App {
        let (app, _task) = App::with_parts(Config::default(), Box::new(storage), Arc::new(AcceptingRelay));
        app
    }

    fn app() -> App {
        app_with(MemoryPreferenceStore::new())
    }

    #[test]
    fn starts_dark_with_hero_revealed() {
        let app = app();
        assert!(app.theme.is_dark());
        assert!(app.reveals[SectionId::Home.index()].is_started());
        assert!(!app.reveals[SectionId::Contact.index()].is_started());
        assert_eq!(app.images.len(), content::PROJECTS.len());
        assert!(app.images.iter().all(ImageState::is_loading));
    }

    #[test]
    fn persisted_light_preference_is_applied() {
        let app = app_with(MemoryPreferenceStore::with_entry(theme_store::STORAGE_KEY, "light"));
        assert_eq!(app.theme.preference, ThemePreference::Light);
        assert_eq!(app.theme().palette().background, app.theme.colors.page_background);
    }

    #[test]
    fn toggle_switches_theme() {
        let mut app = app();
        let _ = app.update(Message::ThemeToggle(theme_toggle::Message::Toggle));
        assert_eq!(app.theme_store.get(), ThemePreference::Light);
        assert!(!app.theme.is_dark());
    }

    #[test]
    fn navbar_selection_closes_menu_and_scrolls() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::Navbar(navbar::Message::SectionSelected(SectionId::Contact)));
        assert!(!app.menu_open);
        assert!(app.scroll.is_some());
        assert!(app.is_animating());
    }

    #[test]
    fn carousel_messages_move_the_index() {
        let mut app = app();
        let now = Instant::now();
        let _ = app.update(Message::Carousel(carousel::Message::Tick(now)));
        assert_eq!(app.carousel.as_ref().map(Carousel::index), Some(1));
        let _ = app.update(Message::Carousel(carousel::Message::Select(0)));
        assert_eq!(app.carousel.as_ref().map(Carousel::index), Some(0));
    }

    #[test]
    fn contact_submission_round_trip() {
        let mut app = app();
        app.contact = ContactForm::with_fields(FormFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
        });

        let _ = app.update(Message::Contact(contact_form::Message::Submit));
        assert!(app.contact.is_in_flight());

        let _ = app.update(Message::SubmissionFinished(Err(RelayError::Status {
            code: 500,
            body: String::new(),
        })));
        assert_eq!(app.contact.status(), SubmissionStatus::Error);
        assert_eq!(app.contact.fields().name, "Ada");

        let _ = app.update(Message::Contact(contact_form::Message::Submit));
        let _ = app.update(Message::SubmissionFinished(Ok(())));
        assert_eq!(app.contact.status(), SubmissionStatus::Success);
        assert!(app.contact.fields().is_empty());
    }

    #[test]
    fn image_results_fill_their_slot_only() {
        let mut app = app();
        let _ = app.update(Message::ImageLoaded {
            index: 0,
            state: ImageState::Failed,
        });
        let _ = app.update(Message::ImageLoaded {
            index: 99,
            state: ImageState::Failed,
        });
        assert!(matches!(app.images[0], ImageState::Failed));
        assert!(app.images[1..].iter().all(ImageState::is_loading));
    }

    #[test]
    fn typing_tick_advances_headline() {
        let mut app = app();
        let _ = app.update(Message::TypingTick(Instant::now()));
        assert_eq!(app.typewriter.text(), "F");
    }

    #[test]
    fn window_resize_updates_layout() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(500.0, 700.0)));
        assert_eq!(app.viewport, Size::new(500.0, 700.0));
        let _view = app.view();
    }

    #[test]
    fn title_names_owner() {
        assert!(app().title().contains(content::OWNER));
    }
}
