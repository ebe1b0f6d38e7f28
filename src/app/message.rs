// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::RelayError;
use crate::ui::carousel;
use crate::ui::contact_form;
use crate::ui::hero;
use crate::ui::navbar;
use crate::ui::project_card::ImageState;
use crate::ui::theme_toggle;
use iced::widget::scrollable::Viewport;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Carousel(carousel::Message),
    Contact(contact_form::Message),
    ThemeToggle(theme_toggle::Message),
    /// The page scrollable moved.
    Scrolled(Viewport),
    WindowResized(Size),
    /// Frame tick while an animation is running.
    AnimationTick(Instant),
    /// Step of the hero's typing headline.
    TypingTick(Instant),
    /// A project image download settled.
    ImageLoaded { index: usize, state: ImageState },
    /// The email relay accepted or rejected the contact submission.
    SubmissionFinished(Result<(), RelayError>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional data directory override (for `storage.cbor`).
    /// Takes precedence over the `FOLIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over the `FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
