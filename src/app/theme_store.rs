// SPDX-License-Identifier: MPL-2.0
//! Light/dark preference persisted across launches.
//!
//! The store reads the preference once at startup and writes it back on every
//! change. Storage failures never reach the user: they are logged and the
//! preference keeps working in memory for the rest of the session.

use crate::application::port::PreferenceStore;
use crate::domain::theme::ThemePreference;

/// Storage key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

pub struct ThemeStore {
    preference: ThemePreference,
    storage: Box<dyn PreferenceStore>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("preference", &self.preference)
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Restores the persisted preference, defaulting to dark when the key is
    /// absent, unreadable or holds an unknown value.
    pub fn load(storage: Box<dyn PreferenceStore>) -> Self {
        let preference = match storage.load(STORAGE_KEY) {
            Ok(Some(raw)) => ThemePreference::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "ignoring unknown stored theme");
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(err) => {
                tracing::warn!("failed to read theme preference: {err}");
                ThemePreference::default()
            }
        };

        tracing::debug!(%preference, "theme preference restored");
        Self { preference, storage }
    }

    #[must_use]
    pub fn get(&self) -> ThemePreference {
        self.preference
    }

    pub fn set(&mut self, preference: ThemePreference) {
        self.preference = preference;
        if let Err(err) = self.storage.store(STORAGE_KEY, preference.as_str()) {
            tracing::warn!("failed to persist theme preference: {err}");
        }
    }

    /// Flips the preference and returns the new value.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.preference.toggled();
        self.set(next);
        next
    }
}
