// SPDX-License-Identifier: MPL-2.0
//! Light/dark visual preference.

use std::fmt;

/// The user's visual mode selection, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Returns the storage form of the preference.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parses a stored value. Unknown values are treated as absent.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    /// Returns the opposite preference.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark() {
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
    }

    #[test]
    fn parse_accepts_stored_forms() {
        assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse(" Dark\n"), Some(ThemePreference::Dark));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(ThemePreference::parse(""), None);
        assert_eq!(ThemePreference::parse("system"), None);
        assert_eq!(ThemePreference::parse("true"), None);
    }

    #[test]
    fn toggled_twice_is_identity() {
        for pref in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(pref.toggled().toggled(), pref);
            assert_ne!(pref.toggled(), pref);
        }
    }

    #[test]
    fn as_str_parses_back() {
        for pref in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::parse(pref.as_str()), Some(pref));
        }
    }
}
