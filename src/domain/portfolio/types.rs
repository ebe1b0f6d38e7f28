// SPDX-License-Identifier: MPL-2.0
//! Immutable portfolio records.

use super::Proficiency;

/// Named glyphs used by skills and social links.
///
/// The presentation layer maps each kind to an embedded icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Monitor,
    Palette,
    Database,
    Code,
    Terminal,
    Globe,
    Github,
    Linkedin,
    Mail,
}

/// A skill with its proficiency bar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: IconKind,
    pub proficiency: Proficiency,
}

/// A featured project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Image URL, fetched over HTTP at startup.
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

/// A client quote shown by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub feedback: &'static str,
    pub role: &'static str,
}

/// An external profile link shown in the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: IconKind,
    pub url: &'static str,
}
