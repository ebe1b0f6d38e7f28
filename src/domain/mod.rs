// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`contact`]: Contact form values ([`FormFields`](contact::FormFields),
//!   [`SubmissionStatus`](contact::SubmissionStatus))
//! - [`portfolio`]: Fixed portfolio records ([`Skill`](portfolio::Skill),
//!   [`Project`](portfolio::Project), [`Testimonial`](portfolio::Testimonial))
//! - [`theme`]: Light/dark preference ([`ThemePreference`](theme::ThemePreference))
//! - [`ui`]: Page sections ([`SectionId`](ui::SectionId))

pub mod contact;
pub mod portfolio;
pub mod theme;
pub mod ui;
