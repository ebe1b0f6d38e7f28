// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page Sections
//!
//! - [`hero`] - Typing headline, social links and gradient panel
//! - [`skills`] - Skill cards with animated proficiency bars
//! - [`project_card`] - One featured project
//! - [`carousel`] - Rotating testimonials with indicator dots
//! - [`contact_form`] - Contact form relayed by email
//! - [`footer`] - Copyright line
//!
//! # Overlays
//!
//! - [`navbar`] - Navigation bar with hamburger menu
//! - [`theme_toggle`] - Floating light/dark switch
//!
//! # Shared Infrastructure
//!
//! - [`layout`] - Section geometry and scroll anchors
//! - [`animation`] - Time-based reveal, scroll and typing state
//! - [`widgets`] - Custom Iced widgets (gradient panel)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark color schemes
//! - [`icons`] - SVG icon loading and rendering

pub mod animation;
pub mod carousel;
pub mod contact_form;
pub mod design_tokens;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod layout;
pub mod navbar;
pub mod project_card;
pub mod skills;
pub mod styles;
pub mod theme_toggle;
pub mod theming;
pub mod widgets;
