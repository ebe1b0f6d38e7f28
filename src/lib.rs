// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a single-page personal portfolio built with the Iced GUI
//! framework.
//!
//! The page shows a typing hero banner, animated skill bars, project cards,
//! a testimonial carousel and a contact form relayed through EmailJS, with a
//! persisted light/dark theme.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod application;
pub mod content;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;
