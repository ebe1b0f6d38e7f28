// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the few system integrations the UI needs.
//!
//! # Available Adapters
//!
//! - [`emailjs`]: Contact form delivery via the EmailJS REST API (implements [`EmailRelay`])
//! - [`storage`]: CBOR file and in-memory preference stores (implement [`PreferenceStore`])
//! - [`image_fetch`]: Downloads remote project images
//! - [`browser`]: Opens links with the platform's default handler
//!
//! [`EmailRelay`]: crate::application::port::EmailRelay
//! [`PreferenceStore`]: crate::application::port::PreferenceStore

pub mod browser;
pub mod emailjs;
pub mod image_fetch;
pub mod storage;

pub use emailjs::{DisabledRelay, EmailJsAccount, EmailJsRelay};
pub use storage::{FilePreferenceStore, MemoryPreferenceStore};
