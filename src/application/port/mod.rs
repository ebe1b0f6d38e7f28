// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, so the UI never depends on a concrete
//! transport or storage backend.
//!
//! # Available Ports
//!
//! - [`email_relay`]: Delivery of contact form submissions
//! - [`preference_store`]: Durable key/value storage for user preferences
//!
//! # Design Notes
//!
//! - All traits are `Send + Sync` so they can be shared behind an `Arc`
//! - The relay returns a boxed `'static` future that callers hand to Iced's
//!   `Task::perform`
//! - Tests substitute in-memory fakes for both ports

pub mod email_relay;
pub mod preference_store;

pub use email_relay::{EmailRelay, RelayError};
pub use preference_store::PreferenceStore;
