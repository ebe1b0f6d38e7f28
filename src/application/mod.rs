// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports for the external collaborators.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer receives port implementations by injection
//!
//! # Example
//!
//! ```ignore
//! use iced_folio::application::port::EmailRelay;
//!
//! // Infrastructure implements the port trait
//! struct EmailJsRelay { /* ... */ }
//! impl EmailRelay for EmailJsRelay { /* ... */ }
//! ```

pub mod port;
