// SPDX-License-Identifier: MPL-2.0
//! Portfolio records.
//!
//! Every record here is immutable and defined at build time; entries have no
//! identity beyond their position in the list that defines them.

pub mod newtypes;
pub mod types;

pub use newtypes::Proficiency;
pub use types::{IconKind, Project, Skill, SocialLink, Testimonial};
