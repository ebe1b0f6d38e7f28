// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Contact**: EmailJS endpoint and identifiers
//! - **Carousel**: Testimonial rotation period
//! - **Navigation**: Smooth scroll offset and duration

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// EmailJS REST endpoint for single sends.
pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS service identifier.
pub const DEFAULT_EMAILJS_SERVICE_ID: &str = "service_koojunm";

/// EmailJS message template identifier.
pub const DEFAULT_EMAILJS_TEMPLATE_ID: &str = "template_6xevd6a";

/// EmailJS public key (sent as `user_id`).
pub const DEFAULT_EMAILJS_PUBLIC_KEY: &str = "mxMyxMSATAuV9R_n1";

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Time between automatic testimonial advances (in milliseconds).
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 5000;

/// Minimum carousel interval (in milliseconds).
pub const MIN_CAROUSEL_INTERVAL_MS: u64 = 1000;

/// Maximum carousel interval (in milliseconds).
pub const MAX_CAROUSEL_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Distance kept between a scroll target and the top edge, clearing the
/// fixed navigation bar (in logical pixels).
pub const DEFAULT_SCROLL_OFFSET: f32 = 64.0;

/// Maximum scroll offset (in logical pixels).
pub const MAX_SCROLL_OFFSET: f32 = 400.0;

/// Smooth scroll duration (in milliseconds).
pub const DEFAULT_SCROLL_DURATION_MS: u64 = 500;

/// Maximum smooth scroll duration (in milliseconds).
pub const MAX_SCROLL_DURATION_MS: u64 = 5000;
