// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter defaults to `iced_folio=info` and can be overridden with the
//! standard `RUST_LOG` environment variable, e.g. `RUST_LOG=iced_folio=debug`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "iced_folio=info,warn";

/// Installs the global tracing subscriber.
///
/// Calling this more than once is harmless: later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
