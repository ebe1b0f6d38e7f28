// SPDX-License-Identifier: MPL-2.0
//! Preference storage port definition.

use crate::error::Result;

/// Durable key/value storage for small string preferences.
///
/// Callers treat every failure as best-effort: a failed read behaves like a
/// missing key and a failed write only loses durability.
pub trait PreferenceStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn store(&self, key: &str, value: &str) -> Result<()>;
}
