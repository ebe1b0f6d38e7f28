// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`FOLIO_DATA_DIR`, `FOLIO_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with [`APP_NAME`] appended
//!
//! The config directory holds the user-editable `settings.toml`; the data
//! directory holds the preference storage file.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "IcedFolio";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "FOLIO_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FOLIO_CONFIG_DIR";

/// Preference storage file name within the data directory.
pub const STORAGE_FILE: &str = "storage.cbor";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` CLI values.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        tracing::warn!("CLI directory overrides were already initialized");
    }
}

/// Shared resolution chain for both directory kinds.
fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform_default: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_default().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application data directory path.
///
/// - Linux: `~/.local/share/IcedFolio/`
/// - macOS: `~/Library/Application Support/IcedFolio/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedFolio\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Returns the preference storage file inside the resolved data directory.
pub fn storage_file_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    get_app_data_dir_with_override(override_path).map(|dir| dir.join(STORAGE_FILE))
}

/// Returns the application config directory path.
///
/// - Linux: `~/.config/IcedFolio/`
/// - macOS: `~/Library/Application Support/IcedFolio/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedFolio\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}
