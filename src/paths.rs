//! Centralized path definitions for intake
//!
//! ## Storage Layout
//!
//! ```text
//! project/
//! └── .intake/
//!     └── local-storage.json     # key-value store (draft + saved snapshot)
//!
//! ~/.intake/
//! └── config.toml                # user configuration
//! ```

use std::path::PathBuf;

/// Directory name for local intake state
pub const INTAKE_DIR: &str = ".intake";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project-local `.intake/` directory.
#[must_use]
pub fn intake_dir() -> PathBuf {
    PathBuf::from(INTAKE_DIR)
}

/// Get the global intake directory.
///
/// Returns `~/.intake/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(INTAKE_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.intake/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
