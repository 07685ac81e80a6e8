//! Configuration management
//!
//! Config is stored at `~/.intake/config.toml`. Every section and field is
//! optional; anything missing falls back to the defaults below.
//!
//! ```toml
//! [storage]
//! dir = ".intake"
//! quota_bytes = 5242880
//!
//! [report]
//! endpoint = "https://api.groq.com/openai/v1"
//! model = "mixtral-8x7b-32768"
//! temperature = 0.5
//! max_tokens = 2048
//! api_key_env = "GROQ_API_KEY"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::adapters::storage::FileStore;
use crate::paths;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Where snapshots are kept
    #[serde(default)]
    pub storage: StorageConfig,
    /// Report generator settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `local-storage.json` (default `.intake`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Maximum size of the store file in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_bytes: Option<u64>,
}

/// Report generator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Base URL of the chat-completion API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens in the report
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_endpoint() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "mixtral-8x7b-32768".to_string()
}

const fn default_temperature() -> f32 {
    0.5
}

const fn default_max_tokens() -> u32 {
    2048
}

fn default_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl StorageConfig {
    /// Storage directory, falling back to `.intake`
    #[must_use]
    pub fn dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(paths::intake_dir)
    }

    /// File store for this configuration
    #[must_use]
    pub fn file_store(&self) -> FileStore {
        FileStore::in_dir(self.dir()).with_quota(self.quota_bytes)
    }
}

impl IntakeConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the global path, or defaults if not present
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, or defaults if missing or invalid
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let parsed = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| toml::from_str::<Self>(&content).map_err(anyhow::Error::from));
        match parsed {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring config at {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
