//! # Configuration
//!
//! TOML configuration for the `capa` binary.
//!
//! ```toml
//! [filter]
//! keywords = ["rauschen", "unwichtig", "irrelevant"]
//!
//! [journal]
//! path = "journals/ltm_journal.wal"
//! ```
//!
//! Precedence for the journal path: `--journal` flag, then `CAPA_JOURNAL_PATH`,
//! then the config file, then the built-in default.

use capa_core::primitives::{DEFAULT_IRRELEVANT_KEYWORDS, DEFAULT_JOURNAL_PATH};
use capa_core::{CapaError, RelevanceFilter};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "capa.toml";

/// Environment variable overriding the journal path.
pub const JOURNAL_PATH_ENV: &str = "CAPA_JOURNAL_PATH";

/// Maximum config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CapaConfig {
    pub filter: FilterConfig,
    pub journal: JournalConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Case-sensitive disqualifying substrings.
    pub keywords: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_IRRELEVANT_KEYWORDS
                .iter()
                .map(|k| (*k).to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JournalConfig {
    pub path: PathBuf,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_JOURNAL_PATH),
        }
    }
}

impl CapaConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CapaError> {
        toml::from_str(text).map_err(|e| CapaError::ConfigError(e.to_string()))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `capa.toml` in the working
    /// directory is used if present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CapaError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)?
                } else {
                    tracing::debug!("No config file found, using defaults");
                    Self::default()
                }
            }
        };

        if let Ok(path) = std::env::var(JOURNAL_PATH_ENV)
            && !path.is_empty()
        {
            tracing::debug!("Journal path overridden by {}", JOURNAL_PATH_ENV);
            config.journal.path = PathBuf::from(path);
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, CapaError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            CapaError::ConfigError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(CapaError::ConfigError(format!(
                "Config '{}' is {} bytes, maximum is {}",
                path.display(),
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            CapaError::ConfigError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        tracing::info!("Loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Build the relevance filter described by `[filter]`.
    #[must_use]
    pub fn relevance_filter(&self) -> RelevanceFilter {
        RelevanceFilter::new(self.filter.keywords.iter().cloned())
    }
}
