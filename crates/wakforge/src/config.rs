//! Planner configuration.
//!
//! Loaded from an optional JSON file, then overridden by environment
//! variables:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `WAKFORGE_CATALOG` | `catalog_path` |
//! | `WAKFORGE_LOG` | `log_filter` |
//!
//! ```json
//! {
//!   "catalog_path": "data/catalog.json",
//!   "log_filter": "info,wakforge_codec=debug",
//!   "codec": { "compression_level": 9, "max_code_chars": 8192 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wakforge_codec::CodecConfig;

use crate::WakforgeError;

/// Environment variable overriding [`PlannerConfig::catalog_path`].
pub const CATALOG_ENV: &str = "WAKFORGE_CATALOG";

/// Environment variable overriding [`PlannerConfig::log_filter`].
pub const LOG_ENV: &str = "WAKFORGE_LOG";

/// Everything the planner needs at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Catalog JSON file. Decoding is unavailable without one.
    pub catalog_path: Option<PathBuf>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    /// Default: `"warn"`.
    pub log_filter: String,
    /// Codec tunables.
    pub codec: CodecConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_filter: "warn".to_string(),
            codec: CodecConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Reads a config file.
    ///
    /// # Errors
    /// [`WakforgeError::ConfigIo`] if the file can't be read,
    /// [`WakforgeError::ConfigParse`] if it isn't a valid config.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WakforgeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| WakforgeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&json).map_err(|source| WakforgeError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Loads the file at `path` (or the defaults), then applies the
    /// process environment.
    ///
    /// # Errors
    /// See [`from_path`](Self::from_path).
    pub fn load(path: Option<&Path>) -> Result<Self, WakforgeError> {
        let config = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Applies overrides from `lookup`, which maps a variable name to its
    /// value. Empty values are ignored.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(CATALOG_ENV).filter(|v| !v.is_empty()) {
            self.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(filter) = lookup(LOG_ENV).filter(|v| !v.is_empty()) {
            self.log_filter = filter;
        }
        self
    }
}
