//! Unified error type for Wakforge.

use std::path::PathBuf;

use wakforge_catalog::CatalogError;
use wakforge_codec::CodecError;
use wakforge_model::ModelError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each wrapped variant generates the `From`
/// impl, so `?` converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum WakforgeError {
    /// A domain rule was broken (bad level, unknown class name, ...).
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The catalog could not be read or parsed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A build code was rejected.
    #[error("invalid build code: {0}")]
    Codec(#[from] CodecError),

    /// A configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid JSON for [`PlannerConfig`].
    ///
    /// [`PlannerConfig`]: crate::PlannerConfig
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A build JSON document is malformed.
    #[error("invalid build json: {0}")]
    BuildJson(#[from] serde_json::Error),

    /// Decoding needs a catalog and none was configured.
    #[error("no catalog configured (set catalog_path or WAKFORGE_CATALOG)")]
    NoCatalog,
}
