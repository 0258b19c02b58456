//! The codec bundled with the catalog it resolves against.

use wakforge_catalog::StaticCatalog;
use wakforge_codec::{BuildCodec, Value};
use wakforge_model::CharacterBuild;

use crate::{PlannerConfig, WakforgeError};

/// A loaded catalog plus a configured codec.
///
/// The catalog is loaded once up front and only read afterwards, so a
/// `Planner` can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Planner {
    codec: BuildCodec,
    catalog: StaticCatalog,
}

impl Planner {
    /// Bundles an existing codec and catalog.
    pub fn new(codec: BuildCodec, catalog: StaticCatalog) -> Self {
        Self { codec, catalog }
    }

    /// Loads the configured catalog and builds the codec.
    ///
    /// # Errors
    /// [`WakforgeError::NoCatalog`] if `catalog_path` is unset, or the
    /// catalog's own load error.
    pub fn from_config(config: &PlannerConfig) -> Result<Self, WakforgeError> {
        let path = config.catalog_path.as_ref().ok_or(WakforgeError::NoCatalog)?;
        let catalog = StaticCatalog::from_path(path)?;
        Ok(Self::new(BuildCodec::new(config.codec.clone()), catalog))
    }

    pub fn catalog(&self) -> &StaticCatalog {
        &self.catalog
    }

    pub fn codec(&self) -> &BuildCodec {
        &self.codec
    }

    /// Encodes a build.
    pub fn encode(&self, build: &CharacterBuild) -> String {
        self.codec.encode(build)
    }

    /// Decodes a build code; `None` if it is invalid.
    pub fn decode(&self, code: &str) -> Option<CharacterBuild> {
        self.codec.decode(code, &self.catalog)
    }

    /// Decodes a build code, keeping the rejection reason.
    ///
    /// # Errors
    /// [`WakforgeError::Codec`] if the code is invalid.
    pub fn try_decode(&self, code: &str) -> Result<CharacterBuild, WakforgeError> {
        Ok(self.codec.try_decode(code, &self.catalog)?)
    }
}

/// Parses a build from JSON. Missing fields take their defaults and a
/// missing id is generated.
///
/// # Errors
/// [`WakforgeError::BuildJson`] if the document is malformed, and
/// [`WakforgeError::Model`] if its level is out of range.
pub fn build_from_json(json: &str) -> Result<CharacterBuild, WakforgeError> {
    let mut build: CharacterBuild = serde_json::from_str(json)?;
    // serde bypasses the level check
    let level = build.level;
    build.set_level(level)?;
    Ok(build)
}

/// Renders a raw value sequence as plain nested JSON arrays.
pub fn values_to_json(values: &[Value]) -> serde_json::Value {
    serde_json::Value::Array(values.iter().map(value_to_json).collect())
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Int(n) => serde_json::Value::from(*n),
        Value::List(items) => values_to_json(items),
    }
}
