use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use wakforge_model::{Catalog, CharacterBuild};

use crate::container::{BincodeContainer, Container};
use crate::{assemble, compress, schema, text, CodecError, Value};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tunables for [`BuildCodec`].
///
/// None of these change the format. Codes written at any compression level
/// decode with any configuration, as long as they fit the size limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Deflate level, 0 (store) to 9 (smallest). Default: 9.
    pub compression_level: u32,
    /// Longest build code accepted, in characters, after line breaks are
    /// stripped. Default: 8192.
    pub max_code_chars: usize,
    /// Largest decompressed payload accepted, in bytes. Default: 4096.
    /// A full build packs to a few hundred bytes.
    pub max_payload_bytes: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            compression_level: Self::MAX_COMPRESSION_LEVEL,
            max_code_chars: 8192,
            max_payload_bytes: 4096,
        }
    }
}

impl CodecConfig {
    /// Highest deflate level.
    pub const MAX_COMPRESSION_LEVEL: u32 = 9;

    /// Upper bound for both size limits.
    pub const MAX_LIMIT: usize = 64 * 1024;

    /// Clamp out-of-range values so the config is safe to use.
    ///
    /// Called by [`BuildCodec::new`]. Rules:
    /// - `compression_level` capped to [`Self::MAX_COMPRESSION_LEVEL`].
    /// - Both limits clamped to `1..=`[`Self::MAX_LIMIT`].
    pub fn validated(mut self) -> Self {
        if self.compression_level > Self::MAX_COMPRESSION_LEVEL {
            warn!(
                level = self.compression_level,
                max = Self::MAX_COMPRESSION_LEVEL,
                "compression_level exceeds maximum, clamping"
            );
            self.compression_level = Self::MAX_COMPRESSION_LEVEL;
        }
        let clamped = self.max_code_chars.clamp(1, Self::MAX_LIMIT);
        if clamped != self.max_code_chars {
            warn!(value = self.max_code_chars, clamped, "max_code_chars out of range, clamping");
            self.max_code_chars = clamped;
        }
        let clamped = self.max_payload_bytes.clamp(1, Self::MAX_LIMIT);
        if clamped != self.max_payload_bytes {
            warn!(value = self.max_payload_bytes, clamped, "max_payload_bytes out of range, clamping");
            self.max_payload_bytes = clamped;
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

/// Encodes builds to build codes and decodes them back.
///
/// Holds no state besides its configuration; one instance can serve any
/// number of threads.
#[derive(Debug, Clone)]
pub struct BuildCodec<K = BincodeContainer> {
    config: CodecConfig,
    container: K,
}

impl BuildCodec {
    /// A codec using the bincode container.
    pub fn new(config: CodecConfig) -> Self {
        Self::with_container(config, BincodeContainer)
    }
}

impl Default for BuildCodec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl<K: Container> BuildCodec<K> {
    /// A codec using a custom container.
    pub fn with_container(config: CodecConfig, container: K) -> Self {
        Self { config: config.validated(), container }
    }

    /// The effective (validated) configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encodes a build. Never fails.
    ///
    /// The build id is not part of the code.
    pub fn encode(&self, build: &CharacterBuild) -> String {
        let values = schema::serialize(build);
        let packed = self
            .container
            .pack(&values)
            .expect("containers represent every value sequence");
        let compressed = compress::compress(&packed, self.config.compression_level)
            .expect("writing to a Vec cannot fail");
        let code = text::to_text(&compressed);
        trace!(
            values = values.len(),
            packed = packed.len(),
            compressed = compressed.len(),
            chars = code.chars().count(),
            "encoded build"
        );
        code
    }

    /// Runs the transport stages only: text, decompression, container.
    ///
    /// Returns the raw value sequence without checking its layout or
    /// touching a catalog.
    ///
    /// # Errors
    /// Any [`CodecError`] from the text, compression, or container stage.
    pub fn unpack(&self, code: &str) -> Result<Vec<Value>, CodecError> {
        let compressed = text::from_text(code, self.config.max_code_chars)?;
        let packed = compress::decompress(&compressed, self.config.max_payload_bytes)?;
        let values = self.container.unpack(&packed)?;
        trace!(compressed = compressed.len(), packed = packed.len(), values = values.len(), "unpacked code");
        Ok(values)
    }

    /// Decodes a build code, reporting why it was rejected.
    ///
    /// Ids missing from `catalog` are dropped, not reported. The decoded
    /// build gets a fresh id.
    ///
    /// # Errors
    /// Any [`CodecError`]: bad text, corrupt payload, unknown version, or a
    /// sequence that does not match the layout.
    pub fn try_decode<C: Catalog + ?Sized>(
        &self,
        code: &str,
        catalog: &C,
    ) -> Result<CharacterBuild, CodecError> {
        let values = self.unpack(code)?;
        let raw = schema::deserialize(&values)?;
        Ok(assemble::assemble(raw, catalog))
    }

    /// Decodes a build code, or returns `None` if it is invalid for any
    /// reason. The reason is logged at debug level.
    pub fn decode<C: Catalog + ?Sized>(&self, code: &str, catalog: &C) -> Option<CharacterBuild> {
        match self.try_decode(code, catalog) {
            Ok(build) => Some(build),
            Err(e) => {
                debug!(error = %e, "rejected build code");
                None
            }
        }
    }
}

/// Encodes a build with the default configuration.
pub fn encode(build: &CharacterBuild) -> String {
    BuildCodec::default().encode(build)
}

/// Decodes a build code with the default configuration.
pub fn decode<C: Catalog + ?Sized>(code: &str, catalog: &C) -> Option<CharacterBuild> {
    BuildCodec::default().decode(code, catalog)
}
