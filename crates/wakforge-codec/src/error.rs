//! Error types for the codec layer.
//!
//! Every stage of the decode pipeline has its own variants so logs say
//! exactly where a code broke. Callers of [`BuildCodec::decode`] never see
//! them: any error there means "invalid code".
//!
//! [`BuildCodec::decode`]: crate::BuildCodec::decode

/// Errors that can occur while decoding a build code.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    // -- Text transport --
    /// Nothing left after stripping newlines.
    #[error("build code is empty")]
    Empty,

    /// More characters than the configured maximum.
    #[error("build code is longer than {limit} characters")]
    CodeTooLong { limit: usize },

    /// A character outside the build-code alphabet.
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    /// A short tail character somewhere other than the end.
    #[error("tail character at position {0} is not the last character")]
    MisplacedTail(usize),

    /// Well-formed characters that the encoder would never produce
    /// (wrong padding, or a full character where a tail belongs).
    #[error("build code is not in canonical form")]
    NonCanonical,

    // -- Compression --
    /// The deflate stream is corrupt.
    #[error("decompression failed: {0}")]
    Decompress(#[from] flate2::DecompressError),

    /// The deflate stream stops before its final block.
    #[error("compressed payload is truncated")]
    Truncated,

    /// Input bytes left over after the deflate stream ended.
    #[error("{0} bytes after the end of the compressed payload")]
    TrailingCompressed(usize),

    /// The payload inflates past the configured limit.
    #[error("decompressed payload exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    // -- Container --
    /// The bincode container is corrupt or truncated.
    #[error("container decode failed: {0}")]
    Container(#[from] bincode::error::DecodeError),

    /// The JSON container is malformed.
    #[cfg(feature = "json")]
    #[error("json container failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Container bytes left over after the value sequence.
    #[error("{0} bytes after the end of the container")]
    TrailingBytes(usize),

    // -- Schema --
    /// The version tag names no known layout.
    #[error("unsupported build code version {0}")]
    UnsupportedVersion(i64),

    /// The sequence ends before a field.
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    /// A list where an integer belongs, or the other way round.
    #[error("expected {expected} for {field}")]
    UnexpectedKind {
        field: &'static str,
        expected: &'static str,
    },

    /// An integer outside the field's domain.
    #[error("value {value} out of range for {field}")]
    OutOfRange { field: &'static str, value: i64 },

    /// More values than the layout defines.
    #[error("unexpected value after the last {0} field")]
    TrailingValue(&'static str),
}
