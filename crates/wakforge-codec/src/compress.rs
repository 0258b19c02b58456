//! Raw deflate, with no zlib or gzip header.
//!
//! Payloads are small and full of repeated `-1` sentinels, so deflate
//! shrinks them a lot. The transport already carries a version tag, so the
//! two header bytes and the checksum of zlib would be wasted characters.

use std::io::Write;

use flate2::write::DeflateEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use crate::CodecError;

/// Compresses `bytes` at `level` (0 = store, 9 = smallest).
///
/// # Errors
/// Only if writing to the in-memory buffer fails, which it does not.
pub fn compress(bytes: &[u8], level: u32) -> std::io::Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::with_capacity(bytes.len()), Compression::new(level));
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// Inflates `bytes`, refusing to produce more than `limit` bytes.
///
/// The stream must end with its final block and must fill the input
/// exactly. Anything else is a truncated or tampered code.
///
/// # Errors
/// - [`CodecError::Decompress`] if the stream is corrupt.
/// - [`CodecError::PayloadTooLarge`] if the output would exceed `limit`.
/// - [`CodecError::Truncated`] if the stream stops early.
/// - [`CodecError::TrailingCompressed`] if bytes follow the stream.
pub fn decompress(bytes: &[u8], limit: usize) -> Result<Vec<u8>, CodecError> {
    let mut inflater = Decompress::new(false);
    // One spare byte tells "exactly at the limit" apart from "over it".
    let mut out = Vec::with_capacity(limit.saturating_add(1));
    let status = inflater.decompress_vec(bytes, &mut out, FlushDecompress::Finish)?;

    if out.len() > limit {
        return Err(CodecError::PayloadTooLarge { limit });
    }
    if status != Status::StreamEnd {
        return Err(CodecError::Truncated);
    }
    let consumed = usize::try_from(inflater.total_in()).unwrap_or(usize::MAX);
    if consumed < bytes.len() {
        return Err(CodecError::TrailingCompressed(bytes.len() - consumed));
    }
    tracing::trace!(compressed = bytes.len(), inflated = out.len(), "payload inflated");
    Ok(out)
}
