//! Packing value sequences into bytes.
//!
//! [`Container`] is the byte format seam: the codec hands it a flat value
//! sequence and gets bytes back, and the reverse on decode. The default is
//! [`BincodeContainer`]; the `json` feature adds [`JsonContainer`] for
//! eyeballing payloads while debugging.

use crate::{CodecError, Value};

/// Largest container bincode will read, in bytes.
const BINCODE_LIMIT: usize = 64 * 1024;

/// Turns value sequences into bytes and back.
///
/// Implementations must be exact inverses: `unpack(pack(v)) == v` for
/// every sequence whose integers lie in `[-1, 2^31)`, and `unpack` must
/// reject bytes left over after the sequence.
pub trait Container {
    /// Error produced when a sequence cannot be represented.
    type PackError: std::error::Error + Send + Sync + 'static;

    /// Packs a value sequence.
    fn pack(&self, values: &[Value]) -> Result<Vec<u8>, Self::PackError>;

    /// Unpacks a value sequence.
    fn unpack(&self, bytes: &[u8]) -> Result<Vec<Value>, CodecError>;
}

/// bincode with the standard configuration: little-endian, varint lengths
/// and zigzag varint integers. A `-1` sentinel costs one byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeContainer;

impl Container for BincodeContainer {
    type PackError = bincode::error::EncodeError;

    fn pack(&self, values: &[Value]) -> Result<Vec<u8>, Self::PackError> {
        bincode::serde::encode_to_vec(values, bincode::config::standard())
    }

    fn unpack(&self, bytes: &[u8]) -> Result<Vec<Value>, CodecError> {
        let config = bincode::config::standard().with_limit::<BINCODE_LIMIT>();
        let (values, read): (Vec<Value>, usize) =
            bincode::serde::decode_from_slice(bytes, config)?;
        if read < bytes.len() {
            return Err(CodecError::TrailingBytes(bytes.len() - read));
        }
        Ok(values)
    }
}

/// JSON in serde's externally tagged shape, e.g. `[{"Int":1},{"List":[]}]`.
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonContainer;

#[cfg(feature = "json")]
impl Container for JsonContainer {
    type PackError = serde_json::Error;

    fn pack(&self, values: &[Value]) -> Result<Vec<u8>, Self::PackError> {
        serde_json::to_vec(values)
    }

    fn unpack(&self, bytes: &[u8]) -> Result<Vec<Value>, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Value> {
        vec![
            Value::Int(1),
            Value::Int(-1),
            Value::List(vec![Value::Int(i64::from(i32::MAX)), Value::List(vec![])]),
        ]
    }

    #[test]
    fn test_bincode_unpack_inverts_pack() {
        let bytes = BincodeContainer.pack(&sample()).unwrap();
        assert_eq!(BincodeContainer.unpack(&bytes).unwrap(), sample());
    }

    #[test]
    fn test_bincode_sentinel_is_one_byte() {
        let bytes = BincodeContainer.pack(&[Value::Int(-1)]).unwrap();
        // length prefix, variant index, zigzag(-1)
        assert_eq!(bytes, vec![1, 0, 1]);
    }

    #[test]
    fn test_bincode_trailing_bytes_rejected() {
        let mut bytes = BincodeContainer.pack(&sample()).unwrap();
        bytes.push(0);
        assert!(matches!(BincodeContainer.unpack(&bytes), Err(CodecError::TrailingBytes(1))));
    }

    #[test]
    fn test_bincode_truncated_rejected() {
        let bytes = BincodeContainer.pack(&sample()).unwrap();
        let result = BincodeContainer.unpack(&bytes[..bytes.len() - 1]);
        assert!(matches!(result, Err(CodecError::Container(_))));
    }

    #[test]
    fn test_bincode_unknown_variant_rejected() {
        // one value, variant index 2
        assert!(BincodeContainer.unpack(&[1, 2, 0]).is_err());
    }

    #[test]
    fn test_bincode_deep_nesting_rejected() {
        let mut value = Value::Int(0);
        for _ in 0..=crate::MAX_DEPTH {
            value = Value::List(vec![value]);
        }
        let bytes = BincodeContainer.pack(&[value]).unwrap();
        assert!(matches!(BincodeContainer.unpack(&bytes), Err(CodecError::Container(_))));
    }

    #[test]
    fn test_bincode_huge_length_prefix_rejected() {
        // claims u64::MAX values
        let bytes = [253, 255, 255, 255, 255, 255, 255, 255, 255];
        assert!(BincodeContainer.unpack(&bytes).is_err());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_unpack_inverts_pack() {
        let bytes = JsonContainer.pack(&sample()).unwrap();
        assert_eq!(JsonContainer.unpack(&bytes).unwrap(), sample());
        assert!(JsonContainer.unpack(b"[] x").is_err());
    }
}
