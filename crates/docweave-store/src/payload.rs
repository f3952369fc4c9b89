//! Byte extraction from stored values
//!
//! Maps the store's loosely-typed return shapes into one explicit union.
//! Unrecognized payloads are a normal variant, never an error: the resolver
//! skips them with a warning and moves on.

use crate::store::StoredValue;

/// Decoded byte payload of a stored value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactPayload {
    /// Bytes found on the nested inline-data capability
    InlineBytes {
        /// Raw bytes
        bytes: Vec<u8>,
        /// Mime type hint recorded next to the bytes
        mime_type: Option<String>,
    },
    /// Bytes found on the direct payload field
    DirectBytes(Vec<u8>),
    /// The value itself was raw bytes
    RawBytes(Vec<u8>),
    /// No byte payload in any known position
    Unrecognized,
}

impl ArtifactPayload {
    /// Decode a stored value, probing shapes in fixed order:
    /// inline data, then the direct payload field, then raw bytes.
    #[must_use]
    pub fn decode(value: &StoredValue) -> Self {
        match value {
            StoredValue::Part {
                inline_data: Some(inline),
                ..
            } => Self::InlineBytes {
                bytes: inline.data.clone(),
                mime_type: inline.mime_type.clone(),
            },
            StoredValue::Part {
                inline_data: None,
                data: Some(bytes),
            } => Self::DirectBytes(bytes.clone()),
            StoredValue::Raw(bytes) => Self::RawBytes(bytes.clone()),
            StoredValue::Part {
                inline_data: None,
                data: None,
            }
            | StoredValue::Opaque(_) => Self::Unrecognized,
        }
    }

    /// Extracted bytes, `None` for [`ArtifactPayload::Unrecognized`]
    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::InlineBytes { bytes, .. } | Self::DirectBytes(bytes) | Self::RawBytes(bytes) => {
                Some(bytes)
            }
            Self::Unrecognized => None,
        }
    }
}
