//! Base64 data-URI codec for JPEG payloads.
//!
//! The API carries encoded images as `data:image/jpeg;base64,` URIs in
//! JSON responses and form fields.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::{PipelineError, PipelineResult};

/// Prefix for JPEG data URIs produced and accepted by the service.
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Encode JPEG bytes as a data URI.
pub fn to_data_uri(bytes: &[u8]) -> String {
    format!("{JPEG_DATA_URI_PREFIX}{}", BASE64.encode(bytes))
}

/// Decode a data URI (or bare base64 string) back into bytes.
///
/// The prefix is optional on input; malformed base64 yields
/// `PipelineError::InvalidPayload`.
pub fn from_data_uri(payload: &str) -> PipelineResult<Vec<u8>> {
    let encoded = payload
        .strip_prefix(JPEG_DATA_URI_PREFIX)
        .unwrap_or(payload)
        .trim();
    BASE64
        .decode(encoded)
        .map_err(|e| PipelineError::InvalidPayload {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x12, 0x34];
        let uri = to_data_uri(&bytes);
        assert!(uri.starts_with(JPEG_DATA_URI_PREFIX));
        assert_eq!(from_data_uri(&uri).unwrap(), bytes);
    }

    #[test]
    fn test_bare_base64_accepted() {
        let bytes = b"hello".to_vec();
        let uri = to_data_uri(&bytes);
        let bare = uri.strip_prefix(JPEG_DATA_URI_PREFIX).unwrap();
        assert_eq!(from_data_uri(bare).unwrap(), bytes);
    }

    #[test]
    fn test_malformed_base64_rejected() {
        let result = from_data_uri("data:image/jpeg;base64,not!!valid@@base64");
        assert!(matches!(
            result,
            Err(PipelineError::InvalidPayload { .. })
        ));
    }
}
