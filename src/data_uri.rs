//! The `data:<mime>;base64,<payload>` value type used across the studio.

use std::fmt;

use base64::Engine;

use crate::error::StudioError;

/// A parsed base64 data URI.
///
/// Splitting and reassembling is lossless: `DataUri::parse(s)?.to_string()`
/// yields `s` back for any URI this type accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    mime_type: String,
    payload: String,
}

impl DataUri {
    /// Build a data URI from a MIME type and raw bytes.
    #[must_use]
    pub fn from_bytes(mime_type: &str, data: &[u8]) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            payload: base64::engine::general_purpose::STANDARD.encode(data),
        }
    }

    /// Build a data URI from a MIME type and an already base64-encoded payload.
    #[must_use]
    pub fn from_base64(mime_type: &str, payload: &str) -> Self {
        Self { mime_type: mime_type.to_string(), payload: payload.to_string() }
    }

    /// Split a `data:<mime>;base64,<payload>` string into its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a base64 data URI.
    pub fn parse(uri: &str) -> Result<Self, StudioError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| StudioError::InvalidArgument(format!("Not a data URI: {uri}")))?;
        let (mime_type, payload) = rest.split_once(";base64,").ok_or_else(|| {
            StudioError::InvalidArgument(format!("Not a base64 data URI: {uri}"))
        })?;
        if mime_type.is_empty() {
            return Err(StudioError::InvalidArgument("Data URI has an empty MIME type".into()));
        }
        Ok(Self { mime_type: mime_type.to_string(), payload: payload.to_string() })
    }

    /// The MIME type (e.g. `"image/png"`).
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The base64 payload, without the `data:` prefix.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Decode the payload back to raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, StudioError> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.payload)
            .map_err(|e| StudioError::InvalidArgument(format!("Invalid base64 payload: {e}")))
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_encodes() {
        let uri = DataUri::from_bytes("image/png", &[1, 2, 3]);
        assert_eq!(uri.mime_type(), "image/png");
        assert_eq!(uri.to_string(), "data:image/png;base64,AQID");
    }

    #[test]
    fn parse_splits_mime_and_payload() {
        let uri = DataUri::parse("data:image/jpeg;base64,AQID").unwrap();
        assert_eq!(uri.mime_type(), "image/jpeg");
        assert_eq!(uri.payload(), "AQID");
    }

    #[test]
    fn round_trip_preserves_string() {
        let original = "data:image/webp;base64,UklGRgAAAABXRUJQ";
        let uri = DataUri::parse(original).unwrap();
        assert_eq!(uri.to_string(), original);
    }

    #[test]
    fn decode_recovers_bytes() {
        let uri = DataUri::from_bytes("image/png", &[0xFF, 0xD8, 0xFF]);
        assert_eq!(uri.decode().unwrap(), vec![0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn rejects_non_data_uri() {
        assert!(DataUri::parse("https://example.com/cat.png").is_err());
    }

    #[test]
    fn rejects_missing_base64_marker() {
        assert!(DataUri::parse("data:image/png,rawpayload").is_err());
    }

    #[test]
    fn rejects_empty_mime() {
        assert!(DataUri::parse("data:;base64,AQID").is_err());
    }
}
