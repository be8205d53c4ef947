use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::error::ImageGenError;

/// Width and height requested for every icon.
pub const ICON_SIZE: &str = "512x512";

/// A generated image as returned by the upstream API: base64, not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    b64_json: String,
}

impl GeneratedImage {
    pub fn from_base64(b64_json: impl Into<String>) -> Self {
        Self {
            b64_json: b64_json.into(),
        }
    }

    pub fn as_base64(&self) -> &str {
        &self.b64_json
    }

    /// Decode the payload into raw image bytes.
    pub fn decode(&self) -> Result<Vec<u8>, ImageGenError> {
        STANDARD
            .decode(self.b64_json.trim())
            .map_err(|e| ImageGenError::Decode(e.to_string()))
    }
}
