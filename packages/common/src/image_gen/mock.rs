use async_trait::async_trait;
use tracing::debug;

use super::error::ImageGenError;
use super::provider::ImageGenerator;
use super::types::GeneratedImage;

/// Canned PNG returned in mock mode.
pub const FIXTURE_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// Offline generator that ignores the prompt and returns [`FIXTURE_PNG_BASE64`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MockImageGenerator;

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageGenError> {
        debug!(prompt_len = prompt.len(), "Returning fixture image");
        Ok(GeneratedImage::from_base64(FIXTURE_PNG_BASE64))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
