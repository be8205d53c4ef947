use async_trait::async_trait;

use super::error::ImageGenError;
use super::types::GeneratedImage;

/// Text-to-image backend.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate exactly one image for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageGenError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}
