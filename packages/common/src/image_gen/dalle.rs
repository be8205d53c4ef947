//! OpenAI images API client (DALL·E).

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use super::error::ImageGenError;
use super::provider::ImageGenerator;
use super::types::{GeneratedImage, ICON_SIZE};
use crate::config::ImageGenConfig;

/// Upstream error bodies can be large; only this many chars are kept.
const MAX_ERROR_LEN: usize = 500;

/// Live client for the OpenAI `images/generations` endpoint.
pub struct DalleClient {
    client: reqwest::Client,
    api_key: String,
    generations_url: String,
}

impl DalleClient {
    /// Build a client from configuration. Fails if no API key is configured.
    pub fn new(config: &ImageGenConfig) -> Result<Self, ImageGenError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ImageGenError::Auth("DALLE_API_KEY not set".into()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            generations_url: format!(
                "{}/images/generations",
                config.api_base.trim_end_matches('/')
            ),
        })
    }

    fn parse_error(status: u16, text: &str) -> ImageGenError {
        let message: String = text.chars().take(MAX_ERROR_LEN).collect();
        match status {
            401 | 403 => ImageGenError::Auth(message),
            429 => ImageGenError::RateLimited(message),
            _ => ImageGenError::Api { status, message },
        }
    }
}

#[async_trait]
impl ImageGenerator for DalleClient {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageGenError> {
        let body = DalleRequest {
            prompt,
            n: 1,
            size: ICON_SIZE,
            response_format: "b64_json",
        };

        let response = self
            .client
            .post(&self.generations_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Image API returned an error");
            return Err(Self::parse_error(status.as_u16(), &text));
        }

        let parsed: DalleResponse = response.json().await?;
        parsed
            .data
            .into_iter()
            .next()
            .and_then(|d| d.b64_json)
            .filter(|b64| !b64.is_empty())
            .map(GeneratedImage::from_base64)
            .ok_or(ImageGenError::EmptyResponse)
    }

    fn name(&self) -> &'static str {
        "dall-e"
    }
}

#[derive(Debug, Serialize)]
struct DalleRequest<'a> {
    prompt: &'a str,
    n: u32,
    size: &'a str,
    response_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct DalleResponse {
    #[serde(default)]
    data: Vec<DalleImageData>,
}

#[derive(Debug, Deserialize)]
struct DalleImageData {
    #[serde(default)]
    b64_json: Option<String>,
}
