use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Longest prompt accepted, in characters.
pub const MAX_PROMPT_CHARS: usize = 1000;

/// Request body for icon generation.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct GenerateIconRequest {
    /// Text description of the icon (1-1000 characters). Leading and trailing
    /// whitespace is trimmed before generation, and the trimmed prompt is what
    /// gets stored.
    #[schema(example = "a red fox")]
    pub prompt: String,
}

/// Validate the prompt and return it trimmed.
pub fn validate_generate_request(payload: &GenerateIconRequest) -> Result<&str, AppError> {
    let prompt = payload.prompt.trim();
    if prompt.is_empty() || prompt.chars().count() > MAX_PROMPT_CHARS {
        return Err(AppError::Validation(format!(
            "Prompt must be 1-{MAX_PROMPT_CHARS} characters"
        )));
    }
    Ok(prompt)
}

/// Successful generation response.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIconResponse {
    /// Public URL of the uploaded icon.
    #[schema(example = "https://icong-generator.s3.eu-north-1.amazonaws.com/0191b3a4-5c6d-7e8f-9a0b-1c2d3e4f5a6b")]
    pub image_url: String,
    /// ID of the recorded icon; also the object key.
    pub icon_id: Uuid,
}
