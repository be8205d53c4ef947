/// Errors returned by image generators.
#[derive(Debug, thiserror::Error)]
pub enum ImageGenError {
    /// API key missing or rejected.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Upstream rate limit or quota hit.
    #[error("rate limited by image API: {0}")]
    RateLimited(String),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered successfully but carried no image payload.
    #[error("image API returned no image data")]
    EmptyResponse,

    /// The payload was not valid base64.
    #[error("failed to decode image: {0}")]
    Decode(String),
}
