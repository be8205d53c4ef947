use serde::Deserialize;

/// Image generation configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ImageGenConfig {
    /// Return the canned fixture image instead of calling the API. Default: false.
    #[serde(default)]
    pub mock: bool,
    /// Bearer key for the image API. Required unless `mock` is set.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API. Default: "https://api.openai.com/v1".
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Request timeout in seconds. Default: 60.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".into()
}
fn default_timeout_secs() -> u64 {
    60
}

impl Default for ImageGenConfig {
    fn default() -> Self {
        Self {
            mock: false,
            api_key: None,
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Which object store implementation backs uploads.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    S3,
    /// Keep objects in process memory. Only useful for offline runs.
    Memory,
}

/// Object storage configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ObjectStorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Bucket name. Default: "icong-generator".
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Bucket region. Default: "eu-north-1".
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub access_key_id: Option<String>,
    #[serde(default)]
    pub secret_access_key: Option<String>,
}

fn default_bucket() -> String {
    "icong-generator".into()
}
fn default_region() -> String {
    "eu-north-1".into()
}

impl Default for ObjectStorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            bucket: default_bucket(),
            region: default_region(),
            access_key_id: None,
            secret_access_key: None,
        }
    }
}
