use async_trait::async_trait;

use super::error::StorageError;

/// Key-addressed object storage with public URLs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload `data` under `key` and return the object's public URL.
    ///
    /// Existing objects under the same key are overwritten. Failures are
    /// returned as-is; nothing is retried.
    async fn put(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// The public URL an object stored under `key` is served from.
    fn public_url(&self, key: &str) -> String;
}
