use ::s3::creds::Credentials;
use ::s3::{Bucket, Region};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::error::StorageError;
use super::location::BucketLocation;
use super::traits::ObjectStore;
use crate::config::ObjectStorageConfig;

/// S3-backed object store writing to one fixed bucket.
pub struct S3ObjectStore {
    bucket: Box<Bucket>,
    location: BucketLocation,
}

impl S3ObjectStore {
    /// Build a store from configuration.
    ///
    /// Missing keys fall back to the usual AWS credential chain.
    pub fn new(config: &ObjectStorageConfig) -> Result<Self, StorageError> {
        let region: Region = config
            .region
            .parse()
            .map_err(|e| StorageError::Config(format!("invalid region '{}': {e}", config.region)))?;

        let credentials = Credentials::new(
            config.access_key_id.as_deref(),
            config.secret_access_key.as_deref(),
            None,
            None,
            None,
        )
        .map_err(|e| StorageError::Config(format!("invalid credentials: {e}")))?;

        let bucket = Bucket::new(&config.bucket, region, credentials)
            .map_err(|e| StorageError::Config(e.to_string()))?;

        Ok(Self {
            bucket,
            location: BucketLocation::new(config.bucket.clone(), config.region.clone()),
        })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    #[instrument(skip(self, data), fields(bucket = %self.location.bucket, size = data.len()))]
    async fn put(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let response = self
            .bucket
            .put_object_with_content_type(key, &data, content_type)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        let status = response.status_code();
        if !(200..300).contains(&status) {
            return Err(StorageError::Rejected {
                key: key.to_string(),
                status,
            });
        }

        debug!(status, "Object uploaded");
        Ok(self.public_url(key))
    }

    fn public_url(&self, key: &str) -> String {
        self.location.object_url(key)
    }
}
