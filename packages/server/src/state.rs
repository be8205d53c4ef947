use std::sync::Arc;

use anyhow::Context;
use common::StorageBackend;
use common::image_gen::ImageGenerator;
use common::image_gen::dalle::DalleClient;
use common::image_gen::mock::MockImageGenerator;
use common::storage::memory::MemoryObjectStore;
use common::storage::s3::S3ObjectStore;
use common::storage::{BucketLocation, ObjectStore};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    pub images: Arc<dyn ImageGenerator>,
    pub storage: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Construct the external clients described by `config`.
    pub fn from_config(config: AppConfig, db: DatabaseConnection) -> anyhow::Result<Self> {
        let images: Arc<dyn ImageGenerator> = if config.image.mock {
            Arc::new(MockImageGenerator)
        } else {
            Arc::new(DalleClient::new(&config.image).context("Failed to build image client")?)
        };

        let storage: Arc<dyn ObjectStore> = match config.storage.backend {
            StorageBackend::S3 => Arc::new(
                S3ObjectStore::new(&config.storage).context("Failed to build S3 client")?,
            ),
            StorageBackend::Memory => Arc::new(MemoryObjectStore::new(BucketLocation::new(
                config.storage.bucket.clone(),
                config.storage.region.clone(),
            ))),
        };

        info!(
            generator = images.name(),
            bucket = %config.storage.bucket,
            region = %config.storage.region,
            "External clients ready"
        );

        Ok(Self {
            db,
            config,
            images,
            storage,
        })
    }
}
