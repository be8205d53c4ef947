pub mod config;
#[cfg(feature = "image-generation")]
pub mod image_gen;
pub mod storage;

pub use config::{ImageGenConfig, ObjectStorageConfig, StorageBackend};
