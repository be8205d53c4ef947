mod error;
mod location;
mod traits;

pub mod memory;
#[cfg(feature = "object-storage")]
pub mod s3;

pub use error::StorageError;
pub use location::BucketLocation;
pub use traits::ObjectStore;
