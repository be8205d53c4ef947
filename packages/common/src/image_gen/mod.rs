mod error;
mod provider;
mod types;

pub mod dalle;
pub mod mock;

pub use error::ImageGenError;
pub use provider::ImageGenerator;
pub use types::{GeneratedImage, ICON_SIZE};
