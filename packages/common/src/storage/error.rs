use std::fmt;

/// Errors that can occur during object storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// The requested object was not found.
    NotFound(String),
    /// The store could not be constructed from its configuration.
    Config(String),
    /// The backend answered an upload with a non-success status.
    Rejected { key: String, status: u16 },
    /// Transport, auth or other backend failure.
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(key) => write!(f, "object not found: {key}"),
            Self::Config(msg) => write!(f, "invalid storage configuration: {msg}"),
            Self::Rejected { key, status } => {
                write!(f, "upload of {key} rejected with status {status}")
            }
            Self::Backend(msg) => write!(f, "storage backend error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}
