use std::io::ErrorKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(String),

    /// The entry exists but cannot be decoded as text.
    #[error("Stored value is unreadable: {0}")]
    Corrupt(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidData => StorageError::Corrupt(err.to_string()),
            _ => StorageError::Io(err.to_string()),
        }
    }
}

/// Persistent string storage addressed by key, surviving restarts.
///
/// Values are small JSON documents that callers rewrite whole. Calls block,
/// so async callers run writes on the blocking pool.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
