pub mod content_source;
pub mod fallback_observer;
pub mod key_value_storage;

pub use content_source::{ContentSource, SourceError};
pub use fallback_observer::{FallbackEvent, FallbackObserver};
pub use key_value_storage::{KeyValueStorage, StorageError};
