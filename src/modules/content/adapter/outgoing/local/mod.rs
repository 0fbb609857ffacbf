pub mod file_storage;
pub mod local_content_store;
pub mod memory_storage;

pub use file_storage::FileKeyValueStorage;
pub use local_content_store::{LocalContentStore, DEFAULT_STORE_KEY};
pub use memory_storage::MemoryKeyValueStorage;
