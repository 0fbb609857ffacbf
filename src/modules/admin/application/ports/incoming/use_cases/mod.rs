mod admin_access;

pub use admin_access::{AdminAccessError, AdminAccessUseCase};
