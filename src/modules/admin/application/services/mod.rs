pub mod admin_gate;
pub mod password_digest;

pub use admin_gate::{AdminGate, DEFAULT_ADMIN_FLAG_KEY};
