pub mod admin_mode;

pub use admin_mode::{AdminSession, ViewerMode};
