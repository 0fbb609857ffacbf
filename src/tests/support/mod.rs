pub mod app_state_builder;
pub mod fake_remote;
pub mod stubs;
