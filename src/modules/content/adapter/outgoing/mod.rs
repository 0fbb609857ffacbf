pub mod local;
pub mod remote;
pub mod tracing_fallback_observer;

pub use tracing_fallback_observer::{FallbackLogLevel, TracingFallbackObserver};
