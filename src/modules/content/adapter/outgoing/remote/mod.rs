pub mod envelope;
pub mod remote_config;
pub mod remote_content_client;

pub use remote_config::{EndpointStyle, RemoteApiConfig};
pub use remote_content_client::RemoteContentClient;
