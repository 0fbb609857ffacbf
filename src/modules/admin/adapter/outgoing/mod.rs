pub mod remote_identity_provider;

pub use remote_identity_provider::RemoteIdentityProvider;
