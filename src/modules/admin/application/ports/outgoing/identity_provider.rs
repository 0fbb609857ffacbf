use async_trait::async_trait;

use crate::modules::admin::domain::session::SessionUser;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("Identity provider unreachable: {0}")]
    Unreachable(String),

    #[error("Identity provider rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Malformed identity response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentitySession {
    pub access_token: String,
    pub user: SessionUser,
}

/// Email/password sign-in against a hosted auth service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<IdentitySession, IdentityError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError>;
}
