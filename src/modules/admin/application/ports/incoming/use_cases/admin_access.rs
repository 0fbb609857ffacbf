use async_trait::async_trait;

use crate::modules::admin::domain::session::AdminStatus;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminAccessError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("Identity provider error: {0}")]
    Provider(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Process-wide admin mode. Decides which views are served; it is not an
/// authorization boundary for the content backends.
#[async_trait]
pub trait AdminAccessUseCase: Send + Sync {
    fn status(&self) -> AdminStatus;

    fn is_admin(&self) -> bool {
        self.status().admin_mode
    }

    async fn login_with_password(&self, password: &str) -> Result<AdminStatus, AdminAccessError>;

    async fn sign_in(&self, email: &str, password: &str)
        -> Result<AdminStatus, AdminAccessError>;

    /// Always succeeds locally; remote sign-out failures are only logged.
    async fn logout(&self) -> AdminStatus;
}
