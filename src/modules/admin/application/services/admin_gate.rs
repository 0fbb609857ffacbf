use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

use super::password_digest::{digest_password, PasswordDigest};
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminAccessError, AdminAccessUseCase,
};
use crate::modules::admin::application::ports::outgoing::{
    IdentityError, IdentityProvider, IdentitySession,
};
use crate::modules::admin::domain::session::AdminStatus;
use crate::modules::content::application::ports::outgoing::KeyValueStorage;

pub const DEFAULT_ADMIN_FLAG_KEY: &str = "portfolio-cms-admin";
const FLAG_ON: &str = "true";

#[derive(Debug, Default)]
struct GateState {
    admin: bool,
    session: Option<IdentitySession>,
}

/// Admin flag persisted under its own storage key, separate from content.
pub struct AdminGate {
    storage: Arc<dyn KeyValueStorage>,
    flag_key: String,
    password: Option<PasswordDigest>,
    identity: Option<Arc<dyn IdentityProvider>>,
    state: RwLock<GateState>,
}

impl AdminGate {
    /// Restores the persisted flag. An empty password disables password login.
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        flag_key: impl Into<String>,
        password: Option<&str>,
        identity: Option<Arc<dyn IdentityProvider>>,
    ) -> Self {
        let flag_key = flag_key.into();

        let admin = match storage.get(&flag_key) {
            Ok(value) => value.as_deref() == Some(FLAG_ON),
            Err(e) => {
                warn!("Could not read admin flag '{}': {}", flag_key, e);
                false
            }
        };

        Self {
            storage,
            flag_key,
            password: password.filter(|p| !p.is_empty()).map(digest_password),
            identity,
            state: RwLock::new(GateState {
                admin,
                session: None,
            }),
        }
    }

    fn with_state<T>(&self, change: impl FnOnce(&mut GateState) -> T) -> T {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        change(&mut state)
    }

    fn persist(&self, admin: bool) {
        let result = if admin {
            self.storage.set(&self.flag_key, FLAG_ON)
        } else {
            self.storage.remove(&self.flag_key)
        };

        if let Err(e) = result {
            warn!("Could not persist admin flag '{}': {}", self.flag_key, e);
        }
    }

    fn enter_admin_mode(&self, session: Option<IdentitySession>) -> AdminStatus {
        self.with_state(|s| {
            s.admin = true;
            s.session = session;
        });
        self.persist(true);
        self.status()
    }
}

#[async_trait]
impl AdminAccessUseCase for AdminGate {
    fn status(&self) -> AdminStatus {
        let state = self
            .state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        AdminStatus {
            admin_mode: state.admin,
            user: state.session.as_ref().map(|s| s.user.clone()),
            remote_sign_in: self.identity.is_some(),
        }
    }

    async fn login_with_password(&self, password: &str) -> Result<AdminStatus, AdminAccessError> {
        let expected = self
            .password
            .ok_or(AdminAccessError::NotConfigured("Admin password"))?;

        if digest_password(password) != expected {
            warn!("Admin login rejected");
            return Err(AdminAccessError::InvalidCredentials);
        }

        info!("Admin mode enabled by password");
        Ok(self.enter_admin_mode(None))
    }

    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminStatus, AdminAccessError> {
        let identity = self
            .identity
            .as_ref()
            .ok_or(AdminAccessError::NotConfigured("Remote sign-in"))?;

        let email = email.trim();
        if !EmailAddress::is_valid(email) {
            return Err(AdminAccessError::InvalidEmail);
        }

        let session = identity
            .sign_in(email, password)
            .await
            .map_err(|e| match e {
                IdentityError::InvalidCredentials => AdminAccessError::InvalidCredentials,
                other => AdminAccessError::Provider(other.to_string()),
            })?;

        info!(email = %session.user.email, "Admin mode enabled by remote sign-in");
        Ok(self.enter_admin_mode(Some(session)))
    }

    async fn logout(&self) -> AdminStatus {
        let session = self.with_state(|s| {
            s.admin = false;
            s.session.take()
        });
        self.persist(false);

        if let (Some(identity), Some(session)) = (&self.identity, session) {
            if let Err(e) = identity.sign_out(&session.access_token).await {
                warn!("Remote sign-out failed: {}", e);
            }
        }

        info!("Admin mode disabled");
        self.status()
    }
}
