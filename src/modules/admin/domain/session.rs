use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account signed in through the remote identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    #[schema(example = "2f1c8a0e-5d1b-4b7e-9a0f-3c2d1e0f9a8b")]
    pub id: String,
    #[schema(example = "owner@example.com")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatus {
    pub admin_mode: bool,
    /// Present only after a remote sign-in.
    pub user: Option<SessionUser>,
    /// Whether `/api/admin/sign-in` can be used.
    pub remote_sign_in: bool,
}
