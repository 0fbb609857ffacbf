mod login_admin;
mod logout_admin;
mod sign_in_admin;

pub use login_admin::*;
pub use logout_admin::*;
pub use sign_in_admin::*;

use actix_web::HttpResponse;
use tracing::error;

use crate::modules::admin::application::ports::incoming::use_cases::AdminAccessError;
use crate::shared::api::ApiResponse;

fn admin_access_error_response(err: AdminAccessError) -> HttpResponse {
    match err {
        AdminAccessError::InvalidCredentials => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
        }
        AdminAccessError::InvalidEmail => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Invalid email format")
        }
        AdminAccessError::NotConfigured(what) => ApiResponse::service_unavailable(
            "NOT_CONFIGURED",
            &format!("{} is not configured", what),
        ),
        AdminAccessError::Provider(msg) => {
            error!("Identity provider failure: {}", msg);
            ApiResponse::bad_gateway("IDENTITY_PROVIDER_ERROR", "Sign-in service failed")
        }
    }
}
