use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::shared::api::ApiResponse;
use crate::AppState;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn app_state(req: &HttpRequest) -> Result<&web::Data<AppState>, ActixError> {
    req.app_data::<web::Data<AppState>>()
        .ok_or_else(|| create_api_error(ApiResponse::internal_error()))
}

/// Whoever is looking at the page. Public views use it to decide whether
/// drafts and archived items are shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerMode {
    pub admin: bool,
}

impl FromRequest for ViewerMode {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(app_state(req).map(|data| ViewerMode {
            admin: data.admin.is_admin(),
        }))
    }
}

/// Guard for dashboard routes: rejects the request unless admin mode is on.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let data = match app_state(req) {
            Ok(data) => data,
            Err(e) => return ready(Err(e)),
        };

        if data.admin.is_admin() {
            ready(Ok(AdminSession))
        } else {
            ready(Err(create_api_error(ApiResponse::forbidden(
                "ADMIN_MODE_REQUIRED",
                "Admin mode is required for this action",
            ))))
        }
    }
}
