//! Admin login and logout.
//!
//! ```text
//! POST /admin/login {"username":"admin","password":"password"}
//! POST /admin/logout
//! ```

use actix_web::{HttpResponse, post, web};
use serde_json::json;
use tracing::info;

use super::dto::{AdminResponse, LoginRequest};
use crate::domain::{Error, LoginCredentials, LoginValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    let (field, code) = match err {
        LoginValidationError::EmptyUsername => ("username", "empty_username"),
        LoginValidationError::EmptyPassword => ("password", "empty_password"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

/// Authenticate the operator and start an admin session.
#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = AdminResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminLogin",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let admin = state.login.authenticate(&credentials).await?;
    session.persist_admin(&admin)?;
    Ok(HttpResponse::Ok().json(AdminResponse {
        username: admin.username().to_owned(),
    }))
}

/// End the admin session. Succeeds whether or not one exists.
#[utoipa::path(
    post,
    path = "/admin/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["admin"],
    operation_id = "adminLogout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    if let Ok(Some(admin)) = session.admin() {
        info!(username = %admin, "admin signed out");
    }
    session.clear();
    HttpResponse::NoContent().finish()
}
