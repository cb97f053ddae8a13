//! RPC surface exposed over actix-web.

use actix_web::error::JsonPayloadError;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use serde::{Deserialize, Serialize};

use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

pub mod users;

/// Scope that mirrors the fully-qualified service name.
pub const USER_SERVICE_SCOPE: &str = "/user_management.UserService";

/// Error envelope returned in place of a response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

fn status_and_code(err: &ServiceError) -> (StatusCode, &'static str) {
    match err {
        ServiceError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ServiceError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT"),
        ServiceError::Provider(RepositoryError::ConnectionError(_)) => {
            (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
        }
        ServiceError::Provider(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
    }
}

/// Translates a façade failure into the wire error envelope.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let (status, code) = status_and_code(err);
    HttpResponse::build(status).json(ErrorResponse {
        code: code.to_string(),
        message: err.to_string(),
    })
}

/// Rejects unparsable request bodies before they reach the façade.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected malformed request: {err}");
    let response = error_response(&ServiceError::InvalidArgument(err.to_string()));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Registers the user service endpoints under [`USER_SERVICE_SCOPE`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(USER_SERVICE_SCOPE)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(users::retrieve_user_by_id)
            .service(users::retrieve_users_by_ids)
            .service(users::search_users),
    )
    .service(health);
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}
