use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg, log_level) = match self.0 {
            ServiceError::Validation(errors) => {
                warn!("📝 Validation failed: {errors:?}");
                let error_msg = format!("Validation failed: {errors:?}");
                (StatusCode::BAD_REQUEST, error_msg, "warn")
            }
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => {
                    info!("🔍 Resource not found");
                    (StatusCode::NOT_FOUND, "Not found".to_string(), "info")
                }
                RepositoryError::Sqlx(err) => {
                    error!("💾 Database error: {}", err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error".to_string(),
                        "error",
                    )
                }
                RepositoryError::Custom(msg) => {
                    error!("⚙️ Custom repository error: {}", msg);
                    (StatusCode::INTERNAL_SERVER_ERROR, msg, "error")
                }
            },
            ServiceError::NotFound(msg) => {
                info!("🔍 Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg, "info")
            }
            ServiceError::InternalServerError(msg) => {
                error!("🔥 Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg, "error")
            }
            ServiceError::Custom(msg) => {
                error!("⚙️ Custom service error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg, "error")
            }
        };

        match log_level {
            "error" => error!("🚨 HTTP Error {}: {}", status, msg),
            "warn" => warn!("⚠️ HTTP Warning {}: {}", status, msg),
            "info" => info!("ℹ️ HTTP Info {}: {}", status, msg),
            _ => error!("🚨 HTTP Error {}: {}", status, msg),
        }

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}

impl From<ServiceError> for AppErrorHttp {
    fn from(error: ServiceError) -> Self {
        AppErrorHttp(error)
    }
}

impl From<RepositoryError> for AppErrorHttp {
    fn from(error: RepositoryError) -> Self {
        AppErrorHttp(ServiceError::Repo(error))
    }
}
