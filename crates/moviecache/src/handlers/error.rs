use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use moviecache_core::movies::{repository_error_to_status_code, RepositoryError};

/// Application error type that wraps `anyhow::Error`.
///
/// This allows using `?` on functions that return `Result<_, anyhow::Error>`
/// to automatically convert them into `Result<_, AppError>`. Repository errors
/// keep their own status code; anything else is a 500.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        self.0
            .downcast_ref::<RepositoryError>()
            .map(repository_error_to_status_code)
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Application error");
        } else {
            tracing::debug!(error = %self.0, "Rejected request");
        }

        (
            status,
            Json(serde_json::json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
