use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;
use tracing::error;

use super::validation::ValidationErrors;

#[derive(Debug, ThisError)]
pub enum AcronymsError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Acronym not found")]
    NotFound,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl From<ValidationErrors> for AcronymsError {
    fn from(errors: ValidationErrors) -> Self {
        AcronymsError::Validation(errors)
    }
}

impl IntoResponse for AcronymsError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            AcronymsError::Validation(errors) => {
                tracing::debug!(errors = %errors, "Request rejected by validation");
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }

            AcronymsError::NotFound => StatusCode::NOT_FOUND.into_response(),

            AcronymsError::Config(_)
            | AcronymsError::JsonError(_)
            | AcronymsError::DatabaseError(_) => {
                error!(error = %self, "Request failed with an internal error");
                let body = ApiErrorObject {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiErrorBody { inner: body }),
                )
                    .into_response()
            }
        }
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AcronymsError) -> (StatusCode, Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn internal_errors_share_one_opaque_body() {
        let opaque = serde_json::json!({
            "error": { "code": "INTERNAL_ERROR", "message": "An internal server error occurred." }
        });

        let json_err = serde_json::from_str::<Value>("{").unwrap_err();
        for err in [
            AcronymsError::Config("auth_secret missing".to_string()),
            AcronymsError::JsonError(json_err),
            AcronymsError::DatabaseError(sqlx::Error::RowNotFound),
        ] {
            let (status, body) = render(err).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, opaque);
        }
    }
}
