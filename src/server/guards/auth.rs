use crate::server::router::AppState;
use axum::{
    Json,
    extract::FromRequestParts,
    http::{HeaderName, StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::debug;

/// Header carrying the credential for mutating acronym routes.
pub const AUTHENTICATION: HeaderName = HeaderName::from_static("authentication");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Granted,
    /// No credential was presented.
    Missing,
    /// A credential was presented and refused.
    Denied,
}

/// Decides whether a presented credential may use the guarded routes.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credential: Option<&str>) -> AuthOutcome;
}

/// Accepts exactly one configured secret.
#[derive(Clone)]
pub struct SharedSecret {
    secret: Arc<str>,
}

impl SharedSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecret")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl Authenticator for SharedSecret {
    fn authenticate(&self, credential: Option<&str>) -> AuthOutcome {
        match credential {
            None | Some("") => AuthOutcome::Missing,
            Some(key) => {
                if key.as_bytes().ct_eq(self.secret.as_bytes()).into() {
                    AuthOutcome::Granted
                } else {
                    AuthOutcome::Denied
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RequireAuthentication;

impl FromRequestParts<AppState> for RequireAuthentication {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let outcome = match parts.headers.get(AUTHENTICATION) {
            None => state.authenticator.authenticate(None),
            Some(value) => match value.to_str() {
                Ok(key) => state.authenticator.authenticate(Some(key)),
                // Opaque bytes can never equal a configured secret.
                Err(_) => AuthOutcome::Denied,
            },
        };

        match outcome {
            AuthOutcome::Granted => Ok(RequireAuthentication),
            AuthOutcome::Missing => {
                debug!(path = %parts.uri.path(), "Missing Authentication header");
                Err(AuthError::Missing)
            }
            AuthOutcome::Denied => {
                debug!(path = %parts.uri.path(), "Authentication header rejected");
                Err(AuthError::Forbidden)
            }
        }
    }
}

#[derive(Debug)]
pub enum AuthError {
    Missing,
    Forbidden,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, error, reason) = match self {
            AuthError::Missing => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Missing Authentication header",
            ),
            AuthError::Forbidden => (
                StatusCode::FORBIDDEN,
                "forbidden",
                "Invalid Authentication header",
            ),
        };
        (status, Json(json!({ "error": error, "reason": reason }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_secret_distinguishes_missing_from_wrong() {
        let auth = SharedSecret::new("secretword");
        assert_eq!(auth.authenticate(None), AuthOutcome::Missing);
        assert_eq!(auth.authenticate(Some("")), AuthOutcome::Missing);
        assert_eq!(auth.authenticate(Some("wrongword")), AuthOutcome::Denied);
        assert_eq!(auth.authenticate(Some("secretword ")), AuthOutcome::Denied);
        assert_eq!(auth.authenticate(Some("secretword")), AuthOutcome::Granted);
    }

    #[test]
    fn shared_secret_debug_hides_the_secret() {
        let rendered = format!("{:?}", SharedSecret::new("secretword"));
        assert!(!rendered.contains("secretword"));
    }
}
