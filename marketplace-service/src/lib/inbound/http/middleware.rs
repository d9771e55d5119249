use std::sync::Arc;

use auth::Authenticator;
use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::Utc;
use serde_json::json;
use thiserror::Error;

use crate::domain::user::models::UserId;

/// Identity established by the access gate, stored in request extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Reason a request was refused at the gate. Always answered with 401.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    #[error("Authorization header is missing")]
    MissingHeader,

    #[error("Authorization header must be 'Bearer <token>'")]
    MalformedHeader,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token claims")]
    InvalidClaims,
}

impl IntoResponse for AccessDenied {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": self.to_string()
            })),
        )
            .into_response()
    }
}

impl From<JwtError> for AccessDenied {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::TokenExpired => AccessDenied::TokenExpired,
            JwtError::MissingClaim(_) | JwtError::InvalidClaims(_) => AccessDenied::InvalidClaims,
            JwtError::EmptySigningKey
            | JwtError::EncodingFailed(_)
            | JwtError::Malformed(_)
            | JwtError::InvalidSignature => AccessDenied::InvalidToken,
        }
    }
}

/// Run the gate checks against request headers.
///
/// Header present, exact `"Bearer "` prefix, valid HS256 signature, not
/// expired at `now` (Unix seconds), and an `id` claim naming a user.
pub fn check_access(
    headers: &HeaderMap,
    authenticator: &Authenticator,
    now: i64,
) -> Result<AuthenticatedUser, AccessDenied> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(AccessDenied::MissingHeader)?;

    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AccessDenied::MalformedHeader)?;

    let claims = authenticator.validate_token_at(token, now)?;

    let user_id = UserId::from_string(&claims.id).map_err(|_| AccessDenied::InvalidClaims)?;

    Ok(AuthenticatedUser { user_id })
}

/// Middleware that validates JWT tokens and adds user info to request extensions
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AccessDenied> {
    let current_user = check_access(req.headers(), &authenticator, Utc::now().timestamp())
        .map_err(|e| {
            tracing::warn!(reason = %e, path = %req.uri().path(), "Request rejected");
            e
        })?;

    req.extensions_mut().insert(current_user);

    Ok(next.run(req).await)
}
