use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("JWT signing key is empty")]
    EmptySigningKey,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token claims are invalid: {0}")]
    InvalidClaims(String),

    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    #[error("Token is expired")]
    TokenExpired,
}
