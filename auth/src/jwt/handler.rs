use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Serialize;
use serde_json::Value;

use super::claims::Claims;
use super::errors::JwtError;
use super::key::SigningKey;

/// Default identity token lifetime.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// JWT token handler for issuing and verifying identity tokens.
///
/// Uses HS256 (HMAC with SHA-256). Tokens signed with any other algorithm
/// are rejected during verification.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    token_ttl: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler from the process signing key.
    ///
    /// # Arguments
    /// * `key` - Validated signing key shared by issuer and verifier
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 and a 24 hour token lifetime
    pub fn new(key: &SigningKey) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            algorithm: Algorithm::HS256,
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
        }
    }

    /// Override the lifetime of issued tokens.
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Issue a token for a subject, valid from now for the configured lifetime.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, subject: &str) -> Result<String, JwtError> {
        self.issue_at(subject, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `issued_at`.
    pub fn issue_at(&self, subject: &str, issued_at: i64) -> Result<String, JwtError> {
        self.encode(&Claims::for_subject(subject, issued_at, self.token_ttl))
    }

    /// Encode arbitrary claims into a signed JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify a token's signature and claims, then check expiry against `now`.
    ///
    /// # Arguments
    /// * `token` - Compact JWT string
    /// * `now` - Current time (Unix timestamp)
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Malformed` - Not a structurally valid JWT
    /// * `InvalidSignature` - Signed with another key or algorithm
    /// * `MissingClaim` - `exp` is absent
    /// * `InvalidClaims` - `id`/`exp` absent or wrongly typed
    /// * `TokenExpired` - `now` is at or past `exp`
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the caller's clock, with no leeway.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        // Claims are typed only after the signature checks out, so a payload
        // with a wrongly typed claim is told apart from a broken token.
        let payload = decode::<Value>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    JwtError::InvalidSignature
                }
                ErrorKind::MissingRequiredClaim(claim) => JwtError::MissingClaim(claim.clone()),
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::Malformed(e.to_string()),
            })?;

        let claims: Claims = serde_json::from_value(payload)
            .map_err(|e| JwtError::InvalidClaims(e.to_string()))?;

        if claims.is_expired(now) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const ISSUED_AT: i64 = 1_700_000_000;
    const DAY: i64 = 24 * 60 * 60;

    fn handler(secret: &str) -> JwtHandler {
        JwtHandler::new(&SigningKey::new(secret).unwrap())
    }

    #[test]
    fn test_issue_and_verify() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!");

        let token = handler.issue("user123").expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = handler.verify(&token).expect("Failed to verify token");
        assert_eq!(claims.id, "user123");
    }

    #[test]
    fn test_token_valid_for_twenty_four_hours() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!");
        let token = handler.issue_at("user123", ISSUED_AT).unwrap();

        let claims = handler.verify_at(&token, ISSUED_AT).unwrap();
        assert_eq!(claims.exp, ISSUED_AT + DAY);

        assert!(handler.verify_at(&token, ISSUED_AT + DAY - 1).is_ok());
        assert_eq!(
            handler.verify_at(&token, ISSUED_AT + DAY),
            Err(JwtError::TokenExpired)
        );
        assert_eq!(
            handler.verify_at(&token, ISSUED_AT + 2 * DAY),
            Err(JwtError::TokenExpired)
        );
    }

    #[test]
    fn test_custom_ttl() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!")
            .with_token_ttl(Duration::minutes(5));
        let token = handler.issue_at("user123", ISSUED_AT).unwrap();

        assert!(handler.verify_at(&token, ISSUED_AT + 299).is_ok());
        assert!(handler.verify_at(&token, ISSUED_AT + 300).is_err());
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let handler1 = handler("secret1_at_least_32_bytes_long_key!");
        let handler2 = handler("secret2_at_least_32_bytes_long_key!");

        let token = handler1.issue("user123").unwrap();

        assert_eq!(handler2.verify(&token), Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_verify_garbage_token() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!");

        assert!(matches!(
            handler.verify("invalid.token.here"),
            Err(JwtError::Malformed(_))
        ));
        assert!(matches!(handler.verify(""), Err(JwtError::Malformed(_))));
        assert!(matches!(
            handler.verify("not-a-jwt"),
            Err(JwtError::Malformed(_))
        ));
    }

    #[test]
    fn test_verify_rejects_other_algorithm() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!");
        let token = encode(
            &Header::new(Algorithm::HS512),
            &Claims::for_subject("user123", ISSUED_AT, Duration::hours(1)),
            &EncodingKey::from_secret(b"my_secret_key_at_least_32_bytes_long!"),
        )
        .unwrap();

        assert_eq!(
            handler.verify_at(&token, ISSUED_AT),
            Err(JwtError::InvalidSignature)
        );
    }

    #[test]
    fn test_verify_rejects_numeric_subject() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!");
        let token = handler
            .encode(&json!({ "id": 42, "exp": ISSUED_AT + DAY }))
            .unwrap();

        assert!(matches!(
            handler.verify_at(&token, ISSUED_AT),
            Err(JwtError::InvalidClaims(_))
        ));
    }

    #[test]
    fn test_verify_rejects_missing_claims() {
        let handler = handler("my_secret_key_at_least_32_bytes_long!");

        let without_subject = handler.encode(&json!({ "exp": ISSUED_AT + DAY })).unwrap();
        assert!(matches!(
            handler.verify_at(&without_subject, ISSUED_AT),
            Err(JwtError::InvalidClaims(_))
        ));

        let without_expiry = handler.encode(&json!({ "id": "user123" })).unwrap();
        assert_eq!(
            handler.verify_at(&without_expiry, ISSUED_AT),
            Err(JwtError::MissingClaim("exp".to_string()))
        );
    }
}
