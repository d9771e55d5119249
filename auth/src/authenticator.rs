use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::SigningKey;
use crate::password::HashedPassword;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

// Well-formed Argon2id PHC string with the hasher's default cost parameters.
// No account stores it, so verifying against it only burns the same work.
const UNKNOWN_ACCOUNT_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1\
    $c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Authentication coordinator combining password verification and JWT generation.
///
/// Holds only immutable state, so a single instance can be shared across
/// request tasks behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `signing_key` - Process-wide key for signing and verifying tokens
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(signing_key: &SigningKey) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(signing_key),
        }
    }

    /// Override the lifetime of issued tokens.
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.jwt_handler = self.jwt_handler.with_token_ttl(ttl);
        self
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<HashedPassword, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &HashedPassword) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identifier to bind into the token
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &HashedPassword,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.issue(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Reject a login for an email with no account.
    ///
    /// Pays the same Argon2 cost as checking a real stored hash before failing
    /// with `InvalidCredentials`.
    pub fn reject_unknown_account(&self, password: &str) -> AuthenticationError {
        let placeholder = HashedPassword::new(UNKNOWN_ACCOUNT_HASH);
        let _ = self.password_hasher.verify(password, &placeholder);

        AuthenticationError::InvalidCredentials
    }

    /// Generate JWT token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, subject: &str) -> Result<String, JwtError> {
        self.jwt_handler.issue(subject)
    }

    /// Validate and decode JWT token against the current time.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.verify(token)
    }

    /// Validate and decode JWT token as of `now` (Unix timestamp).
    pub fn validate_token_at(&self, token: &str, now: i64) -> Result<Claims, JwtError> {
        self.jwt_handler.verify_at(token, now)
    }
}
