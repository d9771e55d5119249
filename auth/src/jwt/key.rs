use std::fmt;

use super::errors::JwtError;

/// Symmetric key used to sign and verify identity tokens.
///
/// Built once at startup from configuration and handed to every component
/// that issues or verifies tokens. Construction fails on an empty secret so a
/// misconfigured process never signs tokens with a trivial key.
#[derive(Clone)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Create a signing key from a secret.
    ///
    /// # Errors
    /// * `EmptySigningKey` - Secret is empty or whitespace only
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, JwtError> {
        let secret = secret.into();
        if secret.iter().all(u8::is_ascii_whitespace) {
            return Err(JwtError::EmptySigningKey);
        }
        Ok(Self(secret))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(***)")
    }
}
