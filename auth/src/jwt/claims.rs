use chrono::Duration;
use serde::Deserialize;
use serde::Serialize;

/// Identity token claims.
///
/// Binds a subject identifier to an absolute expiration instant. Both claims
/// are required: a token lacking either, or carrying them with the wrong
/// JSON type, does not deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub id: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, expiring `ttl` after `issued_at`.
    ///
    /// # Arguments
    /// * `subject` - Unique subject identifier
    /// * `issued_at` - Issuance instant (Unix timestamp)
    /// * `ttl` - Token lifetime
    pub fn for_subject(subject: impl ToString, issued_at: i64, ttl: Duration) -> Self {
        Self {
            id: subject.to_string(),
            exp: issued_at + ttl.num_seconds(),
        }
    }

    /// Check if token is expired.
    ///
    /// A token stops being valid at the exact second of its `exp` claim.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("user123", 1_700_000_000, Duration::hours(24));

        assert_eq!(claims.id, "user123");
        assert_eq!(claims.exp - 1_700_000_000, 24 * 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            id: "user123".to_string(),
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_serialized_claim_names() {
        let claims = Claims {
            id: "user123".to_string(),
            exp: 1000,
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value, serde_json::json!({ "id": "user123", "exp": 1000 }));
    }

    #[test]
    fn test_rejects_non_string_subject() {
        let result = serde_json::from_value::<Claims>(serde_json::json!({ "id": 42, "exp": 1000 }));
        assert!(result.is_err());

        let result = serde_json::from_value::<Claims>(serde_json::json!({ "exp": 1000 }));
        assert!(result.is_err());
    }
}
