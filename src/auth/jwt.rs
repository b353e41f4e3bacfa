//! Token issuance and verification
//!
//! Tokens are HMAC-signed JWTs carrying a minimal claim set (user id,
//! username, role) plus issued-at/expires-at timestamps. Keys are
//! pre-computed once from the process-wide secret and shared via AppState.

use anyhow::Result;
use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// User role as embedded in claims and stored on the user record.
///
/// A closed enumeration: any role string this build does not recognize
/// decodes to `Unknown` and is rejected during token verification instead
/// of being trusted implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Standard,
    #[serde(other)]
    Unknown,
}

impl From<&str> for UserRole {
    fn from(value: &str) -> Self {
        match value {
            "ADMIN" => UserRole::Admin,
            "STANDARD" => UserRole::Standard,
            _ => UserRole::Unknown,
        }
    }
}

/// JWT claims
///
/// A strict subset of the stored identity plus timestamps. No secret
/// material (password hash, raw password) ever enters the claim set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Username at issuance time
    pub username: String,
    /// Role claim, checked by handlers for role-gated operations
    pub role: UserRole,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Pre-computed JWT keys for efficient token operations
/// These are expensive to create, so we cache them in AppState
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from the signing secret.
    /// This should be called once at startup.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Why a token was rejected.
///
/// The variant is significant for server-side logs only; every variant
/// surfaces to the client as the same generic 401 so a caller cannot
/// distinguish a bad signature from an expired token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing bearer token")]
    Missing,
    #[error("malformed token")]
    Malformed,
    #[error("signature mismatch")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("unrecognized role claim")]
    UnknownRole,
}

/// Token service for issue/verify operations
///
/// Holds pre-computed keys (cheap to clone via Arc) and the configured
/// token TTL. Immutable after construction, safe for unsynchronized
/// concurrent use.
#[derive(Clone)]
pub struct TokenService {
    keys: JwtKeys,
    ttl_secs: i64,
}

impl TokenService {
    /// Create a new token service with pre-computed keys.
    ///
    /// Call once at application startup and store in AppState; the TTL
    /// must be positive (validated when configuration is loaded).
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        debug_assert!(ttl_secs > 0, "token TTL must be positive");
        Self {
            keys: JwtKeys::new(secret),
            ttl_secs,
        }
    }

    /// Issue a signed, time-bounded token for the given identity.
    ///
    /// The expiry is embedded in the claims and enforced by the verifier,
    /// not by the issuer.
    pub fn issue_token(&self, user_id: Uuid, username: &str, role: UserRole) -> Result<String> {
        if username.is_empty() {
            anyhow::bail!("Cannot issue token for empty username");
        }
        if role == UserRole::Unknown {
            anyhow::bail!("Cannot issue token for unrecognized role");
        }

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role,
            iat: now,
            exp: now + self.ttl_secs,
        };

        self.encode(&claims)
    }

    fn encode(&self, claims: &Claims) -> Result<String> {
        encode(&Header::default(), claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
    }

    /// Verify a raw token and return its claims.
    ///
    /// Steps run strictly in sequence and short-circuit on first failure:
    /// structural decode, signature check, temporal check, role check.
    /// A token whose expiry has been reached (elapsed >= TTL) is rejected,
    /// so the check on `exp` is inclusive.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        // Expiry is checked below with an inclusive boundary.
        validation.validate_exp = false;

        let data = decode::<Claims>(token, self.keys.decoding(), &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::Malformed,
            }
        })?;

        let claims = data.claims;

        if claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::Expired);
        }

        if claims.role == UserRole::Unknown {
            return Err(AuthError::UnknownRole);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> TokenService {
        TokenService::new("test-secret", 3600)
    }

    fn test_claims(exp_offset: i64, role: UserRole) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: Uuid::new_v4().to_string(),
            username: "alice".to_string(),
            role,
            iat: now,
            exp: now + exp_offset,
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service
            .issue_token(user_id, "alice", UserRole::Admin)
            .unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_empty_username_rejected_at_issuance() {
        let service = create_test_service();
        assert!(service
            .issue_token(Uuid::new_v4(), "", UserRole::Standard)
            .is_err());
    }

    #[test]
    fn test_unknown_role_rejected_at_issuance() {
        let service = create_test_service();
        assert!(service
            .issue_token(Uuid::new_v4(), "alice", UserRole::Unknown)
            .is_err());
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = create_test_service();
        assert_eq!(
            service.verify_token("not.a.token"),
            Err(AuthError::Malformed)
        );
        assert_eq!(service.verify_token(""), Err(AuthError::Malformed));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let service = create_test_service();
        let token = service
            .issue_token(Uuid::new_v4(), "alice", UserRole::Standard)
            .unwrap();

        // Flip the last byte of the signature segment
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert_eq!(
            service.verify_token(&tampered),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = create_test_service();
        let verifier = TokenService::new("a-different-secret", 3600);

        let token = issuer
            .issue_token(Uuid::new_v4(), "alice", UserRole::Standard)
            .unwrap();

        assert_eq!(
            verifier.verify_token(&token),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = create_test_service();
        let token = service.encode(&test_claims(-10, UserRole::Standard)).unwrap();
        assert_eq!(service.verify_token(&token), Err(AuthError::Expired));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let service = create_test_service();
        // exp == now: elapsed time equals the TTL, which must be rejected
        let token = service.encode(&test_claims(0, UserRole::Standard)).unwrap();
        assert_eq!(service.verify_token(&token), Err(AuthError::Expired));
    }

    #[test]
    fn test_unknown_role_claim_rejected_at_decode() {
        let service = create_test_service();
        let token = service.encode(&test_claims(3600, UserRole::Unknown)).unwrap();
        assert_eq!(service.verify_token(&token), Err(AuthError::UnknownRole));
    }

    #[test]
    fn test_tokens_issued_in_succession_are_independent() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let t1 = service
            .issue_token(user_id, "alice", UserRole::Admin)
            .unwrap();
        let t2 = service
            .issue_token(user_id, "alice", UserRole::Admin)
            .unwrap();

        assert!(service.verify_token(&t1).is_ok());
        assert!(service.verify_token(&t2).is_ok());
    }

    #[test]
    fn test_role_parsing_from_storage() {
        assert_eq!(UserRole::from("ADMIN"), UserRole::Admin);
        assert_eq!(UserRole::from("STANDARD"), UserRole::Standard);
        assert_eq!(UserRole::from("superuser"), UserRole::Unknown);
    }
}
