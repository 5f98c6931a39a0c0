//! Bearer session credentials
//!
//! HS256 tokens carrying the account id and email. Expiry is checked against
//! the injected clock rather than the system time.

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::{ApiError, ApiResult};

/// Issuer claim stamped on every token.
pub const SESSION_ISSUER: &str = "sme_fin_backend";

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user_id: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
}

pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry: Duration,
    clock: Arc<dyn Clock>,
}

impl SessionIssuer {
    pub fn new(secret: &[u8], expiry_hours: i64, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            expiry: Duration::hours(expiry_hours),
            clock,
        }
    }

    pub fn issue(&self, user_id: Uuid, email: &str) -> ApiResult<String> {
        let now = self.clock.now();
        let claims = SessionClaims {
            user_id,
            email: email.to_string(),
            exp: (now + self.expiry).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: SESSION_ISSUER.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|err| {
            tracing::error!(user_id = %user_id, error = %err, "Failed to generate token");
            ApiError::Internal("Failed to generate token".to_string())
        })
    }

    /// Recovers the claims of a token signed by this issuer.
    ///
    /// Tampered, foreign and expired tokens all fail with the same `Auth` error.
    pub fn verify(&self, token: &str) -> ApiResult<SessionClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[SESSION_ISSUER]);
        validation.validate_exp = false;
        validation.validate_nbf = false;

        let claims = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|err| {
                tracing::warn!(error = %err, "Rejected session token");
                invalid_token()
            })?
            .claims;

        let now = self.clock.now().timestamp();
        if now >= claims.exp || now < claims.nbf {
            tracing::warn!(user_id = %claims.user_id, "Rejected expired session token");
            return Err(invalid_token());
        }
        Ok(claims)
    }
}

fn invalid_token() -> ApiError {
    ApiError::Auth("Invalid or expired token".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::Utc;

    fn issuer(secret: &[u8], clock: &FixedClock) -> SessionIssuer {
        SessionIssuer::new(secret, 24, Arc::new(clock.clone()))
    }

    #[test]
    fn test_round_trip_recovers_identity() {
        let clock = FixedClock::new(Utc::now());
        let sessions = issuer(b"secret", &clock);
        let user_id = Uuid::new_v4();

        let token = sessions.issue(user_id, "a@b.com").unwrap();
        let claims = sessions.verify(&token).unwrap();

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.iss, SESSION_ISSUER);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let clock = FixedClock::new(Utc::now());
        let sessions = issuer(b"secret", &clock);
        let token = sessions.issue(Uuid::new_v4(), "a@b.com").unwrap();

        clock.advance(Duration::hours(24));

        assert_eq!(sessions.verify(&token), Err(invalid_token()));
    }

    #[test]
    fn test_tampered_or_foreign_token_is_rejected() {
        let clock = FixedClock::new(Utc::now());
        let token = issuer(b"secret", &clock).issue(Uuid::new_v4(), "a@b.com").unwrap();

        assert!(issuer(b"other-secret", &clock).verify(&token).is_err());

        let mut tampered = token.clone();
        tampered.push('x');
        assert!(issuer(b"secret", &clock).verify(&tampered).is_err());
        assert!(issuer(b"secret", &clock).verify("not-a-token").is_err());
    }
}
