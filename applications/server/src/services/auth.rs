/// Authentication service - JWT access tokens
///
/// Sign-in happens elsewhere; this service only mints and checks the bearer
/// tokens the playlist API expects.
use crate::error::{Result, ServerError};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use reel_core::UserId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct AuthService {
    secret: String,
    access_token_expiration: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
    pub token_type: TokenType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
}

impl AuthService {
    pub fn new(secret: impl Into<String>, access_expiration_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiration: Duration::hours(access_expiration_hours as i64),
        }
    }

    /// Create an access token with the configured lifetime
    pub fn create_access_token(&self, user_id: &UserId) -> Result<String> {
        self.create_token(user_id, self.access_token_expiration)
    }

    /// Create an access token valid for `hours`
    pub fn issue_token(&self, user_id: &UserId, hours: u64) -> Result<String> {
        if hours == 0 {
            return Err(ServerError::BadRequest(
                "Token lifetime must be at least one hour".to_string(),
            ));
        }
        self.create_token(user_id, Duration::hours(hours as i64))
    }

    /// Verify and decode a token
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
        Ok(token_data.claims)
    }

    /// Verify that a token is an access token and return its user
    pub fn verify_access_token(&self, token: &str) -> Result<UserId> {
        let claims = self.verify_token(token)?;
        if claims.token_type != TokenType::Access {
            return Err(ServerError::Auth("Invalid token type".to_string()));
        }
        if claims.sub.is_empty() {
            return Err(ServerError::Auth("Token has no subject".to_string()));
        }
        Ok(UserId::new(claims.sub))
    }

    fn create_token(&self, user_id: &UserId, expiration: Duration) -> Result<String> {
        let now = Utc::now();
        let exp = now + expiration;

        let claims = Claims {
            sub: user_id.as_str().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            token_type: TokenType::Access,
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key).map_err(ServerError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation_and_verification() {
        let auth = AuthService::new("secret", 24);
        let user_id = UserId::new("user-123");

        let access_token = auth.create_access_token(&user_id).unwrap();
        let verified_id = auth.verify_access_token(&access_token).unwrap();
        assert_eq!(verified_id, user_id);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let auth = AuthService::new("secret", 24);
        let other = AuthService::new("other-secret", 24);

        let token = auth.create_access_token(&UserId::new("u1")).unwrap();
        assert!(matches!(
            other.verify_access_token(&token),
            Err(ServerError::Jwt(_))
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let auth = AuthService::new("secret", 24);
        assert!(auth.verify_access_token("not.a.token").is_err());
    }

    #[test]
    fn test_issue_token_lifetime() {
        let auth = AuthService::new("secret", 24);

        let token = auth.issue_token(&UserId::new("u1"), 2).unwrap();
        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 2 * 3600);

        assert!(auth.issue_token(&UserId::new("u1"), 0).is_err());
    }
}
