//! Access token creation and verification.
//!
//! # Example
//!
//! ```ignore
//! use warden_auth::{create_access_token, verify_token};
//! use warden_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//!
//! let token = create_access_token(
//!     "user-42",
//!     "user@example.com",
//!     vec!["editor".to_string()],
//!     vec!["posts:edit".to_string()],
//!     &config,
//! )?;
//!
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.roles, vec!["editor".to_string()]);
//! ```

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use warden_config::JwtConfig;

use crate::claims::Claims;
use crate::error::AuthError;

/// Creates an access token carrying the subject's roles and permissions.
///
/// # Errors
///
/// Returns [`AuthError::InvalidExpiry`] if the configured expiry is negative
/// or overflows the expiration timestamp, and [`AuthError::TokenCreation`]
/// if encoding fails.
pub fn create_access_token(
    subject: &str,
    email: &str,
    roles: Vec<String>,
    permissions: Vec<String>,
    jwt_config: &JwtConfig,
) -> Result<String, AuthError> {
    let now = Utc::now().timestamp() as usize;
    let exp = usize::try_from(jwt_config.access_token_expiry)
        .ok()
        .and_then(|expiry| now.checked_add(expiry))
        .ok_or(AuthError::InvalidExpiry(jwt_config.access_token_expiry))?;

    let claims = Claims {
        sub: subject.to_string(),
        email: email.to_string(),
        roles,
        permissions,
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(AuthError::TokenCreation)
}

/// Verifies an access token and returns the embedded claims.
///
/// # Errors
///
/// Returns [`AuthError::InvalidToken`] if the signature is invalid, the token
/// has expired, or it is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(AuthError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        }
    }

    #[test]
    fn test_create_access_token_success() {
        let config = get_test_jwt_config();

        let result = create_access_token(
            "user-1",
            "test@example.com",
            vec!["admin".to_string()],
            vec![],
            &config,
        );

        assert!(result.is_ok());
        assert!(!result.unwrap().is_empty());
    }

    #[test]
    fn test_verify_token_success() {
        let config = get_test_jwt_config();

        let token = create_access_token(
            "user-1",
            "test@example.com",
            vec!["editor".to_string()],
            vec!["edit".to_string(), "delete".to_string()],
            &config,
        )
        .unwrap();

        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.roles, vec!["editor".to_string()]);
        assert_eq!(
            claims.permissions,
            vec!["edit".to_string(), "delete".to_string()]
        );
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_negative_expiry_is_rejected() {
        let config = JwtConfig {
            access_token_expiry: -1,
            ..get_test_jwt_config()
        };

        let result =
            create_access_token("user-1", "test@example.com", vec![], vec![], &config);
        assert!(matches!(result, Err(AuthError::InvalidExpiry(-1))));
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        let result = verify_token("invalid-token", &config);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token =
            create_access_token("user-1", "test@example.com", vec![], vec![], &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            access_token_expiry: 3600,
        };

        assert!(verify_token(&token, &wrong_config).is_err());
    }

    #[test]
    fn test_verify_token_expired() {
        let config = JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 0,
        };
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "user-1".to_string(),
            email: "test@example.com".to_string(),
            roles: vec![],
            permissions: vec![],
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, &config).is_err());
    }
}
