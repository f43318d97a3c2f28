use thiserror::Error;
use warden_core::AppError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid or expired token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("Failed to create token")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),

    #[error("Invalid access token expiry: {0} seconds")]
    InvalidExpiry(i64),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken(_) => AppError::unauthorized(err),
            AuthError::TokenCreation(_) | AuthError::InvalidExpiry(_) => AppError::internal(err),
        }
    }
}
