//! JWT claim structures for access tokens.

use serde::{Deserialize, Serialize};

/// JWT claims for access tokens.
///
/// Roles and permissions travel inside the token so that authorization
/// checks never need a lookup.
///
/// # Fields
///
/// - `sub`: Subject (user) identifier
/// - `email`: User's email address
/// - `roles`: Role names held by the subject
/// - `permissions`: Permission names held by the subject
/// - `exp`: Token expiration timestamp
/// - `iat`: Token issued-at timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier (subject claim)
    pub sub: String,
    /// User's email address
    pub email: String,
    /// Role names held by the subject
    #[serde(default)]
    pub roles: Vec<String>,
    /// Permission names held by the subject
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
