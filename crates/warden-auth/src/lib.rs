//! # Warden Auth
//!
//! JWT-backed subjects for Warden.
//!
//! - [`claims`]: access token claims carrying role and permission names
//! - [`jwt`]: token creation and verification
//! - [`subject`]: [`ClaimsSubject`], a `warden_core::Subject` over verified claims
//!
//! # Example
//!
//! ```ignore
//! use warden_auth::{ClaimsSubject, verify_token};
//! use warden_core::{NameSet, Subject};
//!
//! let subject = ClaimsSubject(verify_token(&token, &config)?);
//! let can_edit = subject.has_permission(&NameSet::from(["edit", "publish"]), false);
//! ```

pub mod claims;
pub mod error;
pub mod jwt;
pub mod subject;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use error::AuthError;
pub use jwt::{create_access_token, verify_token};
pub use subject::{AbilityReport, ClaimsSubject};
