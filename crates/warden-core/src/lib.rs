//! # Warden Core
//!
//! Core types, errors, and authorization contracts for Warden.
//!
//! - [`names`]: role/permission name sets with AND/OR evaluation
//! - [`identity`]: deterministic guard identities
//! - [`subject`]: the `Subject` and `SubjectProvider` contracts
//! - [`errors`]: application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use warden_core::{GuardIdentity, NameSet};
//!
//! let roles = NameSet::from("admin");
//! let identity = GuardIdentity::derive(&[&roles], "admin/*");
//! assert!(identity.as_str().starts_with("admin_"));
//! ```

pub mod errors;
pub mod identity;
pub mod names;
pub mod subject;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use identity::{GuardIdentity, route_digest};
pub use names::NameSet;
pub use subject::{AbilityOptions, Subject, SubjectProvider};
