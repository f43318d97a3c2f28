//! Contracts for the authenticated principal and the component that resolves it.
//!
//! Warden does not know how users, roles or permissions are stored. It only
//! asks a [`SubjectProvider`] for the current [`Subject`] and forwards
//! boolean queries to it.

use serde::{Deserialize, Serialize};

use crate::names::NameSet;

/// Options for a combined role-and-permission ability check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityOptions {
    /// Require every listed role and every listed permission.
    /// When `false`, any single role or permission grants the ability.
    #[serde(default)]
    pub validate_all: bool,
}

impl AbilityOptions {
    pub fn validate_all() -> Self {
        Self { validate_all: true }
    }
}

/// An authenticated principal that can answer role and permission queries.
pub trait Subject {
    /// `require_all = false` means any one of `roles` suffices.
    fn has_role(&self, roles: &NameSet, require_all: bool) -> bool;

    /// `require_all = false` means any one of `permissions` suffices.
    fn has_permission(&self, permissions: &NameSet, require_all: bool) -> bool;

    fn has_ability(&self, roles: &NameSet, permissions: &NameSet, options: &AbilityOptions)
    -> bool;
}

/// Resolves the subject of the current authorization check.
///
/// `Ok(None)` means nobody is authenticated. Errors are failures of the
/// provider itself and are returned to callers untouched.
pub trait SubjectProvider {
    type Subject: Subject;
    type Error;

    fn current_subject(&self) -> Result<Option<Self::Subject>, Self::Error>;
}

impl<P: SubjectProvider + ?Sized> SubjectProvider for &P {
    type Subject = P::Subject;
    type Error = P::Error;

    fn current_subject(&self) -> Result<Option<Self::Subject>, Self::Error> {
        (**self).current_subject()
    }
}

impl<P: SubjectProvider + ?Sized> SubjectProvider for std::sync::Arc<P> {
    type Subject = P::Subject;
    type Error = P::Error;

    fn current_subject(&self) -> Result<Option<Self::Subject>, Self::Error> {
        (**self).current_subject()
    }
}
