//! [`Subject`] implementation backed by access token claims.

use std::collections::BTreeMap;

use serde::Serialize;
use warden_core::{AbilityOptions, NameSet, Subject};

use crate::claims::Claims;

/// The authenticated subject described by a verified access token.
#[derive(Debug, Clone)]
pub struct ClaimsSubject(pub Claims);

/// Per-name breakdown of an ability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbilityReport {
    pub granted: bool,
    pub roles: BTreeMap<String, bool>,
    pub permissions: BTreeMap<String, bool>,
}

impl ClaimsSubject {
    pub fn claims(&self) -> &Claims {
        &self.0
    }

    pub fn holds_role(&self, role: &str) -> bool {
        self.0.roles.iter().any(|r| r == role)
    }

    pub fn holds_permission(&self, permission: &str) -> bool {
        self.0.permissions.iter().any(|p| p == permission)
    }

    /// Check every listed role and permission and report each result.
    ///
    /// With `validate_all` the ability is granted only when every entry
    /// holds; otherwise a single holding entry is enough.
    pub fn ability_report(
        &self,
        roles: &NameSet,
        permissions: &NameSet,
        options: &AbilityOptions,
    ) -> AbilityReport {
        let roles: BTreeMap<String, bool> = roles
            .iter()
            .map(|role| (role.to_string(), self.holds_role(role)))
            .collect();
        let permissions: BTreeMap<String, bool> = permissions
            .iter()
            .map(|permission| (permission.to_string(), self.holds_permission(permission)))
            .collect();

        let mut results = roles.values().chain(permissions.values());
        let granted = if options.validate_all {
            results.all(|held| *held)
        } else {
            results.any(|held| *held)
        };

        AbilityReport {
            granted,
            roles,
            permissions,
        }
    }
}

impl Subject for ClaimsSubject {
    fn has_role(&self, roles: &NameSet, require_all: bool) -> bool {
        roles.check(require_all, |role| self.holds_role(role))
    }

    fn has_permission(&self, permissions: &NameSet, require_all: bool) -> bool {
        permissions.check(require_all, |permission| self.holds_permission(permission))
    }

    fn has_ability(
        &self,
        roles: &NameSet,
        permissions: &NameSet,
        options: &AbilityOptions,
    ) -> bool {
        self.ability_report(roles, permissions, options).granted
    }
}

impl From<Claims> for ClaimsSubject {
    fn from(claims: Claims) -> Self {
        ClaimsSubject(claims)
    }
}
