//! The authorization gate.
//!
//! [`AuthorizationGate`] answers role, permission and ability questions about
//! the current subject, and registers route guards with a [`GuardRouter`].
//!
//! Guards are plain [`GuardSpec`] descriptors. The router stores them and
//! the host calls [`AuthorizationGate::evaluate`] for each guard bound to the
//! request path.
//!
//! # Example
//!
//! ```ignore
//! use warden::gate::AuthorizationGate;
//! use warden::guards::GuardTable;
//!
//! let mut gate = AuthorizationGate::new(provider, GuardTable::<&str>::new());
//!
//! // Only admins may reach admin/*; everybody else gets a 403.
//! gate.route_needs_role("admin/*", "admin", None, true)?;
//!
//! // Editors, or anyone who can edit or delete, may reach posts/*.
//! gate.route_needs_role_or_permission(
//!     "posts/*",
//!     "editor",
//!     ["edit", "delete"],
//!     Some("/denied"),
//!     false,
//! )?;
//! ```

use tracing::{debug, info, warn};
use warden_core::{AbilityOptions, GuardIdentity, NameSet, Subject, SubjectProvider};

use crate::guards::GuardRouter;

/// Default `require_all` for role-only and permission-only guards.
pub const DEFAULT_REQUIRE_ALL: bool = true;

/// Default `require_all` for combined role-or-permission guards: one passing
/// check lets the request through.
pub const DEFAULT_COMBINED_REQUIRE_ALL: bool = false;

/// Value a failing guard hands back instead of a 403.
///
/// An empty value counts as no fallback at all.
pub trait FallbackResult {
    fn is_empty(&self) -> bool;
}

impl FallbackResult for &str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl FallbackResult for String {
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

/// What a guard checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardCheck {
    Role(NameSet),
    Permission(NameSet),
    /// Roles and permissions, joined with AND when the guard requires all,
    /// otherwise with OR.
    RoleOrPermission {
        roles: NameSet,
        permissions: NameSet,
    },
}

impl GuardCheck {
    pub fn evaluate<S: Subject + ?Sized>(&self, subject: &S, require_all: bool) -> bool {
        match self {
            GuardCheck::Role(roles) => subject.has_role(roles, require_all),
            GuardCheck::Permission(permissions) => subject.has_permission(permissions, require_all),
            GuardCheck::RoleOrPermission { roles, permissions } => {
                let has_role = subject.has_role(roles, require_all);
                let has_permission = subject.has_permission(permissions, require_all);

                if require_all {
                    has_role && has_permission
                } else {
                    has_role || has_permission
                }
            }
        }
    }

    fn name_sets(&self) -> Vec<&NameSet> {
        match self {
            GuardCheck::Role(roles) => vec![roles],
            GuardCheck::Permission(permissions) => vec![permissions],
            GuardCheck::RoleOrPermission { roles, permissions } => vec![roles, permissions],
        }
    }
}

/// Immutable description of a route guard.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardSpec<F> {
    pattern: String,
    check: GuardCheck,
    fallback: Option<F>,
    require_all: bool,
}

impl<F> GuardSpec<F> {
    pub fn new(
        pattern: impl Into<String>,
        check: GuardCheck,
        fallback: Option<F>,
        require_all: bool,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            check,
            fallback,
            require_all,
        }
    }

    /// Role-only guard, requiring all roles by default.
    pub fn needs_role(pattern: impl Into<String>, roles: impl Into<NameSet>) -> Self {
        Self::new(
            pattern,
            GuardCheck::Role(roles.into()),
            None,
            DEFAULT_REQUIRE_ALL,
        )
    }

    /// Permission-only guard, requiring all permissions by default.
    pub fn needs_permission(pattern: impl Into<String>, permissions: impl Into<NameSet>) -> Self {
        Self::new(
            pattern,
            GuardCheck::Permission(permissions.into()),
            None,
            DEFAULT_REQUIRE_ALL,
        )
    }

    /// Combined guard, satisfied by any role or permission by default.
    pub fn needs_role_or_permission(
        pattern: impl Into<String>,
        roles: impl Into<NameSet>,
        permissions: impl Into<NameSet>,
    ) -> Self {
        Self::new(
            pattern,
            GuardCheck::RoleOrPermission {
                roles: roles.into(),
                permissions: permissions.into(),
            },
            None,
            DEFAULT_COMBINED_REQUIRE_ALL,
        )
    }

    pub fn require_all(mut self, require_all: bool) -> Self {
        self.require_all = require_all;
        self
    }

    /// Value returned instead of a 403 when the check fails.
    pub fn fallback(mut self, fallback: F) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn check(&self) -> &GuardCheck {
        &self.check
    }

    pub fn fallback_value(&self) -> Option<&F> {
        self.fallback.as_ref()
    }

    pub fn requires_all(&self) -> bool {
        self.require_all
    }

    pub fn identity(&self) -> GuardIdentity {
        GuardIdentity::derive(&self.check.name_sets(), &self.pattern)
    }
}

/// Result of evaluating a guard for the current subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome<F> {
    /// The request continues to its handler.
    Proceed,
    /// The check failed and the guard carries a replacement result.
    Fallback(F),
    /// The check failed; the host answers with 403.
    Forbidden,
}

impl<F> GuardOutcome<F> {
    pub fn is_proceed(&self) -> bool {
        matches!(self, GuardOutcome::Proceed)
    }
}

/// Role/permission facade over a subject provider and a guard router.
#[derive(Debug, Clone)]
pub struct AuthorizationGate<P, R> {
    provider: P,
    router: R,
}

impl<P, R> AuthorizationGate<P, R> {
    pub fn new(provider: P, router: R) -> Self {
        Self { provider, router }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn into_parts(self) -> (P, R) {
        (self.provider, self.router)
    }
}

impl<P: SubjectProvider, R> AuthorizationGate<P, R> {
    /// The current subject, if anyone is authenticated.
    pub fn subject(&self) -> Result<Option<P::Subject>, P::Error> {
        self.provider.current_subject()
    }

    /// Combined role-and-permission check. `false` when nobody is authenticated.
    pub fn ability(
        &self,
        roles: impl Into<NameSet>,
        permissions: impl Into<NameSet>,
        options: &AbilityOptions,
    ) -> Result<bool, P::Error> {
        let Some(subject) = self.provider.current_subject()? else {
            return Ok(false);
        };

        Ok(subject.has_ability(&roles.into(), &permissions.into(), options))
    }

    /// Permission check. `false` when nobody is authenticated.
    ///
    /// Pass `require_all = false` to accept any one of the permissions.
    pub fn has_permission(
        &self,
        permissions: impl Into<NameSet>,
        require_all: bool,
    ) -> Result<bool, P::Error> {
        let Some(subject) = self.provider.current_subject()? else {
            return Ok(false);
        };

        Ok(subject.has_permission(&permissions.into(), require_all))
    }

    /// Role check. `false` when nobody is authenticated.
    ///
    /// Pass `require_all = false` to accept any one of the roles.
    pub fn has_role(&self, roles: impl Into<NameSet>, require_all: bool) -> Result<bool, P::Error> {
        let Some(subject) = self.provider.current_subject()? else {
            return Ok(false);
        };

        Ok(subject.has_role(&roles.into(), require_all))
    }

    /// Evaluate a guard descriptor against the current subject.
    ///
    /// The subject is resolved once per call. Provider errors are returned
    /// as is. A failing guard whose fallback is missing or empty is
    /// [`GuardOutcome::Forbidden`].
    pub fn evaluate<F>(&self, spec: &GuardSpec<F>) -> Result<GuardOutcome<F>, P::Error>
    where
        F: FallbackResult + Clone,
    {
        let subject = self.provider.current_subject()?;
        let granted = subject
            .as_ref()
            .is_some_and(|subject| spec.check.evaluate(subject, spec.require_all));

        debug!(route = %spec.pattern, granted, "route guard evaluated");

        if granted {
            return Ok(GuardOutcome::Proceed);
        }

        let fallback = spec
            .fallback
            .as_ref()
            .filter(|fallback| !FallbackResult::is_empty(*fallback));

        warn!(
            route = %spec.pattern,
            authenticated = subject.is_some(),
            fallback = fallback.is_some(),
            "route guard denied request"
        );

        Ok(match fallback {
            Some(fallback) => GuardOutcome::Fallback(fallback.clone()),
            None => GuardOutcome::Forbidden,
        })
    }
}

impl<P, R: GuardRouter> AuthorizationGate<P, R> {
    /// Register `spec` with the router and bind it to its route pattern.
    pub fn register(&mut self, spec: GuardSpec<R::Fallback>) -> Result<GuardIdentity, R::Error> {
        let identity = spec.identity();
        let pattern = spec.pattern.clone();

        self.router.register_guard(identity.clone(), spec)?;
        self.router.bind_guard_to_pattern(&pattern, &identity)?;

        info!(guard = %identity, route = %pattern, "route guard registered");
        Ok(identity)
    }

    /// Guard `pattern` with a role check.
    ///
    /// Without a fallback a failing check is answered with 403.
    pub fn route_needs_role(
        &mut self,
        pattern: &str,
        roles: impl Into<NameSet>,
        fallback: Option<R::Fallback>,
        require_all: bool,
    ) -> Result<GuardIdentity, R::Error> {
        self.register(GuardSpec::new(
            pattern,
            GuardCheck::Role(roles.into()),
            fallback,
            require_all,
        ))
    }

    /// Guard `pattern` with a permission check.
    pub fn route_needs_permission(
        &mut self,
        pattern: &str,
        permissions: impl Into<NameSet>,
        fallback: Option<R::Fallback>,
        require_all: bool,
    ) -> Result<GuardIdentity, R::Error> {
        self.register(GuardSpec::new(
            pattern,
            GuardCheck::Permission(permissions.into()),
            fallback,
            require_all,
        ))
    }

    /// Guard `pattern` with a role check and a permission check.
    ///
    /// With `require_all` both checks must pass and each requires every
    /// listed name; otherwise one passing check is enough.
    pub fn route_needs_role_or_permission(
        &mut self,
        pattern: &str,
        roles: impl Into<NameSet>,
        permissions: impl Into<NameSet>,
        fallback: Option<R::Fallback>,
        require_all: bool,
    ) -> Result<GuardIdentity, R::Error> {
        self.register(GuardSpec::new(
            pattern,
            GuardCheck::RoleOrPermission {
                roles: roles.into(),
                permissions: permissions.into(),
            },
            fallback,
            require_all,
        ))
    }
}
