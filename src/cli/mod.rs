use anyhow::bail;
use warden_auth::create_access_token;
use warden_config::JwtConfig;
use warden_core::{GuardIdentity, NameSet};

use crate::gate::{GuardCheck, GuardSpec};

/// Identity of the guard that `route_needs_*` would register for these sets.
///
/// Roles only gives a role guard, permissions only a permission guard, and
/// both a combined guard.
pub fn guard_identity(
    route: &str,
    roles: Vec<String>,
    permissions: Vec<String>,
) -> anyhow::Result<GuardIdentity> {
    let check = match (roles.is_empty(), permissions.is_empty()) {
        (true, true) => bail!("at least one role or permission is required"),
        (false, true) => GuardCheck::Role(NameSet::from(roles)),
        (true, false) => GuardCheck::Permission(NameSet::from(permissions)),
        (false, false) => GuardCheck::RoleOrPermission {
            roles: NameSet::from(roles),
            permissions: NameSet::from(permissions),
        },
    };

    let spec: GuardSpec<()> = GuardSpec::new(route, check, None, false);
    Ok(spec.identity())
}

pub fn issue_token(
    subject: &str,
    email: &str,
    roles: Vec<String>,
    permissions: Vec<String>,
    jwt_config: &JwtConfig,
) -> anyhow::Result<String> {
    Ok(create_access_token(
        subject,
        email,
        roles,
        permissions,
        jwt_config,
    )?)
}
