//! Guard routers.
//!
//! A [`GuardRouter`] stores guard descriptors by identity and binds them to
//! route patterns. [`GuardTable`] is the in-memory router used by the axum
//! middleware.
//!
//! Route patterns use `*` as a wildcard for any run of characters, slashes
//! included. Leading and trailing slashes are ignored, so `admin/*`,
//! `/admin/*` and `/admin/*/` are the same pattern, and `/` matches the root.

use std::collections::HashMap;

use regex::Regex;
use thiserror::Error;
use tracing::debug;
use warden_core::GuardIdentity;

use crate::gate::GuardSpec;

/// Destination for route guards.
pub trait GuardRouter {
    /// Value a guard hands back instead of a 403.
    type Fallback;
    type Error;

    /// Store `spec` under `identity`, replacing any guard with that identity.
    fn register_guard(
        &mut self,
        identity: GuardIdentity,
        spec: GuardSpec<Self::Fallback>,
    ) -> Result<(), Self::Error>;

    /// Run the guard named `identity` for requests matching `pattern`.
    fn bind_guard_to_pattern(
        &mut self,
        pattern: &str,
        identity: &GuardIdentity,
    ) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum GuardTableError {
    #[error("invalid route pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("no guard registered as `{0}`")]
    UnknownGuard(GuardIdentity),
}

/// A compiled wildcard route pattern.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    raw: String,
    regex: Regex,
}

impl RoutePattern {
    pub fn new(pattern: &str) -> Result<Self, GuardTableError> {
        let expression = format!(
            "^{}$",
            regex::escape(&normalize_path(pattern)).replace(r"\*", ".*")
        );
        let regex = Regex::new(&expression).map_err(|source| GuardTableError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            raw: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(&normalize_path(path))
    }

    fn matches_normalized(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// Strip leading and trailing slashes; the root path becomes `/`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone)]
struct Binding {
    pattern: RoutePattern,
    identity: GuardIdentity,
}

/// In-memory guard router.
///
/// Filled during bootstrap, then only read.
#[derive(Debug, Clone)]
pub struct GuardTable<F> {
    guards: HashMap<GuardIdentity, GuardSpec<F>>,
    bindings: Vec<Binding>,
}

impl<F> Default for GuardTable<F> {
    fn default() -> Self {
        Self {
            guards: HashMap::new(),
            bindings: Vec::new(),
        }
    }
}

impl<F> GuardTable<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered guards.
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    pub fn get(&self, identity: &GuardIdentity) -> Option<&GuardSpec<F>> {
        self.guards.get(identity)
    }

    /// `(pattern, identity)` pairs in binding order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &GuardIdentity)> {
        self.bindings
            .iter()
            .map(|binding| (binding.pattern.as_str(), &binding.identity))
    }

    /// Guards bound to patterns matching `path`, in binding order.
    pub fn matching<'a>(
        &'a self,
        path: &str,
    ) -> impl Iterator<Item = (&'a GuardIdentity, &'a GuardSpec<F>)> + 'a {
        let path = normalize_path(path);

        self.bindings
            .iter()
            .filter(move |binding| binding.pattern.matches_normalized(&path))
            .filter_map(move |binding| {
                self.guards
                    .get(&binding.identity)
                    .map(|spec| (&binding.identity, spec))
            })
    }
}

impl<F> GuardRouter for GuardTable<F> {
    type Fallback = F;
    type Error = GuardTableError;

    fn register_guard(
        &mut self,
        identity: GuardIdentity,
        spec: GuardSpec<F>,
    ) -> Result<(), GuardTableError> {
        if self.guards.insert(identity.clone(), spec).is_some() {
            debug!(guard = %identity, "replaced existing route guard");
        }
        Ok(())
    }

    fn bind_guard_to_pattern(
        &mut self,
        pattern: &str,
        identity: &GuardIdentity,
    ) -> Result<(), GuardTableError> {
        if !self.guards.contains_key(identity) {
            return Err(GuardTableError::UnknownGuard(identity.clone()));
        }

        let already_bound = self
            .bindings
            .iter()
            .any(|binding| &binding.identity == identity && binding.pattern.as_str() == pattern);
        if already_bound {
            debug!(guard = %identity, route = %pattern, "route guard already bound");
            return Ok(());
        }

        self.bindings.push(Binding {
            pattern: RoutePattern::new(pattern)?,
            identity: identity.clone(),
        });
        Ok(())
    }
}
