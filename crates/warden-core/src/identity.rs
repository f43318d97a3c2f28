//! Guard identity derivation.
//!
//! A guard identity names a route guard inside the guard router. It is built
//! from the guard's name set(s) followed by a short digest of the route
//! pattern, e.g. `editor_edit_delete_3f9a1c`.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::names::NameSet;

/// Separator used between names and between identity segments.
pub const IDENTITY_SEPARATOR: &str = "_";

/// Number of hex characters of the route digest kept in an identity.
pub const ROUTE_DIGEST_LEN: usize = 6;

/// Deterministic name of a route guard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuardIdentity(String);

impl GuardIdentity {
    /// Derive the identity for a guard over `name_sets` bound to `route`.
    ///
    /// The name sets are joined in the order given, so a combined guard
    /// passes roles first and permissions second.
    pub fn derive(name_sets: &[&NameSet], route: &str) -> Self {
        let mut segments: Vec<String> = name_sets
            .iter()
            .map(|names| names.join(IDENTITY_SEPARATOR))
            .collect();
        segments.push(route_digest(route));

        GuardIdentity(segments.join(IDENTITY_SEPARATOR))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing route digest segment.
    ///
    /// At most [`ROUTE_DIGEST_LEN`] characters; shorter identities are
    /// returned whole.
    pub fn route_digest(&self) -> &str {
        let start = self
            .0
            .char_indices()
            .rev()
            .nth(ROUTE_DIGEST_LEN - 1)
            .map_or(0, |(index, _)| index);
        &self.0[start..]
    }
}

impl fmt::Display for GuardIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GuardIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// First [`ROUTE_DIGEST_LEN`] lowercase hex characters of the SHA-256 of `route`.
pub fn route_digest(route: &str) -> String {
    let digest = Sha256::digest(route.as_bytes());
    let mut encoded = hex::encode(digest);
    encoded.truncate(ROUTE_DIGEST_LEN);
    encoded
}
