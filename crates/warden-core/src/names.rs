//! Role and permission name sets.
//!
//! Every check in Warden accepts either a single name or a list of names.
//! [`NameSet`] captures both shapes so call sites can pass `"admin"`,
//! `["edit", "delete"]` or a `Vec<String>` interchangeably.
//!
//! # Example
//!
//! ```ignore
//! use warden_core::NameSet;
//!
//! let single = NameSet::from("admin");
//! let many = NameSet::from(["edit", "delete"]);
//!
//! assert_eq!(many.join("_"), "edit_delete");
//! assert!(many.check(false, |name| name == "edit"));
//! assert!(!many.check(true, |name| name == "edit"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single role/permission name or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameSet {
    One(String),
    Many(Vec<String>),
}

impl NameSet {
    /// Iterate over the names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let names: &[String] = match self {
            NameSet::One(name) => std::slice::from_ref(name),
            NameSet::Many(names) => names,
        };
        names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        match self {
            NameSet::One(_) => 1,
            NameSet::Many(names) => names.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Join the names with `separator`. A single name is returned as is.
    pub fn join(&self, separator: &str) -> String {
        match self {
            NameSet::One(name) => name.clone(),
            NameSet::Many(names) => names.join(separator),
        }
    }

    /// Evaluate `holds` against the set.
    ///
    /// With `require_all` every name must hold (an empty set passes);
    /// otherwise at least one name must hold (an empty set fails).
    pub fn check<P>(&self, require_all: bool, mut holds: P) -> bool
    where
        P: FnMut(&str) -> bool,
    {
        if require_all {
            self.iter().all(|name| holds(name))
        } else {
            self.iter().any(|name| holds(name))
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|n| n == name)
    }
}

impl fmt::Display for NameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(","))
    }
}

impl From<&str> for NameSet {
    fn from(name: &str) -> Self {
        NameSet::One(name.to_string())
    }
}

impl From<String> for NameSet {
    fn from(name: String) -> Self {
        NameSet::One(name)
    }
}

impl From<&String> for NameSet {
    fn from(name: &String) -> Self {
        NameSet::One(name.clone())
    }
}

impl From<Vec<String>> for NameSet {
    fn from(names: Vec<String>) -> Self {
        NameSet::Many(names)
    }
}

impl From<Vec<&str>> for NameSet {
    fn from(names: Vec<&str>) -> Self {
        NameSet::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for NameSet {
    fn from(names: &[&str]) -> Self {
        NameSet::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for NameSet {
    fn from(names: [&str; N]) -> Self {
        NameSet::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

impl From<&NameSet> for NameSet {
    fn from(names: &NameSet) -> Self {
        names.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_name_join() {
        assert_eq!(NameSet::from("admin").join("_"), "admin");
    }

    #[test]
    fn test_many_names_join_in_order() {
        let names = NameSet::from(["edit", "delete", "publish"]);
        assert_eq!(names.join("_"), "edit_delete_publish");
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_check_any() {
        let names = NameSet::from(vec!["a", "b"]);
        assert!(names.check(false, |n| n == "b"));
        assert!(!names.check(false, |n| n == "c"));
    }

    #[test]
    fn test_check_all() {
        let names = NameSet::from(vec!["a", "b"]);
        assert!(names.check(true, |n| n == "a" || n == "b"));
        assert!(!names.check(true, |n| n == "a"));
    }

    #[test]
    fn test_empty_set_semantics() {
        let names = NameSet::Many(vec![]);
        assert!(names.is_empty());
        assert!(names.check(true, |_| false));
        assert!(!names.check(false, |_| true));
    }

    #[test]
    fn test_deserialize_untagged() {
        let one: NameSet = serde_json::from_str(r#""admin""#).unwrap();
        let many: NameSet = serde_json::from_str(r#"["edit","delete"]"#).unwrap();
        assert_eq!(one, NameSet::from("admin"));
        assert_eq!(many, NameSet::from(["edit", "delete"]));
    }
}
