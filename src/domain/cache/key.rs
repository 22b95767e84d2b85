//! Cache key scheme
//!
//! Keys are `{domain-prefix}:{discriminant}` for parameterised resources
//! (e.g. `demo:invoices:50`) or a fixed literal for singletons
//! (e.g. `treasury:metrics`).

use std::fmt;

/// A fully composed cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Builds `{prefix}:{discriminant}`
    pub fn scoped(prefix: &str, discriminant: impl fmt::Display) -> Self {
        Self(format!("{}:{}", prefix, discriminant))
    }

    /// Uses the given key verbatim
    pub fn fixed(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prepends a namespace, used by backends configured with a key prefix
    pub fn namespaced(namespace: Option<&str>, key: &str) -> String {
        match namespace {
            Some(ns) if !ns.is_empty() => format!("{}:{}", ns, key),
            _ => key.to_string(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
