//! Heuristic filter deciding whether a candidate string is a monitorable domain.
//!
//! The filter is a deny-list, not an allow-list: anything that survives the
//! rejection rules below is treated as an external endpoint.

use std::fmt;

/// Hostnames of container registries. Image references start with these.
pub const CONTAINER_REGISTRIES: &[&str] = &["ghcr.io", "docker.io", "registry.k8s.io", "quay.io"];

/// Placeholder, loopback and example patterns, matched case-insensitively anywhere.
pub const DENIED_PATTERNS: &[&str] = &[
    "example.com",
    "example.local",
    "chart-example.local",
    "localhost",
    "127.0.0.1",
    "0.0.0.0",
    ".local",
    "example.org",
    "test.com",
];

/// Why a candidate was rejected. Rules are checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmailAddress,
    ContainerRegistry(&'static str),
    DeniedPattern(&'static str),
    NotDotted,
    Templated,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::EmailAddress => write!(f, "looks like an email address"),
            Rejection::ContainerRegistry(registry) => {
                write!(f, "container registry reference ({})", registry)
            }
            Rejection::DeniedPattern(pattern) => write!(f, "matches denied pattern '{}'", pattern),
            Rejection::NotDotted => write!(f, "not a dotted name"),
            Rejection::Templated => write!(f, "contains unresolved template syntax"),
        }
    }
}

/// Runs the rejection rules against `candidate`.
pub fn check(candidate: &str) -> Result<(), Rejection> {
    if candidate.contains('@') {
        return Err(Rejection::EmailAddress);
    }

    if let Some(registry) = CONTAINER_REGISTRIES
        .iter()
        .find(|registry| candidate.starts_with(*registry))
    {
        return Err(Rejection::ContainerRegistry(*registry));
    }

    let lowered = candidate.to_lowercase();
    if let Some(pattern) = DENIED_PATTERNS
        .iter()
        .find(|pattern| lowered.contains(*pattern))
    {
        return Err(Rejection::DeniedPattern(*pattern));
    }

    if !candidate.contains('.') {
        return Err(Rejection::NotDotted);
    }

    if candidate.contains('{')
        || candidate.contains('}')
        || candidate.starts_with("{{")
        || candidate.contains("$(")
    {
        return Err(Rejection::Templated);
    }

    Ok(())
}

pub fn is_valid_fqdn(candidate: &str) -> bool {
    check(candidate).is_ok()
}
