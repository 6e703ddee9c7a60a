//! FQDN extractor - recursive search for hostnames in parsed manifests

use crate::extractors::filter;
use crate::extractors::FileContext;
use serde_yaml::Value;
use tracing::trace;

const PATCH_VALUE_PREFIX: &str = "value: ";

/// Collects hostnames found anywhere in `doc`, in document order.
///
/// Duplicates within a document are kept; deduplication happens across the whole run.
pub fn extract_fqdns(doc: &Value, ctx: FileContext) -> Vec<String> {
    let mut found = Vec::new();
    walk(doc, ctx, &mut found);
    found
}

fn walk(node: &Value, ctx: FileContext, found: &mut Vec<String>) {
    match node {
        Value::Mapping(map) => {
            for (key, value) in map {
                visit_entry(key.as_str(), value, ctx, found);
            }
        }
        Value::Sequence(items) => {
            for item in items {
                walk(item, ctx, found);
            }
        }
        Value::Tagged(tagged) => walk(&tagged.value, ctx, found),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}

fn visit_entry(key: Option<&str>, value: &Value, ctx: FileContext, found: &mut Vec<String>) {
    match (key, value) {
        (Some("host" | "commonName"), Value::String(s)) => push_candidate(s, found),
        (Some("hosts" | "dnsNames"), Value::Sequence(items)) => {
            for item in items.iter().filter_map(Value::as_str) {
                push_candidate(item, found);
            }
        }
        (Some("value"), Value::String(s)) if ctx.is_kustomization => push_candidate(s, found),
        (Some("patch"), Value::String(s)) if ctx.is_kustomization => {
            for candidate in patch_values(s) {
                push_candidate(candidate, found);
            }
        }
        // JSON-patch paths such as /spec/rules/0/host
        (Some("path"), Value::String(_)) => {}
        _ => walk(value, ctx, found),
    }
}

/// The trimmed remainders of every `value: ...` line in an inline patch.
fn patch_values(patch: &str) -> impl Iterator<Item = &str> {
    patch
        .lines()
        .filter_map(|line| line.trim().strip_prefix(PATCH_VALUE_PREFIX))
        .map(str::trim)
}

fn push_candidate(candidate: &str, found: &mut Vec<String>) {
    if !is_candidate(candidate) {
        return;
    }
    match filter::check(candidate) {
        Ok(()) => found.push(candidate.to_string()),
        Err(reason) => trace!(candidate, %reason, "Rejected hostname candidate"),
    }
}

fn is_candidate(s: &str) -> bool {
    s.contains('.') && !s.starts_with("http")
}
