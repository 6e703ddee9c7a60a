//! File-level context for extractor operations

use std::path::Path;

/// Flags derived from a manifest's file name.
///
/// Extraction rules consult these to enable keys that only carry hostnames in
/// specific kinds of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileContext {
    /// File name contains `ingress.yaml`. Carried for diagnostics; no rule depends on it.
    pub is_ingress: bool,

    /// File name contains `kustomization.yaml`; enables `value` and `patch` keys.
    pub is_kustomization: bool,
}

impl FileContext {
    pub fn new(is_ingress: bool, is_kustomization: bool) -> Self {
        Self {
            is_ingress,
            is_kustomization,
        }
    }

    /// Derive the context from the file's base name (case-insensitive substring match).
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        Self {
            is_ingress: name.contains("ingress.yaml"),
            is_kustomization: name.contains("kustomization.yaml"),
        }
    }
}
