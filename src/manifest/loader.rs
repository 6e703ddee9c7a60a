use super::document::LenientValue;
use crate::error::ManifestError;
use crate::extractors::FileContext;
use crate::fs::FileSystem;
use serde::Deserialize;
use serde_yaml::Value;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Directory name used by Helm charts for unrendered templates.
const TEMPLATES_DIR: &str = "templates";

/// A manifest file and the non-empty documents it contains.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub path: PathBuf,
    pub context: FileContext,
    pub documents: Vec<Value>,
}

/// True when a directory between `apps_dir` and the file is named `templates`.
///
/// Helm templates are full of `{{ }}` placeholders and are not valid YAML until rendered.
/// Directories above `apps_dir` are not considered.
pub fn is_template_path(apps_dir: &Path, path: &Path) -> bool {
    let relative = path.strip_prefix(apps_dir).unwrap_or(path);
    relative
        .parent()
        .map(|dir| {
            dir.components()
                .any(|c| matches!(c, Component::Normal(name) if name == TEMPLATES_DIR))
        })
        .unwrap_or(false)
}

/// Parses a (possibly multi-document) YAML stream, dropping empty documents.
///
/// A syntax error anywhere in the stream fails the whole stream. A mapping that
/// repeats a key keeps the last value.
pub fn parse_documents(content: &str, path: &Path) -> Result<Vec<Value>, ManifestError> {
    let mut documents = Vec::new();

    for document in serde_yaml::Deserializer::from_str(content) {
        let value = LenientValue::deserialize(document)
            .map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })?
            .into_inner();

        if !is_empty_document(&value) {
            documents.push(value);
        }
    }

    Ok(documents)
}

/// Reads and parses one manifest file.
pub fn load_manifest<F: FileSystem>(fs: &F, path: &Path) -> Result<Manifest, ManifestError> {
    let content = fs
        .read_to_string(path)
        .map_err(|reason| ManifestError::Read {
            path: path.to_path_buf(),
            reason,
        })?;

    let documents = parse_documents(&content, path)?;
    let context = FileContext::from_path(path);

    debug!(
        path = %path.display(),
        documents = documents.len(),
        ingress = context.is_ingress,
        kustomization = context.is_kustomization,
        "Loaded manifest"
    );

    Ok(Manifest {
        path: path.to_path_buf(),
        context,
        documents,
    })
}

fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Mapping(map) => map.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
