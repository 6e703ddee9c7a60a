use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning a single manifest file into documents.
///
/// These never abort a run: the pipeline logs them and moves on to the next file.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read {path:?}: {reason:#}")]
    Read { path: PathBuf, reason: anyhow::Error },

    #[error("Failed to parse YAML in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ManifestError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ManifestError::Read { path, .. } | ManifestError::Parse { path, .. } => path,
        }
    }
}

/// Failures that stop a generation run.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid include pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to serialize endpoints document: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Failed to write {path:?}: {reason:#}")]
    Write { path: PathBuf, reason: anyhow::Error },
}
