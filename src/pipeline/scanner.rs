use crate::error::GeneratorError;
use crate::fs::FileSystem;
use globset::{Glob, GlobMatcher};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Enumerates manifest files under the apps directory.
///
/// Each include pattern gets its own pre-order walk, in the order given. Within a
/// walk a directory's files come before its subdirectories and siblings are
/// visited in name order. A file matched by several patterns is returned once,
/// at its first position.
pub struct ManifestScanner<'a, F: FileSystem> {
    fs: &'a F,
    root: PathBuf,
    patterns: Vec<(String, GlobMatcher)>,
}

impl<'a, F: FileSystem> ManifestScanner<'a, F> {
    pub fn new(fs: &'a F, root: &Path, patterns: &[String]) -> Result<Self, GeneratorError> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Glob::new(pattern)
                    .map(|glob| (pattern.clone(), glob.compile_matcher()))
                    .map_err(|source| GeneratorError::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            fs,
            root: root.to_path_buf(),
            patterns,
        })
    }

    pub fn scan(&self) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for (pattern, matcher) in &self.patterns {
            let mut matched = Vec::new();
            self.walk(&self.root, matcher, &mut matched);
            debug!(pattern = %pattern, matched = matched.len(), "Pattern pass complete");

            for path in matched {
                if seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        }

        files
    }

    fn walk(&self, dir: &Path, matcher: &GlobMatcher, matched: &mut Vec<PathBuf>) {
        let mut entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "Failed to read directory");
                return;
            }
        };
        entries.sort_by(|a, b| a.path().file_name().cmp(&b.path().file_name()));

        let mut subdirs = Vec::new();
        for entry in &entries {
            // The entry's own name, not the lossy display name.
            let path = match entry.path().file_name() {
                Some(name) => dir.join(name),
                None => continue,
            };
            if entry.is_dir() {
                subdirs.push(path);
            } else if entry.is_file() && self.matches(matcher, &path) {
                matched.push(path);
            }
        }

        for subdir in subdirs {
            self.walk(&subdir, matcher, matched);
        }
    }

    fn matches(&self, matcher: &GlobMatcher, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        matcher.is_match(relative)
    }
}
