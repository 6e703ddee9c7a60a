//! Discovered hostnames and their provenance

use serde::Serialize;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Overlay directories that belong to the parent app rather than naming a sub-app.
const OVERLAY_DIRS: &[&str] = &["base", "prod"];

const UNKNOWN_APP: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FqdnRecord {
    pub fqdn: String,
    pub source_file: PathBuf,
    pub app_name: String,
}

impl FqdnRecord {
    pub fn new(
        fqdn: impl Into<String>,
        source_file: impl Into<PathBuf>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            fqdn: fqdn.into(),
            source_file: source_file.into(),
            app_name: app_name.into(),
        }
    }

    /// File name of the source manifest, for compact display.
    pub fn source_name(&self) -> String {
        self.source_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.source_file.display().to_string())
    }
}

/// Names the app a manifest belongs to from its location under `apps_dir`.
///
/// `apps/<app>/...` gives `<app>`; when the next segment is not an overlay
/// directory it is appended (`apps/dronolab/webApp/...` gives `dronolab-webApp`).
/// The next segment may be the file name itself.
pub fn app_name_for(apps_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(apps_dir).unwrap_or(path);
    let mut segments = relative.components().filter_map(|c| match c {
        Component::Normal(name) => Some(name.to_string_lossy()),
        _ => None,
    });

    match (segments.next(), segments.next()) {
        (Some(app), Some(sub)) if !OVERLAY_DIRS.iter().any(|dir| sub == *dir) => {
            format!("{}-{}", app, sub)
        }
        (Some(app), _) => app.to_string(),
        (None, _) => UNKNOWN_APP.to_string(),
    }
}

/// Keeps the first record seen for each FQDN, then orders by FQDN.
pub fn dedup_and_sort(records: Vec<FqdnRecord>) -> Vec<FqdnRecord> {
    let mut seen = HashSet::new();
    let mut unique: Vec<FqdnRecord> = records
        .into_iter()
        .filter(|record| seen.insert(record.fqdn.clone()))
        .collect();

    unique.sort_by(|a, b| a.fqdn.cmp(&b.fqdn));
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        base_overlay = { "apps/wiki/base/ingress.yaml", "wiki" },
        prod_overlay = { "apps/wiki/prod/kustomization.yaml", "wiki" },
        sub_app = { "apps/dronolab/webApp/ingress.yaml", "dronolab-webApp" },
        sub_app_overlay = { "apps/dronolab/webApp/prod/ingress.yaml", "dronolab-webApp" },
        file_under_app = { "apps/wiki/ingress.yaml", "wiki-ingress.yaml" },
        file_under_root = { "apps/values.yaml", "values.yaml" },
    )]
    fn test_app_name_for(path: &str, expected: &str) {
        assert_eq!(app_name_for(Path::new("apps"), Path::new(path)), expected);
    }

    #[test]
    fn test_app_name_for_nested_root() {
        let name = app_name_for(
            Path::new("/srv/gitops/apps"),
            Path::new("/srv/gitops/apps/grafana/base/ingress.yaml"),
        );
        assert_eq!(name, "grafana");
    }

    #[test]
    fn test_app_name_for_root_itself() {
        assert_eq!(app_name_for(Path::new("apps"), Path::new("apps")), "unknown");
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let records = vec![
            FqdnRecord::new("wiki.cedille.club", "apps/wiki/base/ingress.yaml", "wiki"),
            FqdnRecord::new("api.cedille.club", "apps/api/base/ingress.yaml", "api"),
            FqdnRecord::new("wiki.cedille.club", "apps/legacy/ingress.yaml", "legacy-ingress.yaml"),
        ];

        let unique = dedup_and_sort(records);

        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].fqdn, "api.cedille.club");
        assert_eq!(unique[1].fqdn, "wiki.cedille.club");
        assert_eq!(unique[1].app_name, "wiki");
        assert_eq!(
            unique[1].source_file,
            PathBuf::from("apps/wiki/base/ingress.yaml")
        );
    }

    #[test]
    fn test_sort_is_bytewise() {
        let records = vec![
            FqdnRecord::new("b.cedille.club", "x", "x"),
            FqdnRecord::new("B.cedille.club", "x", "x"),
            FqdnRecord::new("a.cedille.club", "x", "x"),
        ];

        let fqdns: Vec<String> = dedup_and_sort(records).into_iter().map(|r| r.fqdn).collect();
        assert_eq!(fqdns, vec!["B.cedille.club", "a.cedille.club", "b.cedille.club"]);
    }

    #[test]
    fn test_source_name() {
        let record = FqdnRecord::new("a.b.c", "apps/wiki/base/ingress.yaml", "wiki");
        assert_eq!(record.source_name(), "ingress.yaml");
    }
}
