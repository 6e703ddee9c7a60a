use super::records::{app_name_for, dedup_and_sort, FqdnRecord};
use super::scanner::ManifestScanner;
use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, ManifestError};
use crate::extractors::extract_fqdns;
use crate::fs::FileSystem;
use crate::manifest::{is_template_path, load_manifest};
use crate::output::schema::{EndpointsDocument, TIMESTAMP_FORMAT};
use crate::output::synthesize_endpoint;
use crate::progress::{ProgressEvent, ProgressHandler};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// What the run does with the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Write,
    DryRun,
}

/// Result of walking the manifest tree, before deduplication.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Every accepted hostname in traversal order, duplicates included.
    pub records: Vec<FqdnRecord>,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub apps_dir: PathBuf,
    /// `None` for dry runs.
    pub output_path: Option<PathBuf>,
    pub generated_at: String,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub fqdns_found: usize,
    pub endpoints: Vec<FqdnRecord>,
}

#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The apps directory does not exist; nothing was generated.
    RootMissing { apps_dir: PathBuf },
    Generated {
        report: GenerationReport,
        document: EndpointsDocument,
    },
}

pub struct EndpointGenerator<F: FileSystem> {
    fs: F,
    config: GeneratorConfig,
    progress_handler: Option<Arc<dyn ProgressHandler>>,
}

impl<F: FileSystem> EndpointGenerator<F> {
    pub fn new(fs: F, config: GeneratorConfig) -> Self {
        Self {
            fs,
            config,
            progress_handler: None,
        }
    }

    pub fn with_progress_handler(mut self, handler: Arc<dyn ProgressHandler>) -> Self {
        self.progress_handler = Some(handler);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Walks the apps directory and collects every accepted hostname.
    ///
    /// Returns `Ok(None)` when the apps directory does not exist.
    pub fn scan(&self) -> Result<Option<ScanResult>, GeneratorError> {
        let apps_dir = &self.config.apps_dir;
        if !self.fs.is_dir(apps_dir) {
            self.emit(ProgressEvent::RootMissing {
                apps_dir: apps_dir.display().to_string(),
            });
            return Ok(None);
        }

        self.emit(ProgressEvent::Started {
            apps_dir: apps_dir.display().to_string(),
        });

        let scanner = ManifestScanner::new(&self.fs, apps_dir, &self.config.include_patterns)?;
        let mut result = ScanResult::default();

        for path in scanner.scan() {
            if is_template_path(apps_dir, &path) {
                result.files_skipped += 1;
                self.emit(ProgressEvent::FileSkipped {
                    path: path.display().to_string(),
                });
                continue;
            }

            match self.scan_file(&path) {
                Ok((documents, records)) => {
                    result.files_scanned += 1;
                    self.emit(ProgressEvent::FileScanned {
                        path: path.display().to_string(),
                        documents,
                        fqdns: records.len(),
                    });
                    result.records.extend(records);
                }
                Err(err) => {
                    result.files_failed += 1;
                    self.emit(ProgressEvent::FileFailed {
                        path: path.display().to_string(),
                        error: err.to_string(),
                    });
                }
            }
        }

        Ok(Some(result))
    }

    fn scan_file(&self, path: &Path) -> Result<(usize, Vec<FqdnRecord>), ManifestError> {
        let manifest = load_manifest(&self.fs, path)?;
        let app_name = app_name_for(&self.config.apps_dir, path);

        let records = manifest
            .documents
            .iter()
            .flat_map(|doc| extract_fqdns(doc, manifest.context))
            .map(|fqdn| {
                debug!(fqdn = %fqdn, app = %app_name, path = %path.display(), "Found FQDN");
                FqdnRecord::new(fqdn, path, app_name.clone())
            })
            .collect();

        Ok((manifest.documents.len(), records))
    }

    /// Scans, builds the endpoints document and, in `Write` mode, writes it.
    pub fn run(
        &self,
        mode: OutputMode,
        generated_at: NaiveDateTime,
    ) -> Result<RunOutcome, GeneratorError> {
        let start = Instant::now();

        let scan = match self.scan()? {
            Some(scan) => scan,
            None => {
                return Ok(RunOutcome::RootMissing {
                    apps_dir: self.config.apps_dir.clone(),
                })
            }
        };

        let fqdns_found = scan.records.len();
        let unique = dedup_and_sort(scan.records);
        let document = build_document(&unique, generated_at);

        let output_path = match mode {
            OutputMode::Write => {
                self.write_document(&document)?;
                Some(self.config.output_path.clone())
            }
            OutputMode::DryRun => None,
        };

        self.emit(ProgressEvent::Completed {
            files_scanned: scan.files_scanned,
            unique_fqdns: unique.len(),
            total_time: start.elapsed(),
        });

        let report = GenerationReport {
            apps_dir: self.config.apps_dir.clone(),
            output_path,
            generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
            files_scanned: scan.files_scanned,
            files_skipped: scan.files_skipped,
            files_failed: scan.files_failed,
            fqdns_found,
            endpoints: unique,
        };

        Ok(RunOutcome::Generated { report, document })
    }

    fn write_document(&self, document: &EndpointsDocument) -> Result<(), GeneratorError> {
        let yaml = serde_yaml::to_string(document)?;
        let path = &self.config.output_path;

        self.fs
            .write(path, &yaml)
            .map_err(|reason| GeneratorError::Write {
                path: path.clone(),
                reason,
            })?;

        self.emit(ProgressEvent::OutputWritten {
            path: path.display().to_string(),
            endpoints: document.endpoints.len(),
        });
        Ok(())
    }

    fn emit(&self, event: ProgressEvent) {
        if let Some(handler) = &self.progress_handler {
            handler.on_progress(&event);
        }
    }
}

/// One endpoint per record, in record order.
pub fn build_document(records: &[FqdnRecord], generated_at: NaiveDateTime) -> EndpointsDocument {
    let endpoints = records
        .iter()
        .map(|record| synthesize_endpoint(&record.fqdn))
        .collect();
    EndpointsDocument::new(generated_at, endpoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::progress::LoggingHandler;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<ProgressEvent>>,
    }

    impl ProgressHandler for RecordingHandler {
        fn on_progress(&self, event: &ProgressEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    fn config() -> GeneratorConfig {
        GeneratorConfig {
            apps_dir: PathBuf::from("apps"),
            output_path: PathBuf::from("gatus-endpoints.yml"),
            include_patterns: vec!["**/*.yaml".to_string(), "**/*.yml".to_string()],
            log_level: "info".to_string(),
        }
    }

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_micro_opt(12, 0, 0, 0)
            .unwrap()
    }

    fn fixture_fs() -> MockFileSystem {
        let fs = MockFileSystem::new();
        fs.add_file(
            "apps/wiki/base/ingress.yaml",
            r#"
apiVersion: networking.k8s.io/v1
kind: Ingress
spec:
  tls:
    - hosts:
        - wiki.cedille.club
  rules:
    - host: wiki.cedille.club
      http:
        paths:
          - path: /
"#,
        );
        fs.add_file(
            "apps/wiki/prod/kustomization.yaml",
            r#"
resources:
  - ../base
patches:
  - patch: |-
      - op: replace
        path: /spec/rules/0/host
        value: wiki.prodv2.cedille.club
"#,
        );
        fs.add_file(
            "apps/wiki/chart/templates/ingress.yaml",
            "host: {{ .Values.host }}\n",
        );
        fs.add_file("apps/api/base/broken.yaml", "host: [unclosed\n");
        fs.add_file(
            "apps/api/base/certificate.yml",
            r#"
kind: Certificate
spec:
  commonName: api.cedille.club
  dnsNames:
    - api.cedille.club
    - wiki.cedille.club
"#,
        );
        fs
    }

    #[test]
    fn test_scan_collects_records_in_traversal_order() {
        let generator = EndpointGenerator::new(fixture_fs(), config());
        let scan = generator.scan().unwrap().unwrap();

        let fqdns: Vec<&str> = scan.records.iter().map(|r| r.fqdn.as_str()).collect();
        assert_eq!(
            fqdns,
            vec![
                "wiki.cedille.club",
                "wiki.cedille.club",
                "wiki.prodv2.cedille.club",
                "api.cedille.club",
                "api.cedille.club",
                "wiki.cedille.club",
            ]
        );
        assert_eq!(scan.files_scanned, 3);
        assert_eq!(scan.files_skipped, 1);
        assert_eq!(scan.files_failed, 1);
    }

    #[test]
    fn test_run_dedups_sorts_and_writes() {
        let generator = EndpointGenerator::new(fixture_fs(), config());
        let outcome = generator.run(OutputMode::Write, timestamp()).unwrap();

        let (report, document) = match outcome {
            RunOutcome::Generated { report, document } => (report, document),
            other => panic!("unexpected outcome: {:?}", other),
        };

        let fqdns: Vec<&str> = report.endpoints.iter().map(|r| r.fqdn.as_str()).collect();
        assert_eq!(
            fqdns,
            vec![
                "api.cedille.club",
                "wiki.cedille.club",
                "wiki.prodv2.cedille.club"
            ]
        );
        assert_eq!(report.fqdns_found, 6);
        assert_eq!(report.output_path, Some(PathBuf::from("gatus-endpoints.yml")));

        let wiki = &report.endpoints[1];
        assert_eq!(wiki.source_file, PathBuf::from("apps/wiki/base/ingress.yaml"));
        assert_eq!(wiki.app_name, "wiki");

        let names: Vec<&str> = document.endpoints.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["api", "wiki", "wiki-prod"]);

        let written = generator
            .file_system()
            .contents("gatus-endpoints.yml")
            .unwrap();
        assert_eq!(written, document.to_yaml().unwrap());
        assert!(written.contains("Generated on 2026-10-16T12:00:00.000000"));
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let generator = EndpointGenerator::new(fixture_fs(), config());
        let outcome = generator.run(OutputMode::DryRun, timestamp()).unwrap();

        match outcome {
            RunOutcome::Generated { report, .. } => assert!(report.output_path.is_none()),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(generator
            .file_system()
            .contents("gatus-endpoints.yml")
            .is_none());
    }

    #[test]
    fn test_missing_root_writes_nothing() {
        let handler = Arc::new(RecordingHandler::default());
        let generator = EndpointGenerator::new(MockFileSystem::new(), config())
            .with_progress_handler(handler.clone());

        let outcome = generator.run(OutputMode::Write, timestamp()).unwrap();

        assert!(matches!(outcome, RunOutcome::RootMissing { .. }));
        assert!(generator
            .file_system()
            .contents("gatus-endpoints.yml")
            .is_none());
        let events = handler.events.lock().unwrap();
        assert!(matches!(events.as_slice(), [ProgressEvent::RootMissing { .. }]));
    }

    #[test]
    fn test_no_fqdns_still_writes_empty_document() {
        let fs = MockFileSystem::new();
        fs.add_file("apps/db/base/statefulset.yaml", "kind: StatefulSet\n");

        let generator = EndpointGenerator::new(fs, config());
        let outcome = generator.run(OutputMode::Write, timestamp()).unwrap();

        match outcome {
            RunOutcome::Generated { report, document } => {
                assert!(report.endpoints.is_empty());
                assert!(document.endpoints.is_empty());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        let written = generator
            .file_system()
            .contents("gatus-endpoints.yml")
            .unwrap();
        assert!(written.contains("endpoints: []"));
    }

    #[test]
    fn test_template_directory_ignored_even_when_valid() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "apps/wiki/templates/ingress.yaml",
            "spec:\n  rules:\n    - host: valid.cedille.club\n",
        );

        let generator = EndpointGenerator::new(fs, config());
        let scan = generator.scan().unwrap().unwrap();

        assert!(scan.records.is_empty());
        assert_eq!(scan.files_skipped, 1);
        assert_eq!(scan.files_scanned, 0);
    }

    #[test]
    fn test_apps_dir_below_templates_directory_is_scanned() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "templates/gitops/apps/wiki/base/ingress.yaml",
            "spec:\n  rules:\n    - host: valid.cedille.club\n",
        );
        fs.add_file(
            "templates/gitops/apps/wiki/templates/ingress.yaml",
            "spec:\n  rules:\n    - host: chart.cedille.club\n",
        );

        let generator = EndpointGenerator::new(
            fs,
            GeneratorConfig {
                apps_dir: PathBuf::from("templates/gitops/apps"),
                ..config()
            },
        );
        let scan = generator.scan().unwrap().unwrap();

        let fqdns: Vec<&str> = scan.records.iter().map(|r| r.fqdn.as_str()).collect();
        assert_eq!(fqdns, vec!["valid.cedille.club"]);
        assert_eq!(scan.files_scanned, 1);
        assert_eq!(scan.files_skipped, 1);
        assert_eq!(scan.records[0].app_name, "wiki");
    }

    #[test]
    fn test_repeated_keys_do_not_drop_file() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "apps/dup/ingress.yaml",
            "metadata:\n  name: a\n  name: b\nspec:\n  rules:\n    - host: dup.cedille.club\n",
        );

        let generator = EndpointGenerator::new(fs, config());
        let scan = generator.scan().unwrap().unwrap();

        assert_eq!(scan.files_failed, 0);
        assert_eq!(scan.records.len(), 1);
        assert_eq!(scan.records[0].fqdn, "dup.cedille.club");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let fs = fixture_fs();
        let generator = EndpointGenerator::new(
            fs,
            GeneratorConfig {
                output_path: PathBuf::from("missing-dir/out.yml"),
                ..config()
            },
        );

        let err = generator.run(OutputMode::Write, timestamp()).unwrap_err();
        assert!(matches!(err, GeneratorError::Write { .. }));
    }

    #[test]
    fn test_progress_events_sequence() {
        let handler = Arc::new(RecordingHandler::default());
        let generator =
            EndpointGenerator::new(fixture_fs(), config()).with_progress_handler(handler.clone());

        generator.run(OutputMode::Write, timestamp()).unwrap();

        let events = handler.events.lock().unwrap();
        assert!(matches!(events.first(), Some(ProgressEvent::Started { .. })));
        assert!(matches!(
            events.last(),
            Some(ProgressEvent::Completed {
                files_scanned: 3,
                unique_fqdns: 3,
                ..
            })
        ));
        assert!(events
            .iter()
            .any(|e| matches!(e, ProgressEvent::FileFailed { path, .. } if path.ends_with("broken.yaml"))));
        assert!(events
            .iter()
            .any(|e| matches!(e, ProgressEvent::OutputWritten { endpoints: 3, .. })));
    }

    #[test]
    fn test_with_logging_handler() {
        let generator = EndpointGenerator::new(fixture_fs(), config())
            .with_progress_handler(Arc::new(LoggingHandler));
        assert!(generator.run(OutputMode::DryRun, timestamp()).is_ok());
    }

    #[test]
    fn test_build_document_preserves_record_order() {
        let records = vec![
            FqdnRecord::new("a.cedille.club", "apps/a/ingress.yaml", "a"),
            FqdnRecord::new("b.prodv2.cedille.club", "apps/b/ingress.yaml", "b"),
        ];
        let document = build_document(&records, timestamp());

        assert_eq!(document.endpoints.len(), 2);
        assert_eq!(document.endpoints[0].url, "https://a.cedille.club");
        assert_eq!(document.endpoints[1].name, "b-prod");
    }
}
