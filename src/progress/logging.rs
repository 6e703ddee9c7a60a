//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, error, info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { apps_dir } => {
                info!(apps_dir = %apps_dir, "Scanning manifests");
            }
            ProgressEvent::RootMissing { apps_dir } => {
                error!(apps_dir = %apps_dir, "Apps directory does not exist");
            }
            ProgressEvent::FileScanned {
                path,
                documents,
                fqdns,
            } => {
                info!(path = %path, documents, fqdns, "Analyzed file");
            }
            ProgressEvent::FileSkipped { path } => {
                debug!(path = %path, "Skipping Helm template");
            }
            ProgressEvent::FileFailed { path, error } => {
                warn!(path = %path, error = %error, "Failed to load manifest");
            }
            ProgressEvent::OutputWritten { path, endpoints } => {
                info!(path = %path, endpoints, "Wrote endpoints file");
            }
            ProgressEvent::Completed {
                files_scanned,
                unique_fqdns,
                total_time,
            } => {
                if *unique_fqdns == 0 {
                    warn!(
                        files_scanned,
                        "No valid FQDN found; check that ingress manifests declare public hosts"
                    );
                }
                info!(
                    files_scanned,
                    unique_fqdns,
                    total_time_ms = total_time.as_millis(),
                    "Generation complete"
                );
            }
        }
    }
}
