//! Progress handler trait and events

use std::time::Duration;

/// Events emitted while a generation run walks the manifest tree
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Run started
    Started { apps_dir: String },

    /// Apps directory does not exist; nothing will be written
    RootMissing { apps_dir: String },

    /// A manifest was read and searched
    FileScanned {
        path: String,
        documents: usize,
        fqdns: usize,
    },

    /// A manifest was skipped without being parsed (Helm template)
    FileSkipped { path: String },

    /// A manifest could not be read or parsed
    FileFailed { path: String, error: String },

    /// Output document written
    OutputWritten { path: String, endpoints: usize },

    /// Run completed
    Completed {
        files_scanned: usize,
        unique_fqdns: usize,
        total_time: Duration,
    },
}

/// Trait for handling progress events during a run
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}
