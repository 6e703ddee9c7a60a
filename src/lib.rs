//! gatusgen - Gatus endpoint generation from Kubernetes manifests
//!
//! This library walks a GitOps `apps/` tree, finds the public hostnames declared
//! by ingress rules, TLS blocks, cert-manager certificates and kustomize patches,
//! filters out placeholders and registry references, and produces a Gatus
//! endpoints document with one health check per unique hostname.
//!
//! # Example Usage
//!
//! ```no_run
//! use gatusgen::{EndpointGenerator, GeneratorConfig, OutputMode, RealFileSystem, RunOutcome};
//!
//! let generator = EndpointGenerator::new(RealFileSystem::new(), GeneratorConfig::default());
//! let now = chrono::Local::now().naive_local();
//!
//! match generator.run(OutputMode::Write, now)? {
//!     RunOutcome::Generated { report, .. } => {
//!         println!("{} endpoints", report.endpoints.len());
//!     }
//!     RunOutcome::RootMissing { apps_dir } => {
//!         eprintln!("{} does not exist", apps_dir.display());
//!     }
//! }
//! # Ok::<(), gatusgen::GeneratorError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`manifest`]: reading YAML files into documents
//! - [`extractors`]: hostname extraction and the validity filter
//! - [`output`]: Gatus endpoint schema and synthesis
//! - [`pipeline`]: directory walk, deduplication and the run itself

pub mod cli;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fs;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod util;

pub use config::{ConfigError, GeneratorConfig};
pub use error::{GeneratorError, ManifestError};
pub use extractors::{extract_fqdns, is_valid_fqdn, FileContext};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use output::{Endpoint, EndpointsDocument};
pub use pipeline::{EndpointGenerator, FqdnRecord, GenerationReport, OutputMode, RunOutcome};
pub use progress::{LoggingHandler, ProgressEvent, ProgressHandler};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
