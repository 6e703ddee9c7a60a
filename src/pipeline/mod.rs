//! Generation pipeline: walk, extract, deduplicate, synthesize, write

pub mod orchestrator;
pub mod records;
pub mod scanner;

pub use orchestrator::{
    build_document, EndpointGenerator, GenerationReport, OutputMode, RunOutcome, ScanResult,
};
pub use records::{app_name_for, dedup_and_sort, FqdnRecord};
pub use scanner::ManifestScanner;
