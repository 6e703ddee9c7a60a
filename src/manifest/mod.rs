//! Manifest loading: reading YAML files into parsed documents

mod document;
mod loader;

pub use document::LenientValue;
pub use loader::{is_template_path, load_manifest, parse_documents, Manifest};
