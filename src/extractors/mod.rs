// Hostname extraction from parsed manifests
//
// The extractor walks YAML documents looking for keys that carry hostnames
// (ingress rules, TLS blocks, certificates, kustomize patches) and passes every
// candidate through the validity filter.

pub mod context;
pub mod filter;
pub mod fqdn;

pub use context::FileContext;
pub use filter::{is_valid_fqdn, Rejection};
pub use fqdn::extract_fqdns;
