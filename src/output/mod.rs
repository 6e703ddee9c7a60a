//! Gatus endpoint document: schema and construction

pub mod endpoint;
pub mod schema;

pub use endpoint::{endpoint_name, synthesize_endpoint};
pub use schema::{Alert, Endpoint, EndpointsDocument};
