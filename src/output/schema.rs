use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of the comment-like entry heading the generated file.
pub const GENERATED_KEY: &str = "# Auto-generated configuration";

/// Timestamp layout of the generated-on line: local time, microsecond precision, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub alert_type: String,
    #[serde(rename = "failure-threshold")]
    pub failure_threshold: u32,
    #[serde(rename = "success-threshold")]
    pub success_threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub name: String,
    pub url: String,
    pub interval: String,
    pub conditions: Vec<String>,
    pub alerts: Vec<Alert>,
}

/// The full generated file. Field order is the emitted key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointsDocument {
    #[serde(rename = "# Auto-generated configuration")]
    pub generated: String,
    pub endpoints: Vec<Endpoint>,
}

impl EndpointsDocument {
    pub fn new(generated_at: NaiveDateTime, endpoints: Vec<Endpoint>) -> Self {
        Self {
            generated: format!("Generated on {}", generated_at.format(TIMESTAMP_FORMAT)),
            endpoints,
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize endpoints document to YAML")
    }
}

impl fmt::Display for EndpointsDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_yaml() {
            Ok(yaml) => write!(f, "{}", yaml),
            Err(e) => write!(f, "Error formatting EndpointsDocument: {}", e),
        }
    }
}
