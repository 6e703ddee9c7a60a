use globset::Glob;
use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_APPS_DIR: &str = "apps";
pub const DEFAULT_OUTPUT: &str = "gatus-endpoints.yml";
pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &["**/*.yaml", "**/*.yml"];
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Invalid include pattern '{pattern}': {error}")]
    InvalidPattern { pattern: String, error: String },
}

/// Settings of a generation run.
///
/// `Default` reads `GATUSGEN_*` environment variables; CLI flags are layered on top
/// by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub apps_dir: PathBuf,
    pub output_path: PathBuf,
    /// Globs matched against paths relative to `apps_dir`, one walk per pattern.
    pub include_patterns: Vec<String>,
    pub log_level: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let apps_dir = env::var("GATUSGEN_APPS_DIR")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_APPS_DIR));

        let output_path = env::var("GATUSGEN_OUTPUT")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let include_patterns = env::var("GATUSGEN_INCLUDE")
            .ok()
            .map(|v| parse_pattern_list(&v))
            .filter(|patterns| !patterns.is_empty())
            .unwrap_or_else(default_include_patterns);

        let log_level = env::var("GATUSGEN_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            apps_dir,
            output_path,
            include_patterns,
            log_level,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.apps_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Apps directory cannot be empty".to_string(),
            ));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Output path cannot be empty".to_string(),
            ));
        }

        if self.include_patterns.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "At least one include pattern is required".to_string(),
            ));
        }
        for pattern in &self.include_patterns {
            Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                error: e.to_string(),
            })?;
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gatusgen Configuration:")?;
        writeln!(f, "  Apps Dir: {}", self.apps_dir.display())?;
        writeln!(f, "  Output: {}", self.output_path.display())?;
        writeln!(f, "  Include: {}", self.include_patterns.join(", "))?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}

fn default_include_patterns() -> Vec<String> {
    DEFAULT_INCLUDE_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn parse_pattern_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
