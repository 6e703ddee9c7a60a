use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Generates Gatus endpoints from the hostnames declared in Kubernetes manifests
#[derive(Parser, Debug)]
#[command(
    name = "gatusgen",
    about = "Generates Gatus endpoints from the hostnames declared in Kubernetes manifests",
    version,
    long_about = "gatusgen walks a GitOps apps directory, collects the public hostnames found in \
                  ingress rules, TLS blocks, certificates and kustomize patches, and writes one \
                  Gatus health-check endpoint per unique hostname.\n\n\
                  Examples:\n  \
                  gatusgen\n  \
                  gatusgen --apps-dir clusters/prod/apps --output monitoring/endpoints.yml\n  \
                  gatusgen --dry-run --format json"
)]
pub struct CliArgs {
    #[arg(
        short = 'a',
        long,
        value_name = "DIR",
        help = "Directory holding one subdirectory per app [default: apps]"
    )]
    pub apps_dir: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Endpoints file to write [default: gatus-endpoints.yml]"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'i',
        long = "include",
        value_name = "GLOB",
        help = "Manifest glob relative to the apps directory, repeatable [default: **/*.yaml, **/*.yml]"
    )]
    pub include: Vec<String>,

    #[arg(long, help = "Print the generated document instead of writing it")]
    pub dry_run: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Run summary format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors and skip the summary"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let args = CliArgs::parse_from(["gatusgen"]);
        assert!(args.apps_dir.is_none());
        assert!(args.output.is_none());
        assert!(args.include.is_empty());
        assert!(!args.dry_run);
        assert_eq!(args.format, OutputFormatArg::Human);
        assert!(args.log_level.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_all_options() {
        let args = CliArgs::parse_from([
            "gatusgen",
            "--apps-dir",
            "clusters/prod/apps",
            "-o",
            "monitoring/endpoints.yml",
            "-i",
            "**/ingress.yaml",
            "--include",
            "**/kustomization.yaml",
            "--dry-run",
            "--format",
            "json",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.apps_dir, Some(PathBuf::from("clusters/prod/apps")));
        assert_eq!(args.output, Some(PathBuf::from("monitoring/endpoints.yml")));
        assert_eq!(args.include, vec!["**/ingress.yaml", "**/kustomization.yaml"]);
        assert!(args.dry_run);
        assert_eq!(args.format, OutputFormatArg::Json);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = CliArgs::try_parse_from(["gatusgen", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(OutputFormat::from(OutputFormatArg::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(OutputFormatArg::Yaml), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from(OutputFormatArg::Human), OutputFormat::Human);
    }
}
