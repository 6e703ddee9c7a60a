use gatusgen::cli::{CliArgs, OutputFormatter};
use gatusgen::util::logging::{self, parse_level, LoggingConfig};
use gatusgen::{
    EndpointGenerator, GeneratorConfig, LoggingHandler, OutputMode, RealFileSystem, RunOutcome,
    NAME, VERSION,
};

use clap::Parser;
use std::process;
use std::sync::Arc;
use tracing::{debug, error, Level};

fn main() {
    let args = CliArgs::parse();
    let config = resolve_config(&args);
    init_logging_from_args(&args, &config);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    process::exit(run(&args, config));
}

/// Defaults and `GATUSGEN_*` variables, overridden by flags.
fn resolve_config(args: &CliArgs) -> GeneratorConfig {
    let mut config = GeneratorConfig::default();

    if let Some(apps_dir) = &args.apps_dir {
        config.apps_dir = apps_dir.clone();
    }
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if !args.include.is_empty() {
        config.include_patterns = args.include.clone();
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.to_lowercase();
    }

    config
}

fn init_logging_from_args(args: &CliArgs, config: &GeneratorConfig) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        parse_level(&config.log_level)
    };

    logging::init_logging(LoggingConfig {
        level,
        ..logging::config_from_env()
    });
}

fn run(args: &CliArgs, config: GeneratorConfig) -> i32 {
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        eprintln!("Error: {}", e);
        return 1;
    }
    debug!("{}", config);

    let mode = if args.dry_run {
        OutputMode::DryRun
    } else {
        OutputMode::Write
    };
    let generator = EndpointGenerator::new(RealFileSystem::new(), config)
        .with_progress_handler(Arc::new(LoggingHandler));
    let generated_at = chrono::Local::now().naive_local();

    match generator.run(mode, generated_at) {
        Ok(RunOutcome::RootMissing { apps_dir }) => {
            if !args.quiet {
                println!(
                    "The '{}' directory does not exist; nothing generated",
                    apps_dir.display()
                );
            }
            0
        }
        Ok(RunOutcome::Generated { report, document }) => {
            if args.dry_run {
                match document.to_yaml() {
                    Ok(yaml) => print!("{}", yaml),
                    Err(e) => {
                        error!(error = %e, "Failed to render endpoints document");
                        return 1;
                    }
                }
            }

            if !args.quiet {
                match OutputFormatter::new(args.format.into()).format(&report) {
                    // Keep stdout clean for the document itself on dry runs
                    Ok(summary) if args.dry_run => eprintln!("{}", summary),
                    Ok(summary) => println!("{}", summary),
                    Err(e) => {
                        error!(error = %e, "Failed to format summary");
                        return 1;
                    }
                }
            }
            0
        }
        Err(e) => {
            error!(error = %e, "Generation failed");
            eprintln!("Error: {}", e);
            1
        }
    }
}
