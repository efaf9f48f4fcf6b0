//! @ai:module:intent CLI entry point for running the config pipeline
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on pipeline, report, settings

use config_pipeline::{
    format_outcome, OutputFormat, Pipeline, PipelineSettings, ValidatedData,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "config-pipeline")]
#[command(author, version, about = "Run the load/validate/process config pipeline")]
struct Cli {
    /// Show per-stage debug traces
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline on a single config file
    Run {
        /// Path to the config file
        path: PathBuf,

        /// Path to a TOML settings file
        #[arg(long, short)]
        settings: Option<PathBuf>,

        /// Output format (overrides the settings file)
        #[arg(long, short, value_enum)]
        format: Option<Format>,
    },

    /// Run the reference scenarios against temporary files
    Demo {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Write default settings to a TOML file
    Init {
        /// Output path for the settings file
        #[arg(long, short, default_value = "pipeline.toml")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            path,
            settings,
            format,
        } => {
            let settings = match settings {
                Some(settings_path) => match PipelineSettings::load(&settings_path) {
                    Ok(settings) => settings,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::from(2);
                    }
                },
                None => PipelineSettings::default(),
            };
            let format = format.map(OutputFormat::from).unwrap_or(settings.report.format);
            let outcome = Pipeline::new().run(&path);
            match format_outcome(&outcome, format) {
                Ok(report) => {
                    println!("{}", report);
                    if outcome.is_success() {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::from(1)
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Demo { format } => match run_demo(format.into()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },

        Commands::Init { output } => match PipelineSettings::default().save(&output) {
            Ok(()) => {
                println!("Wrote default settings to {}", output.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },
    }
}

/// @ai:intent Install the stderr log subscriber, honoring RUST_LOG when set
/// @ai:effects global:tracing
fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "config_pipeline=debug"
    } else {
        "config_pipeline=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// @ai:intent Recreate the five reference scenarios in a temporary directory
/// @ai:effects fs:write, fs:read, io:stdout
fn run_demo(format: OutputFormat) -> config_pipeline::Result<()> {
    let dir = tempfile::tempdir()?;
    let pipeline = Pipeline::new();

    let scenarios: [(&str, &str, Option<&str>); 5] = [
        ("Successful Execution", "valid_config.txt", Some("valid_data_content")),
        ("Config Read Error", "non_existent_config.txt", None),
        ("Config Parse Error", "malformed_config.txt", Some("malformed content")),
        ("Validation Error", "invalid_data_config.txt", Some("valid_data\ninvalid_field")),
        ("Processing Error", "short_data_config.txt", Some("short")),
    ];

    for (index, (title, file_name, content)) in scenarios.iter().enumerate() {
        println!("--- Scenario {}: {} ---", index + 1, title);

        let path = dir.path().join(file_name);
        if let Some(content) = content {
            std::fs::write(&path, content)?;
        }

        let outcome = pipeline.run(&path);
        println!("{}\n", format_outcome(&outcome, format)?);
    }

    println!("--- Scenario 6: Processing Error (direct stage call) ---");
    let outcome = pipeline.process_data(ValidatedData::new_unchecked("x"));
    println!("{}", format_outcome(&outcome, format)?);

    tracing::debug!(dir = %dir.path().display(), "removing demo files");
    dir.close()?;
    Ok(())
}
