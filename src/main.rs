use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use console::Term;
use tracing_subscriber::EnvFilter;

use bump_detect::analyzer::DetectionContext;
use bump_detect::boundary::BoundaryWarning;
use bump_detect::cli::run_detection;
use bump_detect::config::{self, Config};
use bump_detect::git::Git2Repository;
use bump_detect::output::ReleaseOutputs;
use bump_detect::ui;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Parser)]
#[command(
    name = "bump-detect",
    version,
    about = "Compute the next semantic version from a commit, branch or label change token"
)]
struct Args {
    #[arg(long = "type", env = "INPUT_TYPE", help = "Token source: commit, branch or label")]
    detection_type: Option<String>,

    #[arg(long, env = "INPUT_MAP", help = "JSON object mapping bump categories to tokens")]
    map: Option<String>,

    #[arg(long, env = "INPUT_LABELS", help = "Space-separated labels used when the event has none")]
    labels: Option<String>,

    #[arg(long, env = "GITHUB_HEAD_REF", help = "Pull request source branch")]
    head_ref: Option<String>,

    #[arg(long, env = "GITHUB_REF_NAME", help = "Ref name of the triggering event")]
    ref_name: Option<String>,

    #[arg(long, env = "GITHUB_EVENT_PATH", help = "Path to the event payload JSON")]
    event_path: Option<PathBuf>,

    #[arg(long, env = "GITHUB_OUTPUT", help = "File the outputs are appended to")]
    output_file: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, default_value = ".", help = "Repository to read tags and commits from")]
    repo: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Stdout format")]
    format: OutputFormat,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let output_file = args
        .output_file
        .clone()
        .filter(|path| !path.as_os_str().is_empty());

    let outputs = match detect(&args) {
        Ok(outputs) => outputs,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            if let Err(e) = emit(&ReleaseOutputs::blank(), args.format, output_file.as_deref()) {
                ui::display_error(&format!("{:#}", e));
            }
            std::process::exit(1);
        }
    };

    if let Err(e) = emit(&outputs, args.format, output_file.as_deref()) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(Term::stderr().features().colors_supported())
        .init();
}

fn detect(args: &Args) -> Result<ReleaseOutputs> {
    let file_config = config::load_config(args.config.as_deref())?;
    let config = Config::resolve(
        args.detection_type.as_deref(),
        args.map.as_deref(),
        &file_config,
    )?;

    ui::display_status(&format!("Detecting change token from {}", config.mode));

    let context = DetectionContext {
        head_ref: args.head_ref.clone(),
        ref_name: args.ref_name.clone(),
        event_path: args.event_path.clone(),
        fallback_labels: args.labels.clone(),
    };

    let repo = match Git2Repository::open(&args.repo) {
        Ok(repo) => Some(repo),
        Err(e) => {
            ui::display_boundary_warning(&BoundaryWarning::RepositoryUnavailable {
                reason: e.to_string(),
            });
            None
        }
    };

    let report = run_detection(&config, &context, repo.as_ref())
        .context("Failed to compute the next version")?;

    for warning in &report.warnings {
        ui::display_boundary_warning(warning);
    }
    ui::display_decision(&report.decision);

    Ok(ReleaseOutputs::from(&report.decision))
}

fn emit(outputs: &ReleaseOutputs, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", outputs.to_lines()),
        OutputFormat::Json => println!("{}", outputs.to_json()?),
    }

    if let Some(path) = output_file {
        outputs
            .append_to_file(path)
            .with_context(|| format!("Failed to write outputs to '{}'", path.display()))?;
    }

    Ok(())
}
