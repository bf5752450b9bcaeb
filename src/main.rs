//! Discussion Preview - Entry Point

use clap::Parser;
use dprev::layout_mode::{get_window_width, FixedWindow};
use dprev::error::AppError;
use dprev::view::{build_plan, render_json, render_text, OutputFormat, PlanRequest};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

/// Discussion Preview - compute the preview layout of a chat thread
#[derive(Parser, Debug)]
#[command(name = "dprev")]
#[command(version)]
#[command(about = "Compute compact preview layouts for chat discussion threads")]
pub struct Args {
    /// Path to JSONL discussion file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Build a search preview for this text instead of the mention preview
    #[arg(short, long)]
    pub search: Option<String>,

    /// Viewport width used for layout-mode classification
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Classify content layout as if an item were selected
    #[arg(long)]
    pub selected: bool,

    /// Treat the host as a mobile execution context
    #[arg(long)]
    pub mobile: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "dprev failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = dprev::config::load_config_with_precedence(args.config.clone())?;
        let merged = dprev::config::merge_config(config_file);
        let with_env = dprev::config::apply_env_overrides(merged);

        // Only explicitly set flags override
        let mobile_override = if args.mobile { Some(true) } else { None };
        dprev::config::apply_cli_overrides(with_env, args.format, mobile_override)
    };

    dprev::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let input_source = dprev::source::detect_input_source(args.file.clone())?;
    let discussion = input_source.read_discussion()?;

    for malformed in &discussion.malformed {
        eprintln!(
            "warning: skipped line {}: {}",
            malformed.line_number(),
            malformed.error_message()
        );
    }
    if !discussion.malformed.is_empty() {
        warn!(
            count = discussion.malformed.len(),
            "Discussion contained malformed records"
        );
    }

    let window = FixedWindow(args.width.unwrap_or(config.default_width));
    let request = PlanRequest {
        search: args.search.clone(),
        width: get_window_width(&window),
        has_selection: args.selected,
        is_mobile: config.mobile,
        breakpoints: config.breakpoints,
    };

    let plan = build_plan(&discussion, &request)?;

    let output = match config.format {
        OutputFormat::Text => render_text(&plan),
        OutputFormat::Json => render_json(&plan)?,
    };
    println!("{output}");

    Ok(())
}
