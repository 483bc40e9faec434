//! rowfocus - Entry Point

use clap::Parser;
use rowfocus::config::CliOverrides;
use rowfocus::focus::TracingObserver;
use rowfocus::model::AppError;
use rowfocus::simulation::{format_outcome, simulate};
use rowfocus::FocusSession;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// rowfocus - simulate focused-row selection for a scrolling list
#[derive(Parser, Debug)]
#[command(name = "rowfocus")]
#[command(version)]
#[command(about = "Report which list row takes focus after each scroll settles")]
pub struct Args {
    /// Scroll offsets to settle at, in order (defaults to the top of the list)
    #[arg(allow_negative_numbers = true)]
    pub offsets: Vec<f64>,

    /// Number of rows in the list
    #[arg(long = "rows")]
    pub row_count: Option<usize>,

    /// Height of every row
    #[arg(long)]
    pub row_height: Option<f64>,

    /// Height of the visible area
    #[arg(long)]
    pub viewport_height: Option<f64>,

    /// Extra scrollable space after the last row
    #[arg(long)]
    pub bottom_inset: Option<f64>,

    /// Minimum visible percentage for a boundary row to keep focus
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit one JSON object per offset instead of text
    #[arg(long)]
    pub json: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            threshold: self.threshold,
            row_height: self.row_height,
            viewport_height: self.viewport_height,
            row_count: self.row_count,
            bottom_inset: self.bottom_inset,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = rowfocus::config::load_config_with_precedence(args.config.clone())?;
        let merged = rowfocus::config::merge_config(config_file)?;
        let with_env = rowfocus::config::apply_env_overrides(merged)?;
        rowfocus::config::apply_cli_overrides(with_env, args.overrides())?
    };

    rowfocus::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let offsets = if args.offsets.is_empty() {
        vec![0.0]
    } else {
        args.offsets.clone()
    };

    let mut session = FocusSession::new(config.geometry, config.threshold, config.settle)
        .with_observer(TracingObserver);
    let outcomes = simulate(&mut session, &offsets, Instant::now());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for outcome in &outcomes {
        if args.json {
            serde_json::to_writer(&mut out, outcome)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", format_outcome(outcome))?;
        }
    }

    Ok(())
}
