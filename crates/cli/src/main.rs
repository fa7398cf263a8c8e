//! Tenure CLI - progress tracker for a fixed-term program.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tenure_core::{Date, ProgramSchedule, ProgressState};
use tenure_progress::{month_sequence, Clock, FixedClock, ProgressCalculator, SystemClock, TimelineSummary};
use tenure_render::config::DEFAULT_CONFIG_FILE;
use tenure_render::{build_page, DisplayConfig, OutputFormat};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tenure")]
#[command(about = "Progress tracker for a fixed-term program", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Evaluate as of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true, value_parser = parse_date)]
    now: Option<Date>,

    /// Display configuration file [default: tenure.toml if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the progress page
    Render {
        /// Output format: text, json or html
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a one-line progress summary
    Status,
    /// List the program months and their status
    Timeline,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Stdout carries the rendered page only.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let calculator = ProgressCalculator::new(ProgramSchedule::fixed());

    // Sample the clock once per invocation.
    let clock: Box<dyn Clock> = match cli.now {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let state = calculator.evaluate_with(clock.as_ref());
    info!(now = %state.now, percent = state.percent_complete, "Evaluated progress");

    let command = cli.command.unwrap_or(Commands::Render {
        format: OutputFormat::default(),
        output: None,
    });

    match command {
        Commands::Render { format, output } => {
            let config = load_config(cli.config.as_deref())?;
            let months = month_sequence(calculator.schedule(), state.now);
            let page = build_page(&state, &months, &config);
            let rendered = format
                .renderer()
                .render(&page)
                .with_context(|| format!("Failed to render {format} output"))?;

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), %format, "Wrote page");
                }
                None => print!("{rendered}"),
            }
        }
        Commands::Status => {
            println!("{}", status_line(&state));
        }
        Commands::Timeline => {
            let months = month_sequence(calculator.schedule(), state.now);
            let summary = TimelineSummary::from_months(&months);

            println!("Months ({}/{} completed)", summary.completed, summary.total());
            for month in &months {
                println!("  {} | {:>9} | {:.2}%", month.label, month.status.as_str(), month.weight);
            }
        }
    }

    Ok(())
}

/// An explicit `--config` must exist; the default file is optional.
fn load_config(path: Option<&Path>) -> Result<DisplayConfig> {
    match path {
        Some(path) => DisplayConfig::load_required(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => DisplayConfig::load(Path::new(DEFAULT_CONFIG_FILE))
            .with_context(|| format!("Failed to load config from {DEFAULT_CONFIG_FILE}")),
    }
}

fn parse_date(s: &str) -> std::result::Result<Date, String> {
    Date::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{s}': {e}"))
}

fn status_line(state: &ProgressState) -> String {
    format!(
        "{:.1}% complete ({}) | {} days elapsed | {} days / {} months remaining",
        state.percent_complete,
        state.phase.as_str(),
        state.elapsed_days,
        state.remaining_days,
        state.remaining_months,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-08-01"), Ok(Date::from_ymd_opt(2025, 8, 1).unwrap()));
        assert!(parse_date("01/08/2025").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_status_line() {
        let state = ProgressCalculator::default().evaluate(Date::from_ymd_opt(2027, 1, 1).unwrap());
        assert_eq!(
            status_line(&state),
            "100.0% complete (finished) | 720 days elapsed | 0 days / 0 months remaining"
        );
    }

    #[test]
    fn test_cli_parses_render_options() {
        let cli = Cli::try_parse_from(["tenure", "render", "--format", "html", "--now", "2025-08-01"]).unwrap();
        assert_eq!(cli.now, Some(Date::from_ymd_opt(2025, 8, 1).unwrap()));
        match cli.command {
            Some(Commands::Render { format, output }) => {
                assert_eq!(format, OutputFormat::Html);
                assert!(output.is_none());
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["tenure"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.now.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let err = load_config(Some(Path::new("does/not/exist/tenure.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist/tenure.toml"));
    }

    #[test]
    fn test_cli_parses_config_path() {
        let cli = Cli::try_parse_from(["tenure", "render", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        assert!(Cli::try_parse_from(["tenure", "status", "--now", "yesterday"]).is_err());
    }

    #[test]
    fn test_cli_rejects_start_date_flags() {
        assert!(Cli::try_parse_from(["tenure", "--start", "2024-01-01"]).is_err());
    }
}
