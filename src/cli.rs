//! Command-line interface components.

use crate::config::FilterConfig;
use crate::constants::{DEFAULT_PROGRESS_INTERVAL, DEFAULT_TARGET_COLUMN, DEFAULT_THRESHOLD};
use crate::models::FilterSummary;
use clap::Parser;
use colored::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "range_filter")]
#[command(about = "Keep delimited-text records whose range column exceeds a threshold")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Input file (first line is the header)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file for the header and eligible records
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Header name of the column to filter on
    #[arg(short, long, default_value = DEFAULT_TARGET_COLUMN)]
    pub column: String,

    /// Keep records whose value is strictly greater than this
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    pub threshold: i32,

    /// Report progress every N records (0 disables)
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_interval: u64,

    /// Print the summary as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors, no progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Build the filter configuration from the arguments
    pub fn to_config(&self) -> FilterConfig {
        FilterConfig::default()
            .with_target_column(self.column.clone())
            .with_threshold(self.threshold)
            .with_progress_interval(self.progress_interval)
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("range_filter={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Spinner showing the processed record count (hidden in quiet mode)
pub fn create_progress(args: &Args) -> ProgressBar {
    if args.quiet {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} records {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}

pub fn print_banner(args: &Args, config: &FilterConfig) {
    println!("{}", "Starting range filter".bright_green().bold());
    println!("  {} {}", "Input:".bright_cyan(), args.input.display());
    println!("  {} {}", "Output:".bright_cyan(), args.output.display());
    println!(
        "  {} {} > {}",
        "Filter:".bright_cyan(),
        config.target_column,
        config.threshold
    );
}

pub fn print_summary(summary: &FilterSummary, elapsed: Duration) {
    println!("\n{}", "Filtering complete".bright_green().bold());
    println!(
        "  {} {} records",
        "Total processed:".bright_cyan(),
        summary.processed.to_string().bright_white().bold()
    );
    println!(
        "  {} {} records ({:.1}%)",
        "Eligible:".bright_cyan(),
        summary.eligible.to_string().bright_white().bold(),
        summary.eligibility_rate()
    );
    println!(
        "  {} {} records",
        "Invalid/Skipped:".bright_cyan(),
        summary.invalid.to_string().bright_yellow()
    );
    println!(
        "  {} {} records",
        "Below threshold:".bright_cyan(),
        summary.below_threshold()
    );
    println!("  {} {}", "Elapsed:".bright_cyan(), HumanDuration(elapsed));
}

#[derive(Serialize)]
struct RunReport<'a> {
    input: &'a Path,
    output: &'a Path,
    #[serde(flatten)]
    summary: &'a FilterSummary,
    below_threshold: u64,
    elapsed_ms: u128,
}

/// Summary as pretty-printed JSON
pub fn json_report(
    args: &Args,
    summary: &FilterSummary,
    elapsed: Duration,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RunReport {
        input: &args.input,
        output: &args.output,
        summary,
        below_threshold: summary.below_threshold(),
        elapsed_ms: elapsed.as_millis(),
    })
}
