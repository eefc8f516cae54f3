use anyhow::Context;
use clap::Parser;
use range_filter::cli::{self, Args};
use range_filter::processor::StreamFilter;
use std::process;
use std::time::Instant;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    if let Err(error) = cli::setup_logging(&args) {
        eprintln!("Failed to initialize logging: {}", error);
    }

    match run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let filter = StreamFilter::new(args.to_config()).context("Invalid filter configuration")?;

    if !args.json {
        cli::print_banner(args, filter.config());
    }

    let progress = cli::create_progress(args);
    let filter = filter.with_progress(progress.clone());

    let start_time = Instant::now();
    let result = filter
        .run_files(&args.input, &args.output)
        .with_context(|| format!("Failed to filter {}", args.input.display()));
    progress.finish_and_clear();

    let summary = result?;
    let elapsed = start_time.elapsed();

    if args.json {
        println!("{}", cli::json_report(args, &summary, elapsed)?);
    } else {
        cli::print_summary(&summary, elapsed);
    }

    Ok(())
}
