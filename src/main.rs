use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod split;

use config::Settings;
use split::{SplitPlan, SplitReport, Splitter, split};

/// Split a text file into `<stem>_<i>.txt` chunks of `job_size * 2 + 4` lines.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Input text file
    input_path: PathBuf,

    /// Job size; each chunk holds `job_size * 2 + 4` lines
    #[arg(allow_negative_numbers = true)]
    job_size: i64,

    /// Directory for chunk files [default: current directory]
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Configuration file [default: ./splitter.toml if present]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the chunk layout without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Only report errors
    #[arg(short, long, conflicts_with = "dry_run")]
    quiet: bool,
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_plan(plan: &SplitPlan) {
    println!(
        "{}",
        format!(
            "{} lines, chunk size {}: {} file(s) would be written",
            plan.total_lines,
            plan.chunk_size.get(),
            plan.chunks.len()
        )
        .cyan()
    );
    for chunk in &plan.chunks {
        println!(
            "  {} lines {}..{}",
            chunk.path.display().to_string().bold(),
            chunk.lines.start + 1,
            chunk.lines.end
        );
    }
    if plan.dropped_lines() > 0 {
        println!("{}", format!("  {} trailing line(s) dropped", plan.dropped_lines()).yellow());
    }
}

fn print_report(report: &SplitReport) {
    for path in &report.written {
        println!("{} {}", "✓".green(), path.display());
    }
    println!(
        "{}",
        format!(
            "{} lines, chunk size {}: {} file(s) written",
            report.total_lines,
            report.chunk_size.get(),
            report.written.len()
        )
        .purple()
        .bold()
    );
    if report.dropped_lines > 0 {
        println!("{}", format!("{} trailing line(s) dropped", report.dropped_lines).yellow());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::new(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(&settings);

    let output_dir = cli.output_dir.clone().unwrap_or_else(|| settings.output_dir.clone());

    if cli.dry_run {
        let plan = Splitter::new(output_dir)
            .plan_for(&cli.input_path, cli.job_size)
            .with_context(|| format!("cannot plan split of {}", cli.input_path.display()))?;
        print_plan(&plan);
        return Ok(());
    }

    let report = if output_dir == Path::new(".") {
        split(&cli.input_path, cli.job_size)
    } else {
        Splitter::new(output_dir).run(&cli.input_path, cli.job_size)
    }
    .with_context(|| format!("cannot split {}", cli.input_path.display()))?;

    if !cli.quiet {
        print_report(&report);
    }

    Ok(())
}
