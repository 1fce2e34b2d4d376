//! Podium: speech quality analyzer CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use podium::analyzer::ScoringEngine;
use podium::config::load_config;
use podium::reporter::{ConsoleReporter, JsonReporter};
use podium::server;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

const DEFAULT_PORT: u16 = 8787;

/// Podium: speech quality analyzer for self-introduction transcripts
#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Transcript file, directory of .txt transcripts, or `-` for stdin
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// Spoken duration in seconds (single transcript only)
    #[arg(long, short)]
    duration: Option<f64>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum overall score (exit 1 if any transcript scores below)
    #[arg(long, short)]
    threshold: Option<f64>,

    /// Quiet mode (overall score only)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (per-criterion diagnostic details)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .podiumrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP scoring server
    Serve {
        /// Port to listen on
        #[arg(long, short)]
        port: Option<u16>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}

/// Returns Ok(false) when a threshold check failed
fn run(args: Args) -> Result<bool> {
    let work_dir = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = load_config(&work_dir, args.config.as_deref())?;

    if let Some(Commands::Serve { port }) = args.command {
        let port = port.or(config.port).unwrap_or(DEFAULT_PORT);
        return run_server(port).map(|()| true);
    }

    // Safe: clap requires a path when no subcommand is given
    let path = args.path.clone().expect("path is required");
    let threshold = args.threshold.or(config.threshold);
    let engine = ScoringEngine::new();

    if path.as_os_str() == "-" {
        let mut transcript = String::new();
        std::io::stdin()
            .read_to_string(&mut transcript)
            .context("Failed to read transcript from stdin")?;
        let result = engine.score(&transcript, args.duration);
        report_single(&args, "stdin", &result);
        return Ok(passes(threshold, result.overall_score));
    }

    if path.is_dir() {
        return score_directory(&args, &engine, &path, threshold);
    }

    let result = engine.score_file(&path, args.duration)?;
    report_single(&args, &path.display().to_string(), &result);
    Ok(passes(threshold, result.overall_score))
}

fn run_server(port: u16) -> Result<()> {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?
        .block_on(server::serve(port))
}

fn score_directory(
    args: &Args,
    engine: &ScoringEngine,
    dir: &Path,
    threshold: Option<f64>,
) -> Result<bool> {
    let paths = collect_transcripts(dir);
    if paths.is_empty() {
        anyhow::bail!("No .txt transcripts found under {}", dir.display());
    }

    let mut results = Vec::with_capacity(paths.len());
    for (path, result) in engine.score_files(&paths) {
        let result = result?;
        results.push((path.display().to_string(), result));
    }

    let stats =
        ScoringEngine::aggregate_stats(&results.iter().map(|(_, r)| r.clone()).collect::<Vec<_>>());

    if args.json {
        let reporter = if args.verbose {
            JsonReporter::new().pretty()
        } else {
            JsonReporter::new()
        };
        println!("{}", reporter.report_with_summary(&results, &stats));
    } else {
        let reporter = console_reporter(args);
        if args.quiet {
            for (name, result) in &results {
                reporter.report_quiet(name, result);
            }
        } else {
            reporter.report_many(&results, &stats);
        }
    }

    Ok(results
        .iter()
        .all(|(_, result)| passes(threshold, result.overall_score)))
}

fn collect_transcripts(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();
    paths
}

fn report_single(args: &Args, name: &str, result: &podium::ScoringResult) {
    if args.json {
        let reporter = if args.verbose {
            JsonReporter::new().pretty()
        } else {
            JsonReporter::new()
        };
        println!("{}", reporter.report(result));
    } else if args.quiet {
        console_reporter(args).report_quiet(name, result);
    } else {
        console_reporter(args).report(name, result);
    }
}

fn console_reporter(args: &Args) -> ConsoleReporter {
    let mut reporter = ConsoleReporter::new();
    if args.verbose {
        reporter = reporter.verbose();
    }
    reporter
}

fn passes(threshold: Option<f64>, overall: f64) -> bool {
    threshold.is_none_or(|t| overall >= t)
}
