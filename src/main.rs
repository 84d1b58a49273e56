//! Tajweed: recitation feedback CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tajweed::analyzer::TajweedEngine;
use tajweed::config::{default_config_json, load_config, Config, CONFIG_FILENAME};
use tajweed::reporter::{ConsoleReporter, JsonReporter};
use tajweed::service::{run_stdio_server, FeedbackRequest, RequestError};
use tajweed::{Feedback, Status};
use tracing_subscriber::EnvFilter;

/// Tajweed: rule detection and recitation feedback for Arabic text
#[derive(Parser, Debug)]
#[command(name = "tajweed")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Output format as JSON
    #[arg(long, short, global = true)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Path to config file (default: search .tajweedrc.json in current dir and parents)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (also enables debug logging)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Detect tajweed rules in a text
    Analyze {
        /// Text to scan (normally the fully vowelled reference)
        text: String,
    },

    /// Compare an attempt against the reference word by word
    Compare {
        /// The learner's attempt
        user_text: String,
        /// The reference text
        correct_text: String,
    },

    /// Full feedback: rules, mistakes and accuracy (exit 1 on retry)
    Feedback {
        /// The learner's attempt
        user_text: String,
        /// The reference text
        correct_text: String,

        /// Success threshold; accuracy must be strictly above it
        #[arg(long, short)]
        threshold: Option<u8>,
    },

    /// Feedback for a JSON Lines file of {"user_text", "correct_text"} objects
    Batch {
        /// Input file
        file: PathBuf,

        /// Success threshold; accuracy must be strictly above it
        #[arg(long, short)]
        threshold: Option<u8>,

        /// Number of parallel threads (default: number of CPU cores)
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// Serve feedback requests as JSON lines on stdin/stdout
    Serve,

    /// Create .tajweedrc.json with defaults
    Init {
        /// Success threshold (e.g. 80)
        #[arg(long)]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

/// One line of batch output
#[derive(Debug, Serialize)]
struct BatchEntry {
    line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    feedback: Option<Feedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "tajweed=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    match &args.command {
        Commands::Init { threshold, dir } => {
            run_init(*threshold, dir.as_deref().unwrap_or(cwd.as_path()))
        }
        Commands::Analyze { text } => {
            let engine = build_engine(&args, &cwd, None)?;
            let matches = engine.analyze(text);
            if args.json {
                println!("{}", json_reporter(&args).report(&matches));
            } else {
                console_reporter(&args).report_rules(&matches);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Compare {
            user_text,
            correct_text,
        } => {
            let engine = build_engine(&args, &cwd, None)?;
            let comparison = engine.compare(user_text, correct_text);
            if args.json {
                println!("{}", json_reporter(&args).report(&comparison));
            } else {
                console_reporter(&args).report_comparison(&comparison);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Feedback {
            user_text,
            correct_text,
            threshold,
        } => {
            let user_text = user_text.trim();
            let correct_text = correct_text.trim();
            if user_text.is_empty() || correct_text.is_empty() {
                return Err(RequestError::MissingText.into());
            }
            let engine = build_engine(&args, &cwd, *threshold)?;
            let feedback = engine.get_feedback(user_text, correct_text)?;
            if args.json {
                println!("{}", json_reporter(&args).report(&feedback));
            } else {
                console_reporter(&args).report(&feedback);
            }
            Ok(match feedback.status {
                Status::Success => ExitCode::SUCCESS,
                Status::Retry => ExitCode::from(1),
            })
        }
        Commands::Batch {
            file,
            threshold,
            jobs,
        } => {
            if let Some(jobs) = jobs {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(*jobs)
                    .build_global()
                    .ok();
            }
            let engine = build_engine(&args, &cwd, *threshold)?;
            run_batch(&args, &engine, file)
        }
        Commands::Serve => {
            let engine = build_engine(&args, &cwd, None)?;
            tracing::info!(rules = ?engine.enabled_rules(), "serving on stdio");
            run_stdio_server(&engine)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load config (CLI flags override config file) and build the engine
fn build_engine(args: &Args, work_dir: &Path, threshold: Option<u8>) -> Result<TajweedEngine> {
    let config: Config =
        load_config(work_dir, args.config.as_deref())?.merge_with_cli(threshold);
    Ok(TajweedEngine::from_config(&config))
}

fn json_reporter(args: &Args) -> JsonReporter {
    if args.pretty {
        JsonReporter::new().pretty()
    } else {
        JsonReporter::new()
    }
}

fn console_reporter(args: &Args) -> ConsoleReporter {
    let mut reporter = ConsoleReporter::new();
    if args.no_color {
        reporter = reporter.without_colors();
    }
    if args.verbose {
        reporter = reporter.verbose();
    }
    reporter
}

fn run_batch(args: &Args, engine: &TajweedEngine, file: &Path) -> Result<ExitCode> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read batch file: {}", file.display()))?;

    let mut entries = Vec::new();
    let mut pairs = Vec::new();
    let mut pair_lines = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parsed = serde_json::from_str::<serde_json::Value>(line)
            .map_err(|_| RequestError::NoData)
            .and_then(|v| FeedbackRequest::from_body(Some(&v)));
        match parsed {
            Ok(req) => {
                pair_lines.push(i + 1);
                pairs.push((req.user_text, req.correct_text));
            }
            Err(e) => entries.push(BatchEntry {
                line: i + 1,
                feedback: None,
                error: Some(e.to_string()),
            }),
        }
    }

    let results = engine.get_feedback_many(&pairs);
    for (line, result) in pair_lines.into_iter().zip(results) {
        entries.push(match result {
            Ok(feedback) => BatchEntry {
                line,
                feedback: Some(feedback),
                error: None,
            },
            Err(e) => BatchEntry {
                line,
                feedback: None,
                error: Some(format!("Internal error: {}", e)),
            },
        });
    }
    entries.sort_by_key(|e| e.line);
    tracing::debug!(entries = entries.len(), "batch complete");

    if args.json {
        println!("{}", json_reporter(args).report(&entries));
    } else {
        for entry in &entries {
            match (&entry.feedback, &entry.error) {
                (Some(feedback), _) => println!(
                    "line {}: {:>3}% {}",
                    entry.line, feedback.accuracy, feedback.status
                ),
                (None, Some(error)) => {
                    println!("line {}: {}", entry.line, error.as_str().red())
                }
                (None, None) => {}
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_init(threshold: Option<u8>, dir: &Path) -> Result<ExitCode> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let json = default_config_json(threshold.unwrap_or(80));
    std::fs::write(&config_path, json)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("{} {}", "Created".green(), config_path.display());
    Ok(ExitCode::SUCCESS)
}
