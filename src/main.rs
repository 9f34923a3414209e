//! resume-score: Resume Scoring CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use resume_score::analyzer::ScoringEngine;
use resume_score::config::{build_ignore_set, is_ignored, load_config, write_starter_config, Config};
use resume_score::history::{clear_history, find_project_root, load_history, record_analysis};
use resume_score::ingest::{self, collect_documents, STDIN_PATH};
use resume_score::keywords::{check_keywords, KeywordReport};
use resume_score::reporter::{ConsoleReporter, JsonReporter};
use resume_score::sample::SAMPLE_RESUME;
use resume_score::watcher::ResumeWatcher;
use resume_score::{AnalysisResult, ScoredDocument};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// resume-score: rule-based resume scoring
#[derive(Parser, Debug)]
#[command(name = "resume-score")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Resume file or directory to analyze, or `-` for stdin (omit when using a subcommand)
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (minimal output)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (also enables debug logging unless RUST_LOG is set)
    #[arg(long, short)]
    verbose: bool,

    /// Job description to match keywords against
    #[arg(long, value_name = "FILE")]
    job: Option<PathBuf>,

    /// Do not record this run in the score history
    #[arg(long)]
    no_history: bool,

    /// Path to config file (default: search .resumescorerc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Watch for file changes and re-analyze
    #[arg(long)]
    watch: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Run analysis in parallel (default for directories with many files)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .resumescorerc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 70)
        #[arg(long)]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Show or clear recorded scores
    History {
        /// Delete the history file
        #[arg(long)]
        clear: bool,

        /// Output format as JSON
        #[arg(long, short)]
        json: bool,

        /// Directory to resolve the project root from (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Print the bundled sample resume
    Sample,
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
    let default_filter = if verbose { "resume_score=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Some(cmd) = args.command {
        return match cmd {
            Commands::Init { threshold, dir } => run_init(threshold, dir.as_deref()),
            Commands::History { clear, json, dir } => run_history(clear, json, dir.as_deref()),
            Commands::Sample => {
                println!("{}", SAMPLE_RESUME);
                Ok(ExitCode::SUCCESS)
            }
        };
    }

    let Some(path) = args.path.clone() else {
        anyhow::bail!("A resume path is required");
    };

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let reading_stdin = path.as_os_str() == "-";
    let work_dir = if reading_stdin {
        cwd.clone()
    } else {
        work_dir_for(&cwd.join(&path))
    };

    // Load config (CLI flags override config file)
    let config = load_config(&work_dir, args.config.as_deref())?;
    let config = config.merge_with_cli(
        args.threshold,
        args.job.as_ref().map(|j| cwd.join(j)),
        args.no_history,
    );

    if args.watch {
        if reading_stdin {
            anyhow::bail!("--watch cannot be used with stdin");
        }
        return run_watch(&args, &path, &work_dir, &config);
    }

    let engine = ScoringEngine::new();

    let mut stdin_text = None;
    let (docs, had_errors) = if reading_stdin {
        let text = ingest::read_stdin()?;
        let doc = ScoredDocument {
            path: PathBuf::from(STDIN_PATH),
            analysis: engine.analyze(&text),
        };
        stdin_text = Some(text);
        (vec![doc], false)
    } else {
        let ignore_set = if config.ignore.is_empty() {
            None
        } else {
            Some(build_ignore_set(&config.ignore)?)
        };
        let files = collect_documents(&path, ignore_set.as_ref(), &config.supported_extensions())?;
        if files.is_empty() {
            eprintln!("{}: No resume files found", "Warning".yellow());
            return Ok(ExitCode::from(2));
        }
        score_files(&engine, &files, args.parallel, args.quiet)
    };

    if docs.is_empty() {
        eprintln!("{}: All files failed to analyze", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let keywords = keyword_report(&config, &docs, stdin_text.as_deref(), args.quiet)?;

    // Record single-resume runs only; a batch has no single score to trend
    let previous = if docs.len() == 1 && config.history_enabled() {
        let root = find_project_root(&work_dir).unwrap_or_else(|| work_dir.clone());
        record_history(&root, &docs[0].analysis)
    } else {
        None
    };

    let stats = ScoringEngine::aggregate_stats(&docs);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if docs.len() == 1 {
            println!("{}", reporter.report(&docs[0], keywords.as_ref()));
        } else {
            println!("{}", reporter.report_with_summary(&docs, &stats));
        }
    } else {
        let reporter = console_reporter(&args);
        if args.quiet {
            for doc in &docs {
                reporter.report_quiet(doc);
            }
        } else if docs.len() == 1 {
            reporter.report(&docs[0], previous);
        } else {
            reporter.report_many(&docs, &stats);
        }
        if let Some(ref report) = keywords {
            if !args.quiet {
                reporter.report_keywords(report);
            }
        }
    }

    // Check threshold (config or CLI)
    if let Some(threshold) = config.threshold {
        let score = if docs.len() == 1 {
            docs[0].analysis.total_score
        } else {
            stats.average_score
        };

        if score < threshold {
            if !args.quiet && !args.json {
                eprintln!(
                    "\n{}: Score {} is below threshold {}",
                    "Failed".red().bold(),
                    score,
                    threshold
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Directory used for config and history discovery
fn work_dir_for(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.to_path_buf()
    } else {
        path.parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Record a score; a failed save is logged and treated as no previous score
fn record_history(root: &Path, result: &AnalysisResult) -> Option<u8> {
    match record_analysis(root, result) {
        Ok(previous) => previous,
        Err(e) => {
            log::warn!("failed to save history: {}", e);
            None
        }
    }
}

fn console_reporter(args: &Args) -> ConsoleReporter {
    let mut reporter = ConsoleReporter::new();
    if args.verbose {
        reporter = reporter.verbose();
    }
    if args.no_color {
        reporter = reporter.without_colors();
    }
    reporter
}

fn score_files(
    engine: &ScoringEngine,
    files: &[PathBuf],
    parallel: bool,
    quiet: bool,
) -> (Vec<ScoredDocument>, bool) {
    let mut docs = Vec::with_capacity(files.len());
    let mut had_errors = false;

    for outcome in engine.analyze_documents(files, parallel) {
        match outcome {
            Ok(doc) => docs.push(doc),
            Err(e) => {
                if !quiet {
                    eprintln!("{}: {:#}", "Error".red(), anyhow::Error::from(e));
                }
                had_errors = true;
            }
        }
    }

    (docs, had_errors)
}

fn keyword_report(
    config: &Config,
    docs: &[ScoredDocument],
    stdin_text: Option<&str>,
    quiet: bool,
) -> Result<Option<KeywordReport>> {
    let Some(ref job_path) = config.job_description else {
        return Ok(None);
    };
    if docs.len() > 1 {
        if !quiet {
            eprintln!(
                "{}: --job only works with a single resume",
                "Warning".yellow()
            );
        }
        return Ok(None);
    }

    let job = ingest::load_document(job_path)
        .with_context(|| format!("Failed to load job description {}", job_path.display()))?;
    let resume = match stdin_text {
        Some(text) => text.to_string(),
        None => ingest::load_document(&docs[0].path)?,
    };

    let report = check_keywords(&job, &resume);
    if report.is_none() && !quiet {
        eprintln!(
            "{}: Job description or resume is empty; skipping keyword match",
            "Warning".yellow()
        );
    }
    Ok(report)
}

fn run_init(threshold: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let threshold_value = threshold.unwrap_or(70);

    match write_starter_config(dir, threshold_value) {
        Ok(config_path) => {
            println!(
                "{}: Created {} with threshold={}",
                "Done".green().bold(),
                config_path.display(),
                threshold_value
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if dir.join(resume_score::config::CONFIG_FILENAME).exists() => {
            eprintln!(
                "{}: {}; use --dir to write elsewhere or remove it first",
                "Warning".yellow(),
                e
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Err(e),
    }
}

fn run_history(clear: bool, json: bool, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let root = find_project_root(dir).unwrap_or_else(|| dir.to_path_buf());

    if clear {
        clear_history(&root)
            .with_context(|| format!("Failed to clear history in {}", root.display()))?;
        println!("{}: Cleared score history", "Done".green().bold());
        return Ok(ExitCode::SUCCESS);
    }

    let history = load_history(&root);
    if json {
        println!("{}", JsonReporter::new().pretty().report_history(&history));
    } else {
        ConsoleReporter::new().report_history(&history);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_watch(args: &Args, path: &Path, work_dir: &Path, config: &Config) -> Result<ExitCode> {
    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };
    let history_root = config
        .history_enabled()
        .then(|| find_project_root(work_dir).unwrap_or_else(|| work_dir.to_path_buf()));

    let engine = ScoringEngine::new();
    let reporter = console_reporter(args);

    let watcher = ResumeWatcher::watch(path, config.supported_extensions())
        .context("Failed to create file watcher")?;
    eprintln!("{}: Watching for changes... (Ctrl+C to stop)", "Info".blue());

    loop {
        let paths = watcher.next_changes();
        if paths.is_empty() {
            continue;
        }
        let filtered: Vec<PathBuf> = paths
            .into_iter()
            .filter(|p| {
                ignore_set
                    .as_ref()
                    .map(|set| !is_ignored(p, set))
                    .unwrap_or(true)
            })
            .collect();
        for path in filtered {
            match engine.analyze_document(&path) {
                Ok(doc) => {
                    let previous = history_root
                        .as_ref()
                        .and_then(|root| record_history(root, &doc.analysis));
                    if args.json {
                        println!("{}", JsonReporter::new().report(&doc, None));
                    } else if args.quiet {
                        reporter.report_quiet(&doc);
                    } else {
                        reporter.report(&doc, previous);
                    }
                }
                Err(e) => {
                    eprintln!("{}: {:#}", "Error".red(), anyhow::Error::from(e));
                }
            }
        }
    }
}
