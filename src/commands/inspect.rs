//! Interactive CloudTrail inspection command.
//!
//! Collects a log path and filters, runs the query pipeline, prints the
//! matching events as a time-sorted table and optionally shows the full JSON
//! of one event.
//!
//! # Usage
//!
//! ```bash
//! # Fully interactive: asks for the path, filters and the event to show
//! cloudtrail-inspector inspect
//!
//! # One event by id
//! cloudtrail-inspector inspect ~/logs --id 3f1c0d2e-0a4b-4c3e-9f5e-1b2c3d4e5f60
//!
//! # Nested filters, no prompts, CSV export
//! cloudtrail-inspector inspect ~/logs --no-prompt \
//!     --criteria '{"userIdentity": {"userName": "alice"}}' \
//!     --filter eventSource=s3.amazonaws.com --output alice.csv
//! ```
//!
//! # Configuration
//!
//! Options take precedence over environment variables, which take
//! precedence over defaults:
//!
//! - log path: `--path` / positional, then `CLOUDTRAIL_LOGS`, then a prompt
//!   defaulting to the current directory
//! - worker threads: `--jobs`, then `CLOUDTRAIL_INSPECTOR_JOBS`, then
//!   [`DEFAULT_JOBS`]

use crate::audit::archive::{discover, DEFAULT_JOBS};
use crate::audit::criteria::CriteriaSet;
use crate::audit::query::{self, CriteriaSource};
use crate::audit::types::SummaryRecord;
use crate::error::InspectError;
use crate::utils::format::{format_number, render_table, table_rows, TABLE_HEADERS};
use crate::utils::progress::ProgressBar;
use crate::utils::prompt::Prompter;
use anyhow::{anyhow, Context, Result};
use owo_colors::OwoColorize;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub const PATH_ENV: &str = "CLOUDTRAIL_LOGS";
pub const JOBS_ENV: &str = "CLOUDTRAIL_INSPECTOR_JOBS";

/// Everything the command line can say about one inspection
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    pub path: Option<String>,
    pub event_id: Option<String>,
    /// JSON object of expected values
    pub criteria: Option<String>,
    /// `key=value` pairs
    pub filters: Vec<String>,
    pub jobs: Option<usize>,
    /// CSV file receiving the table rows
    pub output: Option<String>,
    /// Event to show without asking
    pub details: Option<String>,
    pub no_prompt: bool,
    pub quiet: bool,
}

/// Worker count from `--jobs`, then the environment, then [`DEFAULT_JOBS`]
pub fn resolve_jobs(jobs: Option<usize>) -> Result<usize> {
    let jobs = match jobs {
        Some(jobs) => jobs,
        None => match env::var(JOBS_ENV) {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{JOBS_ENV} must be a positive integer, got {raw:?}"))?,
            Err(_) => DEFAULT_JOBS,
        },
    };

    if jobs == 0 {
        return Err(anyhow!("The number of jobs must be at least 1"));
    }
    Ok(jobs)
}

/// Log path from the options, then the environment, then the operator
pub fn resolve_path<R: BufRead, W: Write>(
    path: Option<&str>,
    prompter: Option<&mut Prompter<R, W>>,
) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(PathBuf::from(path));
    }
    if let Ok(path) = env::var(PATH_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    match prompter {
        Some(prompter) => Ok(PathBuf::from(prompter.ask_path(&cwd.to_string_lossy())?)),
        None => Ok(cwd),
    }
}

/// Split a `key=value` filter
pub fn parse_filter(raw: &str) -> Result<(String, String), InspectError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(InspectError::InvalidCriteria(format!(
            "filter {raw:?} is not of the form key=value"
        ))),
    }
}

/// Decide where the criteria come from. `--id` wins over `--criteria`, which
/// wins over `--filter`; with none of them the operator is asked.
pub fn criteria_source<R: BufRead, W: Write>(
    options: &InspectOptions,
    prompter: Option<&mut Prompter<R, W>>,
) -> Result<CriteriaSource> {
    if let Some(id) = &options.event_id {
        return Ok(CriteriaSource::EventId(id.clone()));
    }

    if let Some(raw) = &options.criteria {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| InspectError::InvalidCriteria(format!("--criteria is not valid JSON: {e}")))?;
        return Ok(CriteriaSource::Json(value));
    }

    if !options.filters.is_empty() {
        let mut set = CriteriaSet::new();
        for raw in &options.filters {
            let (key, value) = parse_filter(raw)?;
            set.insert(key, serde_json::Value::String(value));
        }
        return Ok(CriteriaSource::Set(set));
    }

    match prompter {
        Some(prompter) => Ok(CriteriaSource::Set(prompter.collect_criteria()?)),
        None => Ok(CriteriaSource::All),
    }
}

/// Write the table rows to `output` as CSV, headers first
pub fn export_csv(output: &str, summaries: &[SummaryRecord]) -> Result<()> {
    if let Some(parent) = Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).context("Failed to create output directory")?;
        }
    }

    let file = File::create(output).with_context(|| format!("Failed to create output file: {output}"))?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(TABLE_HEADERS)?;
    for row in table_rows(summaries) {
        writer.write_record(&row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Run the full inspection conversation on stdin/stderr, results on stdout
pub fn run(options: &InspectOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stderr());
    let interactive = !options.no_prompt;

    let jobs = resolve_jobs(options.jobs)?;
    let path = resolve_path(
        options.path.as_deref(),
        interactive.then_some(&mut prompter),
    )?;
    let files = discover(&path)?;

    let source = criteria_source(options, interactive.then_some(&mut prompter))?;

    let progress = if options.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(files.len(), "Parsing log files…")
    };
    let result = query::run_files(&files, source, jobs, |_| progress.inc());
    progress.finish_and_clear();
    let result = result?;

    if !options.quiet {
        eprintln!(
            "{} were fetched from your log files",
            format!("{} events", format_number(result.loaded)).bold()
        );
    }

    println!("{}", render_table(&result.summaries));

    if let Some(output) = &options.output {
        export_csv(output, &result.summaries)?;
        eprintln!(
            "[SUCCESS] Exported {} events to: {}",
            format_number(result.summaries.len()),
            output
        );
    }

    let selected = match &options.details {
        Some(id) => Some(id.clone()),
        None if interactive => prompter.ask_event_id()?,
        None => None,
    };

    if let Some(id) = selected {
        match result.find(&id) {
            Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
            None => eprintln!("No single event matches {}", id.dimmed()),
        }
    }

    Ok(())
}
