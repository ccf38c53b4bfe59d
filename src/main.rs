use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use cloudtrail_inspector::commands::inspect::{self, InspectOptions};
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "cloudtrail-inspector")]
#[command(about = "Inspect compressed CloudTrail audit logs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, list and inspect the events of a CloudTrail archive directory
    ///
    /// Every *.gz bundle below PATH is loaded. Without --id, --criteria or
    /// --filter the filters are collected interactively.
    Inspect {
        /// Directory containing CloudTrail *.gz bundles (or a single bundle)
        #[arg(value_name = "PATH")]
        log_path: Option<String>,

        /// Same as PATH; takes precedence (default: $CLOUDTRAIL_LOGS or prompt)
        #[arg(long)]
        path: Option<String>,

        /// Only show the event with this eventID
        #[arg(long)]
        id: Option<String>,

        /// JSON object of expected values, nested objects allowed
        /// (e.g. '{"userIdentity":{"userName":"alice"}}')
        #[arg(long)]
        criteria: Option<String>,

        /// KEY=VALUE filter on a dot path; repeatable, all must match
        #[arg(short, long, value_name = "KEY=VALUE")]
        filter: Vec<String>,

        /// Archives decoded in parallel (default: $CLOUDTRAIL_INSPECTOR_JOBS or 8)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Also write the table rows to this CSV file
        #[arg(short, long)]
        output: Option<String>,

        /// Print the full JSON of this event without asking
        #[arg(long, value_name = "EVENT_ID")]
        details: Option<String>,

        /// Never prompt; missing answers fall back to defaults
        #[arg(long)]
        no_prompt: bool,

        /// Hide the progress bar and status lines
        #[arg(short, long)]
        quiet: bool,
    },

    /// Generate shell completion scripts
    GenerateCompletion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = dispatch(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Inspect {
            log_path,
            path,
            id,
            criteria,
            filter,
            jobs,
            output,
            details,
            no_prompt,
            quiet,
        } => inspect::run(&InspectOptions {
            path: path.or(log_path),
            event_id: id,
            criteria,
            filters: filter,
            jobs,
            output,
            details,
            no_prompt,
            quiet,
        }),
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "cloudtrail-inspector", &mut std::io::stdout());
            Ok(())
        }
    }
}
