//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gradebook_core::config::{load_config_from, StoreConfig};

mod commands;
mod table;

#[derive(Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Record student exam marks and export grade reports"
)]
struct Cli {
    /// Config file path (default: ./gradebook.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Records file, overrides config
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// CSV report file, overrides config
    #[arg(long, global = true)]
    report: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and use the interactive menu (default)
    Shell,

    /// Add one student record
    Add {
        /// Roll number
        #[arg(long, allow_negative_numbers = true)]
        roll: i64,

        /// Student name
        #[arg(long)]
        name: String,

        /// English mark
        #[arg(long, required_unless_present = "absent")]
        english: Option<f64>,

        /// Maths mark
        #[arg(long, required_unless_present = "absent")]
        maths: Option<f64>,

        /// Science mark
        #[arg(long, required_unless_present = "absent")]
        science: Option<f64>,

        /// Student missed the exam; all marks are recorded as zero
        #[arg(long, conflicts_with_all = ["english", "maths", "science"])]
        absent: bool,
    },

    /// Show all records with their grades
    List,

    /// Export the CSV report
    Export {
        /// Report path, overrides --report and config
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Create a starter gradebook.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gradebook_core=warn,gradebook_cli=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = || resolve_config(cli.config, cli.data, cli.report);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::shell::execute(config()?),
        Commands::Add {
            roll,
            name,
            english,
            maths,
            science,
            absent,
        } => commands::add::execute(config()?, roll, name, english, maths, science, absent),
        Commands::List => commands::list::execute(config()?),
        Commands::Export { output } => commands::export::execute(config()?, output),
        Commands::Init => commands::init::execute(),
    }
}

fn resolve_config(
    config_path: Option<PathBuf>,
    data: Option<PathBuf>,
    report: Option<PathBuf>,
) -> Result<StoreConfig> {
    let mut config = load_config_from(config_path.as_deref())?;
    tracing::debug!(?config, "loaded config");
    if let Some(data) = data {
        config.data_path = data;
    }
    if let Some(report) = report {
        config.report_path = report;
    }
    Ok(config)
}
