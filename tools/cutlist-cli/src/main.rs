//! Cutlist CLI: command-line interface for timeline audits.
//!
//! Usage:
//!   cutlist extract <TIMELINE>   Extract an audit payload from a timeline snapshot
//!   cutlist report <PAYLOAD>     Render a Markdown cut list from an audit payload
//!   cutlist audit <TIMELINE>     Extract and render in one step
//!   cutlist acts                 Show the configured act table
//!   cutlist init                 Write a default config file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cutlist_common::config::AppConfig;
use cutlist_reporter::ReportOptions;

mod commands;

#[derive(Parser)]
#[command(
    name = "cutlist",
    about = "Audit a video-editing timeline and render it as a Markdown cut list",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/cutlist/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract an audit payload from a timeline snapshot
    Extract {
        /// Path to the timeline snapshot (JSON)
        timeline: PathBuf,

        /// Write the payload here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the payload
        #[arg(long)]
        pretty: bool,
    },

    /// Render a Markdown cut list from an audit payload
    Report {
        /// Path to the audit payload
        payload: PathBuf,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the report title
        #[arg(long)]
        title: Option<String>,
    },

    /// Extract and render in one step
    Audit {
        /// Path to the timeline snapshot (JSON)
        timeline: PathBuf,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the report title
        #[arg(long)]
        title: Option<String>,
    },

    /// Show the configured act table
    Acts,

    /// Write a default config file to the standard location
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?,
        None => AppConfig::load(),
    };

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    cutlist_common::logging::init_logging(&logging);

    let report_options = |title: Option<String>| {
        let mut options = ReportOptions::from(config.report.clone());
        if let Some(title) = title {
            options.title = title;
        }
        options
    };

    match cli.command {
        Commands::Extract {
            timeline,
            output,
            pretty,
        } => commands::extract::run(timeline, output, pretty),
        Commands::Report {
            payload,
            output,
            title,
        } => commands::report::run(payload, output, &report_options(title)),
        Commands::Audit {
            timeline,
            output,
            title,
        } => commands::audit::run(timeline, output, &report_options(title)),
        Commands::Acts => commands::acts::run(&report_options(None)),
        Commands::Init { force } => commands::init::run(force),
    }
}
