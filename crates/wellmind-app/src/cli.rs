use std::path::PathBuf;

use clap::{Parser, Subcommand};

use wellmind_core::models::instrument::InstrumentId;

#[derive(Debug, Parser)]
#[command(name = "wellmind", version, about = "Score screening questionnaires and track their history")]
pub struct Cli {
    /// Path to the config file.
    #[arg(long, global = true, env = "WELLMIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a config file selecting where history is stored.
    Init {
        /// Local directory for assessment history.
        #[arg(long, conflicts_with = "bucket")]
        data_dir: Option<PathBuf>,
        /// Store history in this S3 bucket instead.
        #[arg(long, requires = "region")]
        bucket: Option<String>,
        #[arg(long)]
        region: Option<String>,
        /// Named AWS profile for the S3 backend.
        #[arg(long, requires = "bucket")]
        profile: Option<String>,
        /// Overwrite an existing config.
        #[arg(long)]
        force: bool,
    },
    /// List the supported instruments.
    Instruments,
    /// Show an instrument's items, response options and cutoffs.
    Show { instrument: InstrumentId },
    /// Score a submission (JSON file, or `-` for stdin) and save the result.
    Submit { input: String },
    /// List stored results, most recent first.
    History {
        #[arg(long)]
        instrument: Option<InstrumentId>,
        /// Only results completed at or after this time.
        #[arg(long)]
        since: Option<jiff::Timestamp>,
        /// Only results completed before this time.
        #[arg(long)]
        until: Option<jiff::Timestamp>,
    },
    /// Show the most recent result for an instrument.
    Latest { instrument: InstrumentId },
    /// Summarize how an instrument's scores are changing.
    Trend { instrument: InstrumentId },
    /// Re-score stored results with the current tables.
    Reinterpret {
        #[arg(long)]
        instrument: Option<InstrumentId>,
    },
    /// Permanently delete stored history.
    ClearHistory {
        #[arg(long)]
        instrument: Option<InstrumentId>,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}
