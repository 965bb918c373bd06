use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inspector")]
#[command(
    version,
    about = "Consumer-agreement compliance inspections with PDF report and ICPS log"
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set. Quiet by default so log
    /// lines do not interleave with interactive prompts.
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the agreement types that apply to a business category
    Classify {
        category: String,
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the checklist for a business category
    Checklist {
        category: String,
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Run an inspection and emit the PDF report and ICPS log
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Default)]
pub struct InspectArgs {
    /// Configuration file (defaults to ./inspector.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Business file (TOML or JSON) with name, category and description
    #[arg(long)]
    pub business: Option<PathBuf>,

    /// Responses file (TOML or JSON) instead of prompting on stdin
    #[arg(long)]
    pub responses: Option<PathBuf>,

    /// PDF report path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// ICPS CSV log path
    #[arg(long)]
    pub log: Option<PathBuf>,
}
