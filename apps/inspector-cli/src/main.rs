//! Inspector binary
//!
//! User-facing output goes to stdout; logs go to stderr.

use clap::Parser;
use inspector_cli::cli::{Cli, Commands};
use inspector_cli::commands::{self, InspectOutcome};
use inspector_cli::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting inspector v{}", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Classify { category, json } => commands::classify(&category, json, &mut out),
        Commands::Checklist { category, json } => commands::checklist(&category, json, &mut out),
        Commands::Inspect(args) => {
            let config = Config::load(args.config.as_deref())?;
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            match commands::inspect(&args, &config, &mut input, &mut out)? {
                InspectOutcome::Submitted { items, .. } => {
                    tracing::debug!(items, "inspection submitted");
                }
                InspectOutcome::NotSubmitted => {
                    tracing::info!("inspection not submitted, no files written");
                }
            }
            Ok(())
        }
    }
}
