//! Storefront command-line entry point.

use std::io::Write;
use std::process::ExitCode;

use app::Storefront;
use app::cli::{self, Cli};
use app::config::Config;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 1. Load configuration; the command line wins over the environment
    let mut config = Config::from_env();
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }

    // 2. Initialize tracing on stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // 3. Open the order history and run the command
    let result = Storefront::open(&config).and_then(|storefront| {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        cli::run(cli.command, &storefront, cli.json, &mut out)?;
        out.flush()?;
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = writeln!(std::io::stderr(), "error: {e}");
            ExitCode::FAILURE
        }
    }
}
