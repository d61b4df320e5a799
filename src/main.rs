//! Wordle Daily - CLI
//!
//! Prints the Wordle solution for today or a given date, pushes it to ntfy when
//! `NTFY_URL` is set and saves it to a file with `-w`.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wordle_daily::{
    api::{Notify, NtfyNotifier, SolutionFetcher, build_client},
    commands::{ReportOptions, run_daily},
    config::Config,
    core::resolve,
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Get the Wordle solution for today or any other day",
    version,
    author
)]
struct Cli {
    /// Puzzle date as DD-MM-YYYY or YYYY-MM-DD (default: today, UTC)
    date: Option<String>,

    /// Write the solution to <OUTPUT_DIR>/Wordle_Solution_<date>.txt
    #[arg(short, long)]
    write: bool,

    /// Directory for saved solutions (default: solutions, or $WORDLE_SOLUTIONS_DIR)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Puzzle service base URL (default: https://www.nytimes.com/, or $WORDLE_API_BASE)
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Fail when NTFY_URL is not set (or set WORDLE_REQUIRE_NTFY=1)
    #[arg(long)]
    require_notify: bool,

    /// Fail when the notification cannot be delivered (or set WORDLE_STRICT_NTFY=1)
    #[arg(long)]
    strict_notify: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    // A missing .env file is fine
    if let Some(error) = dotenv.err().filter(|error| !error.not_found()) {
        tracing::warn!(%error, "ignoring unreadable .env file");
    }

    let config = load_config(&cli)?;
    let date = resolve(cli.date.as_deref())?;
    let notify_url = config.notification_target()?.cloned();

    let http_client = build_client(config.timeout).context("Failed to build HTTP client")?;
    let fetcher = SolutionFetcher::new(config.api_base.clone(), http_client.clone());
    let notifier = notify_url.map(|url| NtfyNotifier::new(url, http_client));

    let options = ReportOptions {
        save_dir: cli.write.then(|| config.solutions_dir.clone()),
        notify_policy: config.notify_policy,
    };

    let mut stdout = io::stdout().lock();
    run_daily(
        &mut stdout,
        &fetcher,
        notifier.as_ref().map(|notifier| notifier as &dyn Notify),
        &date,
        &options,
    )
    .with_context(|| format!("Could not get the Wordle solution for {date}"))?;

    Ok(())
}

/// Environment first, then command line overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env().context("Invalid configuration in environment")?;

    if let Some(api_base) = &cli.api_base {
        config.set_api_base(api_base)?;
    }
    if let Some(dir) = &cli.output_dir {
        config.solutions_dir.clone_from(dir);
    }
    if let Some(secs) = cli.timeout {
        config.timeout = Duration::from_secs(secs);
    }
    config.notify_policy.required |= cli.require_notify;
    config.notify_policy.strict |= cli.strict_notify;

    Ok(config)
}

/// Logs go to stderr; `RUST_LOG` overrides the verbosity flag
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
