use std::io;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use version_watch::config::SiteConfig;
use version_watch::fetch::HttpFetcher;
use version_watch::report::run_check;
use version_watch::version::known::KnownVersions;

#[derive(Parser)]
#[command(name = "version-watch")]
#[command(version, about = "Cross-checks published release versions across web channels")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // The report owns stdout; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run());

    // Fetch and parse failures are reported inside the run; the process
    // still exits 0 so a partial report never looks like a crash.
    Ok(())
}

async fn run() {
    let site = SiteConfig::default();
    let known = KnownVersions::bundled();
    for version in known.duplicated_versions() {
        warn!("release-date table lists version {version} more than once; the first entry wins");
    }

    let fetcher = HttpFetcher::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run_check(&fetcher, &site, &known, &mut out).await {
        error!("failed to write report: {err}");
    }
}
