use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};

use confsync::config::{
    DEFAULT_DATA_DIR, DEFAULT_IMPORT_PREFIX, DEFAULT_LISTING_URL, DEFAULT_LOADER_PATH,
    DEFAULT_TIMEOUT_SECS,
};
use confsync::{EmptyStage, RemoteFetcher, SyncConfig, SyncOutcome, Synchronizer};

#[derive(Parser, Debug)]
#[command(name = "sync_conferences")]
#[command(about = "Sync local conference data with the ccfddl upstream and regenerate the loader")]
struct Args {
    /// Upstream directory listing endpoint (repeatable)
    #[arg(
        long = "listing-url",
        env = "CONFSYNC_LISTING_URLS",
        value_delimiter = ',',
        default_value = DEFAULT_LISTING_URL
    )]
    listing_urls: Vec<String>,

    /// Directory holding one YAML file per conference
    #[arg(long, env = "CONFSYNC_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Generated TypeScript loader
    #[arg(long, env = "CONFSYNC_LOADER_PATH", default_value = DEFAULT_LOADER_PATH)]
    loader_path: PathBuf,

    /// Module path the loader imports group files from
    #[arg(long, env = "CONFSYNC_IMPORT_PREFIX", default_value = DEFAULT_IMPORT_PREFIX)]
    import_prefix: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "CONFSYNC_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Token for the GitHub API (raises the anonymous rate limit)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Dry run - report the merge without writing any file
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    fn into_config(self) -> SyncConfig {
        SyncConfig {
            listing_urls: self.listing_urls,
            data_dir: self.data_dir,
            loader_path: self.loader_path,
            import_prefix: self.import_prefix,
            timeout_secs: self.timeout_secs,
            github_token: self.github_token.filter(|t| !t.is_empty()),
            dry_run: self.dry_run,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Args::parse().into_config();
    config.validate().context("Invalid configuration")?;

    if config.dry_run {
        info!("Dry run: no files will be written");
    }

    let fetcher = RemoteFetcher::new(&config).context("Failed to set up upstream fetcher")?;
    let synchronizer = Synchronizer::new(config);

    let outcome = match synchronizer.run(&fetcher).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Error: {}", e);
            return Err(e).with_context(|| {
                format!(
                    "Conference sync into {} failed",
                    synchronizer.config().data_dir.display()
                )
            });
        }
    };

    match outcome {
        SyncOutcome::Completed(report) => {
            info!(
                "Fetched {}, transformed {}, wrote {} conference files",
                report.fetched,
                report.transformed,
                report.groups.len()
            );
        }
        SyncOutcome::Aborted(EmptyStage::Fetch) => {
            warn!("Nothing fetched upstream; local data left untouched");
        }
        SyncOutcome::Aborted(EmptyStage::Transform) => {
            warn!("No upcoming conferences upstream; local data left untouched");
        }
    }

    Ok(())
}
