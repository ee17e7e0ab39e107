//! lumiara-import — push the static content file into the CMS
//!
//! Exit code 0 when every document was written, 1 on missing configuration
//! or on the first failed write.

use anyhow::Context;
use clap::Parser;
use lumiara_cms::{Config, DryRunStore, ImportReport, Importer};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "lumiara-import", version, about = "Import site content into the CMS")]
struct Args {
    /// Content file to import
    #[arg(long, env = "CONTENT_PATH", default_value = "src/data/content.json")]
    content: PathBuf,

    /// Log the documents instead of writing them (no credentials needed)
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumiara_cms=info,lumiara_import=info".into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(report) => {
            info!(documents = report.total(), "Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<ImportReport> {
    if args.dry_run {
        let importer = Importer::new(DryRunStore::new());
        return Ok(importer.run_path(&args.content).await?);
    }

    // Credentials are checked before the content file is touched
    let config = Config::from_env()
        .context("Please set SANITY_PROJECT_ID and SANITY_TOKEN in your environment")?;
    info!(
        project = %config.project_id,
        dataset = %config.dataset,
        "Importing into content store"
    );

    let client = config.build_http_client()?;
    let importer = Importer::new(client);
    let report = importer
        .run_path(&args.content)
        .await
        .with_context(|| format!("Import of {} failed", args.content.display()))?;

    Ok(report)
}
