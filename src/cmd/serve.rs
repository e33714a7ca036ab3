//! The `serve` subcommand.

use std::sync::Arc;

use clap::Parser;

use super::{Error, build_pipeline};
use crate::{config::AppConfig, http_server};

/// Arguments of the `serve` subcommand.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Directory holding `app.yaml`. Defaults to `configs`.
    #[arg(short, long)]
    pub config_dir: Option<String>,
}

/// Serves `/api/transfers` until the process is stopped.
pub async fn execute(args: ServeArgs) -> Result<(), Error> {
    tracing::debug!("Loading application configuration...");
    let config = AppConfig::new(args.config_dir.as_deref())?;
    tracing::debug!(server = ?config.server, pipeline = ?config.pipeline, "Configuration loaded.");

    let pipeline = Arc::new(build_pipeline(&config)?);

    http_server::run_server_from_config(&config.server, pipeline).await?;
    Ok(())
}
