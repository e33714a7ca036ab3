//! The `fetch` subcommand: one pipeline run, printed as JSON.

use clap::{Parser, ValueEnum};

use super::{Error, build_pipeline};
use crate::{
    config::{AppConfig, SelectionPolicy},
    models::TransfersResponse,
};

/// Command-line spelling of [`SelectionPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FetchSelection {
    /// Enrich the first logs in provider order, then rank.
    TruncateThenRank,
    /// Rank every decoded log, then enrich the largest.
    RankThenTruncate,
}

impl From<FetchSelection> for SelectionPolicy {
    fn from(selection: FetchSelection) -> Self {
        match selection {
            FetchSelection::TruncateThenRank => SelectionPolicy::TruncateThenRank,
            FetchSelection::RankThenTruncate => SelectionPolicy::RankThenTruncate,
        }
    }
}

/// Arguments of the `fetch` subcommand.
#[derive(Parser, Debug, Default)]
pub struct FetchArgs {
    /// Directory holding `app.yaml`. Defaults to `configs`.
    #[arg(short, long)]
    pub config_dir: Option<String>,
    /// Number of blocks to scan back from the head.
    #[arg(short, long)]
    pub block_window: Option<u64>,
    /// Overrides the configured selection policy.
    #[arg(short, long, value_enum)]
    pub selection: Option<FetchSelection>,
}

impl FetchArgs {
    /// Applies the command-line overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(window) = self.block_window {
            config.pipeline.block_window = window;
        }
        if let Some(selection) = self.selection {
            config.pipeline.selection = selection.into();
        }
    }
}

/// Runs the pipeline once and prints the response to stdout.
///
/// The failure body is printed too, but the command then returns an error so
/// the process exits non-zero.
pub async fn execute(args: FetchArgs) -> Result<(), Error> {
    let mut config = AppConfig::new(args.config_dir.as_deref())?;
    args.apply(&mut config);

    let pipeline = build_pipeline(&config)?;
    let settings = pipeline.config();
    tracing::info!(
        token = %settings.token_symbol,
        contract = %settings.contract_address,
        block_window = settings.block_window,
        selection = ?settings.selection,
        "Running one-shot fetch."
    );
    let response = pipeline.respond().await;

    println!("{}", serde_json::to_string_pretty(&response)?);

    match response {
        TransfersResponse::Ranked(_) => Ok(()),
        TransfersResponse::Failure(body) => Err(Error::RunFailed(body.details)),
    }
}
