use clap::{Parser, Subcommand};
use transfer_ranker::cmd::{FetchArgs, ServeArgs, fetch, serve};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serves the ranked transfers over HTTP.
    Serve(ServeArgs),
    /// Runs the pipeline once and prints the response JSON.
    Fetch(FetchArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    let subscriber =
        FmtSubscriber::builder().with_env_filter(EnvFilter::from_default_env()).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::execute(args).await?,
        Commands::Fetch(args) => fetch::execute(args).await?,
    }

    Ok(())
}
