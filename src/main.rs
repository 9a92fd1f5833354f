use clap::Parser;
use tracing_subscriber::EnvFilter;

use pingme::config::{Cli, Commands};
use pingme::handler::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Telegram(args) => run(args).await?,
    }

    Ok(())
}
