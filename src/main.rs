use clap::Parser;
use showreel::cli::Cli;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting showreel v{}", env!("CARGO_PKG_VERSION"));

    // Handle the command
    cli.run().await?;

    Ok(())
}
