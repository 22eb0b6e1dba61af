//! Deckhand CLI binary.
//!
//! This binary provides command-line access to Deckhand:
//! - Serve the generation form over HTTP
//! - Render a single deck to disk

use clap::Parser;
use deckhand::{DeckhandConfig, ObservabilityConfig, init_observability};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_render_command, handle_serve_command};

    // GEMINI_API_KEY may live in .env
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = DeckhandConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    let observability = ObservabilityConfig::from_logging(config.logging())
        .with_verbose(cli.verbose)
        .with_json_logs(cli.json_logs);
    init_observability(&observability)?;

    // Execute the requested command
    match cli.command {
        Commands::Serve { host, port } => {
            handle_serve_command(config, host, port).await?;
        }

        Commands::Render {
            title,
            topic,
            output,
        } => {
            let path = handle_render_command(&config, &title, &topic, output).await?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
