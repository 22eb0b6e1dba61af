//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Deckhand - PowerPoint decks from a title and a topic
#[derive(Parser, Debug)]
#[command(name = "deckhand")]
#[command(about = "Generate PowerPoint decks from a title and topic", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file applied after the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the form and the generation endpoint over HTTP
    Serve {
        /// Interface to bind (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides configuration)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate one deck and write it to disk
    Render {
        /// Presentation title
        #[arg(long)]
        title: String,

        /// Presentation topic
        #[arg(long)]
        topic: String,

        /// Output path (defaults to the download filename)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_accepts_overrides_and_global_flags() {
        let cli = Cli::try_parse_from([
            "deckhand", "serve", "--host", "0.0.0.0", "--port", "8080", "-v", "--json-logs",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.json_logs);
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn render_requires_title_and_topic() {
        assert!(Cli::try_parse_from(["deckhand", "render", "--title", "T"]).is_err());
        let cli = Cli::try_parse_from([
            "deckhand", "render", "--title", "T", "--topic", "X", "-o", "out.pptx",
        ])
        .unwrap();
        match cli.command {
            Commands::Render { output, .. } => {
                assert_eq!(output, Some(PathBuf::from("out.pptx")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
