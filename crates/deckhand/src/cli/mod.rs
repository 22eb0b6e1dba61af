//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the deckhand binary.

mod commands;
mod render;
mod serve;

pub use commands::{Cli, Commands};
pub use render::handle_render_command;
pub use serve::handle_serve_command;
