//! HTTP front end for Deckhand.
//!
//! Serves a landing page and turns `POST /generate` calls into `.pptx`
//! downloads:
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /` | HTML form |
//! | `GET /health` | `{"status":"ok"}` |
//! | `POST /generate` | deck bytes, or `{"error": ...}` with 400/500 |
//!
//! Each request runs the whole pipeline sequentially; requests share
//! nothing but the read-only [`AppState`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod handlers;
mod routes;
mod server;
mod state;

pub use config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
pub use error::ApiError;
pub use handlers::content_disposition;
pub use routes::create_router;
pub use server::serve;
pub use state::{AppState, BuiltDeck};
