//! Core data types for the Deckhand presentation generator.
//!
//! Two groups of types live here:
//! - the oracle conversation types (`GenerateRequest`, `Message`, `Output`, ...)
//! - the presentation data model (`GenerationRequest`, `SectionContent`, `Generated`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generated;
mod input;
mod message;
mod output;
mod presentation;
mod request;
mod role;

pub use generated::Generated;
pub use input::Input;
pub use message::{Message, MessageBuilder};
pub use output::Output;
pub use presentation::{
    GenerationRequest, REQUIRED_FIELDS_MESSAGE, SectionContent, ValidatedRequest,
};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
