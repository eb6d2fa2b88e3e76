//! Discmark Core — Discord message markup to safe HTML.
//!
//! Converts archived Discord messages into HTML fragments for the site:
//! custom emoji markers (`<:name:id>`) become CDN images, user mentions
//! (`<@id>`) become `@name` via an injected asynchronous lookup, and all
//! other text is HTML-escaped.
//!
//! # Modules
//!
//! - [`token`]: The [`Token`] sum type
//! - [`tokenizer`]: Single-pass, infallible tokenizer
//! - [`escape`]: HTML escaping for free text
//! - [`lookup`]: The [`UserLookup`] capability and reusable providers
//! - [`renderer`]: Concurrent, order-preserving renderer
//! - [`error`]: Error types and Result alias

pub mod error;
pub mod escape;
pub mod lookup;
pub mod renderer;
pub mod token;
pub mod tokenizer;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use escape::escape_html;
pub use lookup::UserLookup;
pub use renderer::{DEFAULT_EMOJI_BASE_URL, Renderer, parse_message, render};
pub use token::Token;
pub use tokenizer::tokenize;
