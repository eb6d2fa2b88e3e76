//! Command-line renderer for Discord message markup.
//!
//! Renders archived Discord messages to HTML fragments for the site build,
//! resolving mentions from a `[users]` table in the configuration.
//!
//! # Key Abstractions
//!
//! - [`CliArgs`]: clap-derived arguments and subcommands
//! - [`DiscmarkConfig`]: layered configuration (file, env, defaults)
//! - [`Discmark`]: the application, dispatching commands

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;

pub use app::Discmark;
pub use cli::{CliArgs, Command};
pub use config::DiscmarkConfig;
