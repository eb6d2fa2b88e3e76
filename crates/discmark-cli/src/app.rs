//! Discmark CLI application.
//!
//! Wires configuration, logging, and the core renderer together.

use std::path::Path;
use std::sync::Arc;

use discmark_core::lookup::FallbackLookup;
use discmark_core::{Error, Result, UserLookup, tokenize};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::DiscmarkConfig;
use crate::config_handlers;

// ============================================================================
// Discmark
// ============================================================================

/// The discmark command-line application.
pub struct Discmark {
    name: String,
    config: Arc<DiscmarkConfig>,
    version: String,
}

impl Discmark {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = DiscmarkConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    /// Create a new application around an already loaded config.
    pub fn new(name: impl Into<String>, config: DiscmarkConfig) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &DiscmarkConfig {
        &self.config
    }

    /// Initialise tracing-based logging on stderr.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(Command::Render { file, unknown_user }) => {
                let input = read_input(file.as_deref()).await?;
                let html = self.render(&input, unknown_user.as_deref()).await?;
                println!("{html}");
                Ok(())
            }
            Some(Command::Tokens { file }) => {
                let input = read_input(file.as_deref()).await?;
                println!("{}", tokens_json(&input)?);
                Ok(())
            }
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {} - use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }

    /// Render a message using the configured users and renderer.
    ///
    /// `unknown_user` overrides `render.unknown_user` from the config.
    pub async fn render(&self, input: &str, unknown_user: Option<&str>) -> Result<String> {
        let lookup = self.lookup(unknown_user);
        tracing::debug!(
            users = self.config.users.len(),
            bytes = input.len(),
            "rendering message"
        );
        self.config
            .renderer()
            .render_message(input, lookup.as_ref())
            .await
    }

    fn lookup(&self, unknown_user: Option<&str>) -> Box<dyn UserLookup> {
        let directory = self.config.user_directory();
        let fallback = unknown_user.or(self.config.render.unknown_user.as_deref());
        match fallback {
            Some(name) => Box::new(FallbackLookup::with_name(directory, name)),
            None => Box::new(directory),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Read the message from `file`, or stdin when no file is given.
async fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io_with_path(e, path)),
        None => {
            let mut input = String::new();
            tokio::io::stdin().read_to_string(&mut input).await?;
            Ok(input)
        }
    }
}

/// Pretty JSON dump of a message's tokens.
fn tokens_json(input: &str) -> Result<String> {
    serde_json::to_string_pretty(&tokenize(input)).map_err(|e| Error::serialization(e.to_string()))
}

// ============================================================================
// Tests
// ============================================================================
