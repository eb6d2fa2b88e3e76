//! CLI argument parsing and command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments for discmark.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "DISCMARK_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Commands understood by discmark.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a message to HTML on stdout.
    Render {
        /// Message file (reads stdin when omitted).
        file: Option<PathBuf>,

        /// Show unresolvable mentions as this name instead of failing.
        #[arg(long)]
        unknown_user: Option<String>,
    },

    /// Print the token sequence of a message as JSON.
    Tokens {
        /// Message file (reads stdin when omitted).
        file: Option<PathBuf>,
    },

    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Print the loaded configuration as TOML.
    Show,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "render.emoji_base_url").
        key: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_args_default() {
        let args = CliArgs::parse_from(["test"]);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_flags() {
        let args = CliArgs::parse_from(["test", "--verbose", "--config", "/etc/discmark.toml"]);
        assert!(args.verbose);
        assert_eq!(args.config.as_deref(), Some("/etc/discmark.toml"));

        let args = CliArgs::parse_from(["test", "-q"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_render_command_stdin() {
        let args = CliArgs::parse_from(["test", "render"]);
        match args.command {
            Some(Command::Render { file, unknown_user }) => {
                assert!(file.is_none());
                assert!(unknown_user.is_none());
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_render_command_file_and_fallback() {
        let args = CliArgs::parse_from([
            "test",
            "render",
            "message.txt",
            "--unknown-user",
            "Somebody",
        ]);
        match args.command {
            Some(Command::Render { file, unknown_user }) => {
                assert_eq!(file, Some(PathBuf::from("message.txt")));
                assert_eq!(unknown_user.as_deref(), Some("Somebody"));
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_tokens_command() {
        let args = CliArgs::parse_from(["test", "tokens", "m.txt"]);
        match args.command {
            Some(Command::Tokens { file }) => assert_eq!(file, Some(PathBuf::from("m.txt"))),
            _ => panic!("Expected Tokens command"),
        }
    }

    #[test]
    fn test_version_command() {
        let args = CliArgs::parse_from(["test", "version"]);
        assert!(matches!(args.command, Some(Command::Version)));
    }

    #[test]
    fn test_config_get_command() {
        let args = CliArgs::parse_from(["test", "config", "get", "render.emoji_base_url"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Get { key },
            })) => assert_eq!(key, "render.emoji_base_url"),
            _ => panic!("Expected Config Get command"),
        }
    }

    #[test]
    fn test_config_init_force() {
        let args = CliArgs::parse_from(["test", "config", "init", "--force"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Init { file, force },
            })) => {
                assert!(file.is_none());
                assert!(force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }
}
