//! Configuration for the discmark CLI.
//!
//! Provides [`DiscmarkConfig`], loaded from TOML files, environment
//! variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `DISCMARK_CONFIG` environment variable
//! 3. XDG default: `~/.config/discmark/config.toml`
//! 4. Built-in defaults

use std::collections::BTreeMap;
use std::path::PathBuf;

use confyg::{Confygery, env};
use discmark_core::lookup::{UserDirectory, UserProfile};
use discmark_core::{DEFAULT_EMOJI_BASE_URL, Error, Renderer, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the discmark CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscmarkConfig {
    /// Rendering options.
    pub render: RenderConfig,

    /// Known users keyed by mention id.
    pub users: BTreeMap<String, UserProfile>,
}

/// Rendering options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Base URL for custom emoji images.
    pub emoji_base_url: String,

    /// Name shown for mentions missing from `users`. Unset means such
    /// mentions fail the render.
    pub unknown_user: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            emoji_base_url: DEFAULT_EMOJI_BASE_URL.to_string(),
            unknown_user: None,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl DiscmarkConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path)
            && path.exists()
        {
            builder
                .add_file(&path.to_string_lossy())
                .map_err(|e| Error::config(format!("config file: {e}")))?;
        }

        let mut env_opts = env::Options::with_top_level("DISCMARK");
        env_opts.add_section("render");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("DISCMARK_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("discmark").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Build the user directory from the `[users]` table.
    pub fn user_directory(&self) -> UserDirectory {
        self.users
            .iter()
            .map(|(id, profile)| (id.clone(), profile.clone()))
            .collect()
    }

    /// Build a renderer honouring the `[render]` options.
    pub fn renderer(&self) -> Renderer {
        Renderer::new().with_emoji_base_url(self.render.emoji_base_url.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================
