//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/linkcollector/config.toml)
//! 3. Environment variables (LINKCOLLECTOR_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::password::{DEFAULT_COST, MAX_COST, MIN_COST};

/// Environment variable prefix
const ENV_PREFIX: &str = "LINKCOLLECTOR";

/// Minimum length of a session secret, in bytes
pub const MIN_SESSION_SECRET_LEN: usize = 64;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Secret used to sign session cookies
    ///
    /// When unset, a random key is generated at startup and sessions do not
    /// survive a restart.
    #[serde(default)]
    pub session_secret: Option<String>,

    /// Whether to load the demo user and links on startup
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,

    /// bcrypt cost for new password hashes
    #[serde(default = "default_password_cost")]
    pub password_cost: u32,

    /// Log level for the linkcollector crates
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            session_secret: None,
            seed_demo: default_seed_demo(),
            password_cost: default_password_cost(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (LINKCOLLECTOR_HOST, LINKCOLLECTOR_PORT, ...)
    /// 2. Config file (~/.config/linkcollector/config.toml or LINKCOLLECTOR_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var(format!("{}_HOST", ENV_PREFIX)) {
            self.host = val;
        }

        if let Ok(val) = std::env::var(format!("{}_PORT", ENV_PREFIX)) {
            self.port = val
                .parse()
                .with_context(|| format!("Invalid {}_PORT: {:?}", ENV_PREFIX, val))?;
        }

        // Empty string clears it
        if let Ok(val) = std::env::var(format!("{}_SESSION_SECRET", ENV_PREFIX)) {
            self.session_secret = if val.is_empty() { None } else { Some(val) };
        }

        if let Ok(val) = std::env::var(format!("{}_SEED_DEMO", ENV_PREFIX)) {
            self.seed_demo = val.eq_ignore_ascii_case("true") || val == "1";
        }

        if let Ok(val) = std::env::var(format!("{}_LOG_LEVEL", ENV_PREFIX)) {
            self.log_level = val;
        }

        Ok(())
    }

    /// Reject values the server cannot start with
    fn validate(&self) -> Result<()> {
        if let Some(secret) = &self.session_secret {
            if secret.len() < MIN_SESSION_SECRET_LEN {
                bail!(
                    "session_secret must be at least {} bytes (got {})",
                    MIN_SESSION_SECRET_LEN,
                    secret.len()
                );
            }
        }
        if !(MIN_COST..=MAX_COST).contains(&self.password_cost) {
            bail!(
                "password_cost must be between {} and {}",
                MIN_COST,
                MAX_COST
            );
        }
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with LINKCOLLECTOR_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("linkcollector")
            .join("config.toml")
    }

    /// Socket address string for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_seed_demo() -> bool {
    true
}

fn default_password_cost() -> u32 {
    DEFAULT_COST
}

fn default_log_level() -> String {
    "info".to_string()
}
