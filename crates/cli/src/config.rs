//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BOUTIQUE_CART_DIR` - Directory the cart file is stored in
//!   (default: `.boutique`)
//! - `RUST_LOG` - Log filter for diagnostics (handled by
//!   `tracing-subscriber`)

use std::path::PathBuf;

use thiserror::Error;

/// Default storage directory, relative to the working directory.
const DEFAULT_CART_DIR: &str = ".boutique";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory the file-backed cart storage writes into.
    pub cart_dir: PathBuf,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `BOUTIQUE_CART_DIR` is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let cart_dir = match std::env::var("BOUTIQUE_CART_DIR") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "BOUTIQUE_CART_DIR".to_owned(),
                    "must not be empty".to_owned(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => PathBuf::from(DEFAULT_CART_DIR),
        };

        Ok(Self { cart_dir })
    }
}
