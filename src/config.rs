use std::env;

use crate::error::{Error, Result};

/// Environment variable holding the Open Exchange Rates app id.
pub const API_KEY_VAR: &str = "FX_API_KEY";

pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Read the API key from the process environment, loading a `.env` file
    /// first if one exists. The only side effect is that read.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("loaded environment from {}", path.display());
        }
        match env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self { api_key: key }),
            _ => Err(Error::Configuration(format!(
                "{API_KEY_VAR} is not set; export it or add it to a .env file"
            ))),
        }
    }
}
