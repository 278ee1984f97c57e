use std::env;

use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub vault_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: env::var("HEVY_API_KEY")
                .map_err(|_| AppError::Config("HEVY_API_KEY is not set".to_string()))?,
            api_base: env::var("HEVY_API_BASE")
                .unwrap_or_else(|_| "https://api.hevyapp.com".to_string()),
            vault_dir: env::var("HEVY_VAULT_DIR").unwrap_or_else(|_| "hevy".to_string()),
        })
    }
}
