// src/config.rs

use std::env;

use dotenvy::dotenv;
use url::Url;

use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the board API (also the push channel origin).
    pub api_url: Url,
    pub rust_log: String,
    /// Directory for the rolling log file.
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ClientError> {
        dotenv().ok();

        let api_url = env::var("BOARD_API_URL")
            .map_err(|_| ClientError::Config("BOARD_API_URL must be set".to_string()))?;
        let api_url = Url::parse(&api_url)?;

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("BOARD_LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        Ok(Self {
            api_url,
            rust_log,
            log_dir,
        })
    }
}
