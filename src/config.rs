use std::fs;
use serde::Deserialize;
use config as config_rs;
use thiserror::Error;
use crate::chain::{Chain, CipherStep};
use crate::errors::AppError;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVEL_ENV: &str = "CLASSIC_CIPHERS_LOG";

#[derive(Debug, Deserialize)]
pub struct ChainConfig {
    pub steps: Vec<CipherStep>,
    pub log_level: String,
}

impl ChainConfig {
    pub fn build_chain(&self) -> Result<Chain, AppError> {
        Ok(Chain::new(self.steps.clone())?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
}

/// Reads the cipher steps from the JSON array at `path`. The log level is
/// layered: built-in default, then the environment, then `log_level`.
pub fn load_config(
    path: &str,
    log_level: &Option<String>,
) -> Result<ChainConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let steps: Vec<CipherStep> = serde_json::from_str(&content)?;

    let mut builder = config_rs::Config::builder()
        .set_default("log_level", DEFAULT_LOG_LEVEL)?;

    if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
        builder = builder.set_override("log_level", level)?;
    }
    if let Some(level) = log_level {
        builder = builder.set_override("log_level", level.clone())?;
    }

    let cfg = builder.build()?;

    Ok(ChainConfig {
        steps,
        log_level: cfg.get::<String>("log_level")?,
    })
}
