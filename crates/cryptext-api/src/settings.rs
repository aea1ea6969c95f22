use std::fs;

use serde::Deserialize;

use crate::error::{AppError, Result};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub http: HttpCfg,
    #[serde(default)]
    pub limits: LimitsCfg,
}

#[derive(Debug, Deserialize)]
pub struct HttpCfg {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[derive(Debug, Deserialize)]
pub struct LimitsCfg {
    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl Default for LimitsCfg {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl Settings {
    pub fn load(config_path: &str) -> Result<Self> {
        let raw = fs::read_to_string(config_path)
            .map_err(|e| AppError::Config(format!("{}: {}", config_path, e)))?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| AppError::Config(e.to_string()))
    }
}
