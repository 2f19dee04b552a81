//! Runtime configuration from the environment (and `.env` via dotenvy)

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration errors surfaced at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON catalog file; the embedded fixture is used when unset
    pub catalog_path: Option<PathBuf>,
    pub currency: String,
    pub catalog_refresh: Duration,
    pub rotation_interval: Duration,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any key lookup, so tests need not touch process env
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_number(&get, "PORT", 8080)?,
            catalog_path: get("CATALOG_PATH").map(PathBuf::from),
            currency: get("CURRENCY")
                .map(|c| c.trim().to_uppercase())
                .unwrap_or_else(|| "USD".to_string()),
            catalog_refresh: parse_secs(&get, "CATALOG_REFRESH_SECS", 600)?,
            rotation_interval: parse_secs(&get, "ROTATION_INTERVAL_SECS", 6)?,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T, F>(get: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}

fn parse_secs<F>(get: &F, name: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_number(get, name, default)? {
        0 => Err(ConfigError::Zero(name)),
        secs => Ok(Duration::from_secs(secs)),
    }
}
