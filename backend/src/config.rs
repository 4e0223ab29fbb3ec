//! Server configuration read from `STOREFRONT_*` environment variables.
//!
//! Every setting has a default so the server starts with no environment at
//! all; each default that is used is logged once at startup.

use log::info;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("invalid value `{value}` for {key}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file holding the `products` and `hero_slides` collections.
    pub database_path: PathBuf,
    /// Root directory of the blob store, served under `/media`.
    pub storage_dir: PathBuf,
    pub upload_limit_mb: usize,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load(&lookup, "STOREFRONT_HOST", "127.0.0.1")?,
            port: try_load(&lookup, "STOREFRONT_PORT", "8080")?,
            database_path: try_load(&lookup, "STOREFRONT_DB", "storefront.sqlite")?,
            storage_dir: try_load(&lookup, "STOREFRONT_STORAGE_DIR", "storage")?,
            upload_limit_mb: try_load(&lookup, "STOREFRONT_UPLOAD_LIMIT_MB", "20")?,
        })
    }

    pub fn upload_limit_bytes(&self) -> usize {
        self.upload_limit_mb.saturating_mul(1024 * 1024)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.trim().parse().map_err(|e: T::Err| ConfigError {
        key,
        value: value.clone(),
        reason: e.to_string(),
    })
}
