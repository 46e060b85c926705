use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Serialize;

/// Server configuration loaded from environment variables. Also reported
/// as the `config` member of the about document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Directories reported on the about page
    pub root_dir: PathBuf,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub crash_dir: PathBuf,

    /// Running as a system service rather than from a console.
    pub service: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Directories default to
    /// subdirectories of `TISMET_ROOT_DIR`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let root_dir = PathBuf::from(lookup("TISMET_ROOT_DIR").unwrap_or_else(|| ".".to_string()));
        let dir = |key: &str, default: &str| {
            lookup(key)
                .map(PathBuf::from)
                .unwrap_or_else(|| root_dir.join(default))
        };

        Ok(Self {
            web_host: lookup("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_port: lookup("WEB_PORT")
                .unwrap_or_else(|| "41000".to_string())
                .parse()
                .context("WEB_PORT must be a port number")?,
            data_dir: dir("TISMET_DATA_DIR", "data"),
            log_dir: dir("TISMET_LOG_DIR", "log"),
            crash_dir: dir("TISMET_CRASH_DIR", "crash"),
            service: parse_bool("TISMET_SERVICE", lookup("TISMET_SERVICE"))?,
            root_dir,
        })
    }
}

fn parse_bool(key: &str, value: Option<String>) -> Result<bool> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        other => bail!("{key} must be a boolean, got {other:?}"),
    }
}
