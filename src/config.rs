// src/config.rs
use crate::source::{CsvSource, RowSource, SheetsAuth, SheetsSource, SourceError, DEFAULT_BASE_URL};
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "CONFIG_FILE";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug)]
pub enum ConfigError {
    Read(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(msg) => write!(f, "Failed to read config: {msg}"),
            ConfigError::Parse(msg) => write!(f, "Failed to parse config: {msg}"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: SocketAddr,
    #[serde(default = "default_workers")]
    pub max_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            max_workers: default_workers(),
        }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn default_workers() -> usize {
    8
}

/// Where the listing rows live. Credentials are never stored here, only the
/// name of the environment variable holding them.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    Csv {
        path: PathBuf,
    },
    Sheets {
        spreadsheet_id: String,
        sheet: String,
        #[serde(default)]
        api_key_env: Option<String>,
        #[serde(default)]
        bearer_token_env: Option<String>,
        #[serde(default)]
        base_url: Option<String>,
    },
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// `CONFIG_FILE`, falling back to `config.toml` in the working directory.
    pub fn path_from_env() -> PathBuf {
        std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}

impl SourceConfig {
    pub fn build(&self) -> Result<Box<dyn RowSource>, SourceError> {
        self.build_with_env(|name| std::env::var(name).ok())
    }

    /// Same as [`build`](Self::build) with the environment lookup injected.
    pub fn build_with_env<F>(&self, lookup: F) -> Result<Box<dyn RowSource>, SourceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match self {
            SourceConfig::Csv { path } => Ok(Box::new(CsvSource::new(path.clone()))),
            SourceConfig::Sheets {
                spreadsheet_id,
                sheet,
                api_key_env,
                bearer_token_env,
                base_url,
            } => {
                let read = |var: &str| {
                    lookup(var)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| SourceError::Credentials(format!("{var} is not set")))
                };

                let auth = match (bearer_token_env, api_key_env) {
                    (Some(var), _) => SheetsAuth::Bearer(read(var.as_str())?),
                    (None, Some(var)) => SheetsAuth::ApiKey(read(var.as_str())?),
                    (None, None) => {
                        return Err(SourceError::Credentials(
                            "set api_key_env or bearer_token_env".to_string(),
                        ))
                    }
                };

                let source = SheetsSource::new(
                    base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
                    spreadsheet_id.as_str(),
                    sheet.as_str(),
                    auth,
                )?;
                Ok(Box::new(source))
            }
        }
    }
}
