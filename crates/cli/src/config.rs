//! Command-line / environment configuration.

use std::time::Duration;

use anyhow::{Result, anyhow, ensure};
use clap::{Args, ValueEnum};
use omdb_client::{DEFAULT_BASE_URL, OmdbConfig};

/// Options shared by every subcommand, each with an env fallback.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// OMDb API key
    #[arg(long, env = "OMDB_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Base URL of the OMDb API
    #[arg(long, env = "OMDB_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "OMDB_TIMEOUT_SECS", default_value_t = 10, global = true)]
    timeout_secs: u64,

    /// Default log filter when RUST_LOG is not provided
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,

    /// How results are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored cards for humans
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Fully validated configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub omdb: OmdbConfig,
    pub log: LogConfig,
    pub format: OutputFormat,
}

/// Structured logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
}

impl TryFrom<GlobalArgs> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(value: GlobalArgs) -> Result<Self> {
        let api_key = value
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow!("an OMDb API key is required (--api-key or OMDB_API_KEY)"))?;
        ensure!(value.timeout_secs > 0, "--timeout-secs must be greater than zero");

        let omdb = OmdbConfig::new(api_key)
            .with_base_url(value.base_url)
            .with_timeout(Duration::from_secs(value.timeout_secs));

        Ok(Self {
            omdb,
            log: LogConfig {
                level: value.log_level,
            },
            format: value.format,
        })
    }
}
