mod file_config;

pub use file_config::FileConfig;

use crate::genius::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SEC};
use anyhow::{bail, Result};
use clap::ValueEnum;

/// How the binary prints results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub access_token: Option<String>,
    pub base_url: Option<String>,
    pub timeout_sec: u64,
    pub output: OutputFormat,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub output: OutputFormat,
}

/// Everything the HTTP transport needs. The token stays optional here;
/// building a resolver without one is what fails.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub access_token: Option<String>,
    pub timeout_sec: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            timeout_sec: DEFAULT_TIMEOUT_SEC,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let access_token = file
            .access_token
            .or_else(|| cli.access_token.clone())
            .filter(|token| !token.trim().is_empty());

        let base_url = file
            .base_url
            .or_else(|| cli.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            bail!("base_url must start with http:// or https://, got {:?}", base_url);
        }
        let base_url = base_url.trim_end_matches('/').to_string();

        let timeout_sec = file.timeout_sec.unwrap_or(cli.timeout_sec);
        if timeout_sec == 0 {
            bail!("timeout_sec must be greater than zero");
        }

        let output = file
            .output
            .and_then(|s| parse_output_format(&s))
            .unwrap_or(cli.output);

        Ok(Self {
            api: ApiSettings {
                base_url,
                access_token,
                timeout_sec,
            },
            output,
        })
    }
}

/// Parses an output format string into OutputFormat.
/// Uses clap's ValueEnum trait for parsing.
fn parse_output_format(s: &str) -> Option<OutputFormat> {
    OutputFormat::from_str(s, true).ok()
}
