//! Widget configuration.
//!
//! Priority: CLI flag > CLI env var > `CHAT_WIDGET_*` env > config file > defaults.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::widget::DEFAULT_HISTORY_LIMIT;

/// Backend the widget talks to when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Config file looked up in the working directory when `--config` is absent.
const DEFAULT_CONFIG_BASENAME: &str = "chat-widget";

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal host for the RAG chat widget", long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Chat backend base URL
    #[arg(long, env = "CHAT_API_URL")]
    pub api_url: Option<String>,

    /// Number of history turns sent as context
    #[arg(long)]
    pub history_limit: Option<usize>,

    /// Fail a request after this many seconds
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WidgetConfig {
    pub widget: WidgetSettings,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WidgetSettings {
    pub api_url: String,
    pub history_limit: usize,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Source(#[from] config::ConfigError),

    #[error("{0}")]
    Cli(#[from] clap::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl WidgetConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;

        // 1. Defaults
        let mut builder = Config::builder()
            .set_default("widget.api_url", DEFAULT_API_URL)?
            .set_default("widget.history_limit", DEFAULT_HISTORY_LIMIT as u64)?
            .set_default("logging.format", LogFormat::default().as_str())?;

        // 2. Config file: explicit path must exist, the cwd fallback may not
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false)),
        };

        // 3. Environment, e.g. CHAT_WIDGET_WIDGET__API_URL
        builder = builder.add_source(
            Environment::with_prefix("CHAT_WIDGET")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI overrides
        if let Some(url) = &cli.api_url {
            builder = builder.set_override("widget.api_url", url.as_str())?;
        }
        if let Some(limit) = cli.history_limit {
            builder = builder.set_override("widget.history_limit", limit as u64)?;
        }
        if let Some(secs) = cli.request_timeout_secs {
            builder = builder.set_override("widget.request_timeout_secs", secs)?;
        }
        if let Some(format) = cli.log_format {
            builder = builder.set_override("logging.format", format.as_str())?;
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.widget.api_url)
            .map_err(|e| ConfigError::Invalid(format!("api_url {:?}: {e}", self.widget.api_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "api_url must be http(s), got {:?}",
                url.scheme()
            )));
        }
        if self.widget.history_limit < 2 || self.widget.history_limit % 2 != 0 {
            return Err(ConfigError::Invalid(format!(
                "history_limit must be a positive even number of turns, got {}",
                self.widget.history_limit
            )));
        }
        Ok(())
    }

    /// Request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.widget.request_timeout_secs.map(Duration::from_secs)
    }
}
