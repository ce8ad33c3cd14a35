#![forbid(unsafe_code)]

//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The TUI owns the terminal, so logs only ever go to a file. Without a log
//! file no subscriber is installed and every `tracing` macro is a no-op.
//!
//! # Log Levels
//!
//! - `warn`: recoverable host issues (a failed refresh)
//! - `info`: startup, snapshot acquisition, session end
//! - `debug`: every navigation transition and focus change

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human-readable output.
    #[default]
    Pretty,
    /// Single-line output.
    Compact,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Configuration for the global subscriber.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    /// `EnvFilter` directives, e.g. `info` or `rgtui_nav=debug`.
    pub filter: String,
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: "info".into(),
            log_file: None,
        }
    }
}

/// Install the global subscriber. Returns `false` when logging is off.
///
/// # Errors
///
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> io::Result<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    init_logging_with_writer(config, Mutex::new(file))?;
    tracing::info!(path = %path.display(), format = ?config.format, "logging initialized");
    Ok(true)
}

/// Install the global subscriber writing to `writer`.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> io::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(&config.filter);
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(writer))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_ansi(false).with_writer(writer))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_ansi(false).with_writer(writer))
            .try_init(),
    };
    result.map_err(io::Error::other)
}

/// Parse `directives`, falling back to `info` when they do not parse.
fn build_env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}
