//! Diagnostic logging setup
//!
//! The console report owns stdout, so by default diagnostics go to stderr
//! at WARN. `HUNT_SMOKE_LOG_LEVEL`, `HUNT_SMOKE_LOG_FORMAT` (`human`|`json`)
//! and `HUNT_SMOKE_LOG_OUTPUT` (`stderr`|`stdout`) override that; `RUST_LOG`
//! directives still apply on top.

use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::fmt::{self, format::FmtSpan, writer::BoxMakeWriter};
use tracing_subscriber::{prelude::*, EnvFilter};

pub const LEVEL_VAR: &str = "HUNT_SMOKE_LOG_LEVEL";
pub const FORMAT_VAR: &str = "HUNT_SMOKE_LOG_FORMAT";
pub const OUTPUT_VAR: &str = "HUNT_SMOKE_LOG_OUTPUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format {:?}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
}

impl LogOutput {
    fn make_writer(self) -> BoxMakeWriter {
        match self {
            LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
            LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        }
    }
}

impl FromStr for LogOutput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(LogOutput::Stdout),
            "stderr" => Ok(LogOutput::Stderr),
            other => Err(format!("unknown log output {:?}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: Level,
    pub format: LogFormat,
    pub output: LogOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: LogFormat::Human,
            output: LogOutput::Stderr,
        }
    }
}

impl LoggingConfig {
    /// Build from a variable lookup; unset or unparsable values keep the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            level: parse_or(&lookup, LEVEL_VAR, defaults.level),
            format: parse_or(&lookup, FORMAT_VAR, defaults.format),
            output: parse_or(&lookup, OUTPUT_VAR, defaults.output),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or(default),
        None => default,
    }
}

/// Install the global subscriber; fails if one is already set
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env_lossy()
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    let layer = fmt::layer()
        .with_target(true)
        .with_writer(config.output.make_writer());
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Human => registry.with(layer).try_init()?,
        LogFormat::Json => registry
            .with(layer.json().with_span_events(FmtSpan::CLOSE))
            .try_init()?,
    }

    Ok(())
}

pub fn init_from_env() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(&LoggingConfig::from_env())
}
