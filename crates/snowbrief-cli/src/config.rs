//! Environment-driven configuration.
//!
//! The binary takes no arguments; everything is controlled by environment
//! variables (optionally loaded from `.env`):
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `XUEQIU_MCP_NOTE` | `Xueqiu MCP not configured` | diagnostic note attached by the stub source |
//! | `SNOWBRIEF_SOURCE` | `stub` | snapshot source (`stub`, `xueqiu`) |
//! | `SNOWBRIEF_PUBLISH_PLACEHOLDER` | `false` | publish placeholder snapshots instead of only logging them |
//! | `SNOWBRIEF_POST_COMMAND` | `bird` | posting tool program name |
//! | `SNOWBRIEF_LOG_DIR` | `logs` | fallback log directory |
//! | `SNOWBRIEF_UTC_OFFSET_HOURS` | `8` | assumed civil-time offset |

use std::path::PathBuf;

use thiserror::Error;

use snowbrief_core::{SnapshotSource, SourceId, StubSource};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{variable} must be an integer hour offset: '{value}'")]
    InvalidOffset {
        variable: &'static str,
        value: String,
    },
    #[error("{variable} must be a boolean (1/0/true/false): '{value}'")]
    InvalidBool {
        variable: &'static str,
        value: String,
    },
    #[error("invalid snapshot source '{value}', expected one of stub, xueqiu")]
    InvalidSource { value: String },
    #[error("snapshot source '{id}' is not wired to a backend yet")]
    SourceNotAvailable { id: SourceId },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub note: String,
    pub source: SourceId,
    pub publish_placeholder: bool,
    pub post_program: String,
    pub log_dir: PathBuf,
    pub utc_offset_hours: i8,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            note: var("XUEQIU_MCP_NOTE").unwrap_or_else(|| StubSource::DEFAULT_NOTE.to_owned()),
            source: parse_source(var("SNOWBRIEF_SOURCE"))?,
            publish_placeholder: parse_bool(
                "SNOWBRIEF_PUBLISH_PLACEHOLDER",
                var("SNOWBRIEF_PUBLISH_PLACEHOLDER"),
            )?,
            post_program: var("SNOWBRIEF_POST_COMMAND")
                .unwrap_or_else(|| snowbrief_core::CommandPublisher::DEFAULT_PROGRAM.to_owned()),
            log_dir: var("SNOWBRIEF_LOG_DIR")
                .map_or_else(|| PathBuf::from(snowbrief_core::FallbackLog::DEFAULT_DIR), PathBuf::from),
            utc_offset_hours: parse_offset(
                "SNOWBRIEF_UTC_OFFSET_HOURS",
                var("SNOWBRIEF_UTC_OFFSET_HOURS"),
            )?,
        })
    }

    /// Builds the configured snapshot source.
    pub fn snapshot_source(&self) -> Result<Box<dyn SnapshotSource>, ConfigError> {
        match self.source {
            SourceId::Stub => Ok(Box::new(StubSource::new(self.note.clone()))),
            SourceId::Xueqiu => Err(ConfigError::SourceNotAvailable {
                id: SourceId::Xueqiu,
            }),
        }
    }
}

/// Reads a variable, treating empty values as unset like the original
/// deployment did.
fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_source(value: Option<String>) -> Result<SourceId, ConfigError> {
    match value {
        None => Ok(SourceId::Stub),
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidSource { value: raw }),
    }
}

fn parse_bool(variable: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    match value.as_deref() {
        None => Ok(false),
        Some("1") | Some("true") | Some("TRUE") | Some("True") => Ok(true),
        Some("0") | Some("false") | Some("FALSE") | Some("False") => Ok(false),
        Some(other) => Err(ConfigError::InvalidBool {
            variable,
            value: other.to_owned(),
        }),
    }
}

fn parse_offset(variable: &'static str, value: Option<String>) -> Result<i8, ConfigError> {
    match value {
        None => Ok(snowbrief_core::MarketClock::DEFAULT_OFFSET_HOURS),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidOffset {
                variable,
                value: raw,
            }),
    }
}
