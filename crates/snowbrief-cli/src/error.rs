use std::path::PathBuf;

use thiserror::Error;

use snowbrief_core::{PublishError, SourceError};

use crate::config::ConfigError;

/// CLI-level error categories mapped to exit codes.
///
/// Exit code 2 is reserved for the handled publish-failure fallback so
/// monitoring can distinguish it from an unexpected crash (code 1). A
/// gate-skipped cycle is not an error and exits 0.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] snowbrief_core::ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("snapshot fetch failed: {0}")]
    Source(#[from] SourceError),

    #[error("{source}; post saved to: {}", path.display())]
    PublishFailedAndLogged {
        #[source]
        source: PublishError,
        path: PathBuf,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::PublishFailedAndLogged { .. } => 2,
            Self::Validation(_) | Self::Config(_) | Self::Source(_) | Self::Io(_) => 1,
        }
    }
}
