//! Publisher boundary and the fallback-log delivery flow.
//!
//! Publishing is a pluggable capability with one operation, so alternate
//! delivery channels can be substituted without touching the gate or the
//! composer. The stock implementation shells out to the `bird` CLI; when
//! it fails the composed post is appended to a dated local log file for
//! manual recovery, and the run reports a distinct non-zero outcome.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use time::Date;

use crate::domain::format_date;

/// Separator written before each appended post.
const LOG_SEPARATOR: &str = "\n---\n";

/// Publish-attempt failures.
///
/// These are expected and recovered locally (via [`FallbackLog`]); only
/// the surrounding I/O errors are treated as unexpected.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("posting tool '{program}' could not be started: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("posting tool '{program}' exited with {status}")]
    CommandFailed {
        program: String,
        status: std::process::ExitStatus,
    },
}

/// Delivery channel contract: hand off one composed post.
pub trait Publisher {
    fn publish(&self, text: &str) -> Result<(), PublishError>;
}

/// Publishes by invoking an external posting tool as a subprocess.
///
/// Stdio is inherited so the tool's own interactive prompts (for example
/// an authentication flow) reach the operator directly. Authentication
/// state is entirely the tool's concern.
#[derive(Debug, Clone)]
pub struct CommandPublisher {
    program: String,
    subcommand: String,
}

impl CommandPublisher {
    pub const DEFAULT_PROGRAM: &'static str = "bird";
    pub const DEFAULT_SUBCOMMAND: &'static str = "tweet";

    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            subcommand: Self::DEFAULT_SUBCOMMAND.to_owned(),
        }
    }

    pub fn with_subcommand(mut self, subcommand: impl Into<String>) -> Self {
        self.subcommand = subcommand.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandPublisher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl Publisher for CommandPublisher {
    fn publish(&self, text: &str) -> Result<(), PublishError> {
        // status() inherits the parent's stdio by default.
        let status = Command::new(&self.program)
            .arg(&self.subcommand)
            .arg(text)
            .status()
            .map_err(|source| PublishError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PublishError::CommandFailed {
                program: self.program.clone(),
                status,
            })
        }
    }
}

/// Append-only fallback sink, one file per calendar day.
///
/// Each append writes `\n---\n<text>\n`. The file grows without bound and
/// appends are not locked; concurrent invocations are outside the
/// contract (the external scheduler is assumed to serialize runs).
#[derive(Debug, Clone)]
pub struct FallbackLog {
    dir: PathBuf,
}

impl FallbackLog {
    pub const DEFAULT_DIR: &'static str = "logs";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file for a given calendar day.
    pub fn file_for(&self, date: Date) -> PathBuf {
        self.dir.join(format!("tweet-{}.log", format_date(date)))
    }

    /// Appends one post, creating the directory and file as needed.
    /// Returns the path written to.
    pub fn append(&self, date: Date, text: &str) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.file_for(date);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(LOG_SEPARATOR.as_bytes())?;
        file.write_all(text.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(path)
    }
}

impl Default for FallbackLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIR)
    }
}

/// How a composed post left the process.
#[derive(Debug)]
pub enum PublishOutcome {
    /// The posting tool accepted the post; exit code 0.
    Published,
    /// The posting tool failed; the post was appended to the fallback log
    /// for manual recovery; exit code 2.
    FailedAndLogged {
        path: PathBuf,
        error: PublishError,
    },
    /// Policy kept a placeholder post off the wire; it was appended to the
    /// fallback log for operator review; exit code 0.
    LoggedOnly { path: PathBuf },
}

impl PublishOutcome {
    pub const fn published(&self) -> bool {
        matches!(self, Self::Published)
    }
}

/// Attempts publication, falling back to the dated log on failure.
///
/// Publish failures are absorbed into the returned outcome; only fallback
/// I/O errors propagate, since a post that can be neither published nor
/// logged is an unexpected failure.
pub fn deliver(
    text: &str,
    publisher: &dyn Publisher,
    fallback: &FallbackLog,
    date: Date,
) -> std::io::Result<PublishOutcome> {
    match publisher.publish(text) {
        Ok(()) => {
            tracing::info!("post published");
            Ok(PublishOutcome::Published)
        }
        Err(error) => {
            let path = fallback.append(date, text)?;
            tracing::warn!(path = %path.display(), %error, "publish failed, post logged");
            Ok(PublishOutcome::FailedAndLogged { path, error })
        }
    }
}
