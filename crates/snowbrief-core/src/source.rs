use std::fmt::{Display, Formatter};
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::MarketSnapshot;

/// Canonical snapshot source identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    /// Deterministic placeholder data; the default until a live backend
    /// is wired up.
    Stub,
    /// The intended live backend (Xueqiu). Selectable by name so config
    /// does not change when the adapter lands, but not yet available.
    Xueqiu,
}

impl SourceId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stub => "stub",
            Self::Xueqiu => "xueqiu",
        }
    }
}

impl Display for SourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceId {
    type Err = SourceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stub" => Ok(Self::Stub),
            "xueqiu" => Ok(Self::Xueqiu),
            other => Err(SourceError::internal(format!(
                "unknown snapshot source '{other}', expected one of stub, xueqiu"
            ))),
        }
    }
}

/// Source-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Transport failure: endpoint unreachable, timeout.
    Unavailable,
    /// Credentials missing or rejected by the backend.
    Unauthorized,
    /// The backend answered but the payload did not match the contract.
    InvalidResponse,
    Internal,
}

/// Structured source error.
///
/// "No data" is never an error — empty rankings are a valid snapshot.
/// These errors mean the cycle could not obtain a snapshot at all, and the
/// caller decides whether to abort the cycle (the default) or degrade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unauthorized,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidResponse,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the next scheduled invocation is expected to succeed
    /// without operator intervention. There is no in-process retry; the
    /// external scheduling cadence is the retry mechanism.
    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::Unauthorized => "source.unauthorized",
            SourceErrorKind::InvalidResponse => "source.invalid_response",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Outcome of a successful fetch.
///
/// Placeholder snapshots carry stub rankings plus a diagnostic note; the
/// caller applies an explicit policy before publishing them anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Data(MarketSnapshot),
    Placeholder(MarketSnapshot),
}

impl FetchOutcome {
    pub const fn snapshot(&self) -> &MarketSnapshot {
        match self {
            Self::Data(snapshot) | Self::Placeholder(snapshot) => snapshot,
        }
    }

    pub fn into_snapshot(self) -> MarketSnapshot {
        match self {
            Self::Data(snapshot) | Self::Placeholder(snapshot) => snapshot,
        }
    }

    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// Snapshot source contract.
///
/// Async so a real backend can do network I/O; the rest of the cycle is
/// synchronous and does not care.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    fn id(&self) -> SourceId;
    async fn fetch(&self) -> Result<FetchOutcome, SourceError>;
}
