//! Core contracts for snowbrief.
//!
//! This crate contains:
//! - Canonical domain models (market snapshot, ranked entries, clock)
//! - The session-hours scheduling gate
//! - The snapshot source trait and its stub adapter
//! - Post composition
//! - The publisher boundary with the fallback-log delivery flow

pub mod compose;
pub mod domain;
pub mod error;
pub mod publish;
pub mod schedule;
pub mod source;
pub mod sources;

pub use compose::{compose_post, MAX_RANKED_LINES};
pub use domain::{format_date, format_minute, MarketClock, MarketSnapshot, SectorEntry, TurnoverEntry};
pub use error::ValidationError;
pub use publish::{
    deliver, CommandPublisher, FallbackLog, PublishError, PublishOutcome, Publisher,
};
pub use schedule::{GateDecision, SessionSchedule};
pub use source::{FetchOutcome, SnapshotSource, SourceError, SourceErrorKind, SourceId};
pub use sources::StubSource;
