use async_trait::async_trait;

use crate::domain::{MarketSnapshot, SectorEntry, TurnoverEntry};
use crate::source::{FetchOutcome, SnapshotSource, SourceError, SourceId};

/// Number of entries a source conventionally returns per ranking.
pub const RANKING_DEPTH: usize = 10;

/// Deterministic placeholder source.
///
/// Stands in for the live backend until its invocation details are known.
/// Always succeeds, always returns `FetchOutcome::Placeholder` with ten
/// stub entries per ranking and a diagnostic note, so the downstream flow
/// can be exercised end to end without credentials.
#[derive(Debug, Clone)]
pub struct StubSource {
    note: String,
}

impl StubSource {
    /// Note attached when configuration supplies none.
    pub const DEFAULT_NOTE: &'static str = "Xueqiu MCP not configured";

    pub fn new(note: impl Into<String>) -> Self {
        Self { note: note.into() }
    }
}

impl Default for StubSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NOTE)
    }
}

#[async_trait]
impl SnapshotSource for StubSource {
    fn id(&self) -> SourceId {
        SourceId::Stub
    }

    async fn fetch(&self) -> Result<FetchOutcome, SourceError> {
        let turnover_top = (1..=RANKING_DEPTH)
            .map(|rank| TurnoverEntry::new(format!("STUB{rank}"), format!("StubStock{rank}"), "-"))
            .collect();
        let sector_top = (1..=RANKING_DEPTH)
            .map(|rank| SectorEntry::new(format!("StubSector{rank}"), "-"))
            .collect();

        let snapshot = MarketSnapshot::new(turnover_top, sector_top).with_note(self.note.clone());
        Ok(FetchOutcome::Placeholder(snapshot))
    }
}
