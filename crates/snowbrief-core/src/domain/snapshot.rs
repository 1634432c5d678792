use serde::{Deserialize, Serialize};

/// Instrument ranked by traded value.
///
/// `turnover` is kept as display text (for example `12.3亿`); the ranking
/// itself is the source's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnoverEntry {
    /// Exchange symbol; may be empty, in which case rendering omits the
    /// parenthesised segment entirely.
    pub symbol: String,
    pub name: String,
    pub turnover: String,
}

impl TurnoverEntry {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        turnover: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            turnover: turnover.into(),
        }
    }
}

/// Sector/board ranked by percentage change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorEntry {
    pub name: String,
    pub pct: String,
}

impl SectorEntry {
    pub fn new(name: impl Into<String>, pct: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pct: pct.into(),
        }
    }
}

/// One invocation's worth of market summary data.
///
/// Produced fresh by a [`crate::SnapshotSource`], immutable once built,
/// discarded after composition. Sources conventionally cap each list at 10
/// entries, but any non-negative lengths are valid — empty lists are data,
/// not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub turnover_top: Vec<TurnoverEntry>,
    pub sector_top: Vec<SectorEntry>,
    /// Diagnostic note from the source, surfaced when the snapshot carries
    /// placeholder rather than live data.
    pub note: Option<String>,
}

impl MarketSnapshot {
    pub fn new(turnover_top: Vec<TurnoverEntry>, sector_top: Vec<SectorEntry>) -> Self {
        Self {
            turnover_top,
            sector_top,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
