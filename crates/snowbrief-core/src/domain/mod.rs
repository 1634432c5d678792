//! Canonical domain types for the snowbrief cycle.

mod clock;
mod snapshot;

pub use clock::{format_date, format_minute, MarketClock};
pub use snapshot::{MarketSnapshot, SectorEntry, TurnoverEntry};
