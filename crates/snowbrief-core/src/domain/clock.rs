use time::{Date, OffsetDateTime, UtcOffset};

use crate::ValidationError;

/// Wall clock pinned to a fixed civil-time offset.
///
/// The gate and the composer both reason in the exchange's local time.
/// Rather than reading the host's timezone state, callers construct one
/// `MarketClock` up front (default UTC+8, China Standard Time) and thread
/// the resulting timestamps through explicitly, so every predicate stays
/// testable for any timezone assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketClock {
    offset: UtcOffset,
}

impl MarketClock {
    /// China Standard Time, the offset the A-share session is quoted in.
    pub const DEFAULT_OFFSET_HOURS: i8 = 8;

    pub const fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    pub fn from_offset_hours(hours: i8) -> Result<Self, ValidationError> {
        let offset = UtcOffset::from_hms(hours, 0, 0)
            .map_err(|_| ValidationError::InvalidUtcOffset { hours })?;
        Ok(Self { offset })
    }

    /// Current instant expressed in the clock's civil time.
    pub fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }

    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl Default for MarketClock {
    fn default() -> Self {
        Self::from_offset_hours(Self::DEFAULT_OFFSET_HOURS)
            .unwrap_or(Self::new(UtcOffset::UTC))
    }
}

/// Formats a timestamp at minute precision, `YYYY-MM-DD HH:MM`.
pub fn format_minute(ts: OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        ts.year(),
        u8::from(ts.month()),
        ts.day(),
        ts.hour(),
        ts.minute()
    )
}

/// Formats a calendar day as an ISO date, `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
