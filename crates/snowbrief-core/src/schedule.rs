//! Session-hours scheduling gate.
//!
//! An external scheduler triggers the binary on a fixed cadence all day;
//! this module decides whether a given trigger falls inside the trading
//! session (morning window or afternoon window, excluding the lunch
//! recess). The decision is a pure function of the supplied time of day.

use time::Time;

use crate::ValidationError;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// Whether a scheduled invocation should proceed.
///
/// `Skip` is not an error: the caller exits quietly with status 0 without
/// fetching, composing, or writing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    Skip,
}

impl GateDecision {
    pub const fn proceeds(self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Trading-session windows as minutes since midnight local time.
///
/// Both sub-windows are inclusive on both ends: an invocation at exactly
/// the open, lunch-start, lunch-end, or close minute proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSchedule {
    open: u16,
    lunch_start: u16,
    lunch_end: u16,
    close: u16,
}

impl SessionSchedule {
    /// The A-share cash session: 09:15-11:30 and 13:00-15:00.
    pub const A_SHARE: Self = Self {
        open: 9 * 60 + 15,
        lunch_start: 11 * 60 + 30,
        lunch_end: 13 * 60,
        close: 15 * 60,
    };

    pub fn new(
        open: u16,
        lunch_start: u16,
        lunch_end: u16,
        close: u16,
    ) -> Result<Self, ValidationError> {
        for minutes in [open, lunch_start, lunch_end, close] {
            if minutes >= MINUTES_PER_DAY {
                return Err(ValidationError::SessionBoundaryOutOfRange { minutes });
            }
        }
        if !(open <= lunch_start && lunch_start <= lunch_end && lunch_end <= close) {
            return Err(ValidationError::UnorderedSessionBoundaries);
        }
        Ok(Self {
            open,
            lunch_start,
            lunch_end,
            close,
        })
    }

    /// Gate predicate for a local time of day.
    pub fn decide(&self, time: Time) -> GateDecision {
        let minutes = u16::from(time.hour()) * 60 + u16::from(time.minute());
        let morning = (self.open..=self.lunch_start).contains(&minutes);
        let afternoon = (self.lunch_end..=self.close).contains(&minutes);
        if morning || afternoon {
            GateDecision::Proceed
        } else {
            GateDecision::Skip
        }
    }
}

impl Default for SessionSchedule {
    fn default() -> Self {
        Self::A_SHARE
    }
}
