use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{SlotError, SlotResult};

/// First bookable hour of the day (inclusive).
pub const FIRST_HOUR: u8 = 8;
/// Last bookable hour of the day (inclusive); a slot covers one hour
/// starting on the hour.
pub const LAST_HOUR: u8 = 22;

/// A selectable one-hour unit of availability on the week grid.
///
/// Identity is the (date, hour) pair; time-of-day precision beyond the
/// starting hour does not exist. The derived `Ord` gives the canonical
/// chronological order: date ascending, then hour ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub date: NaiveDate,
    /// Starting hour, within `FIRST_HOUR..=LAST_HOUR`.
    pub hour: u8,
}

impl Slot {
    /// Builds a slot, rejecting hours outside the bookable range.
    pub fn new(date: NaiveDate, hour: u8) -> SlotResult<Self> {
        if !(FIRST_HOUR..=LAST_HOUR).contains(&hour) {
            return Err(SlotError::HourOutOfRange(hour));
        }
        Ok(Self { date, hour })
    }

    /// Stable identifier derived purely from (date, hour).
    ///
    /// Two slots with equal date and hour always produce equal ids, across
    /// process restarts; the id is never stored independently of its parts.
    pub fn id(&self) -> SlotId {
        SlotId(format!("{}-{}", self.date.format("%Y-%m-%d"), self.hour))
    }
}

/// Derived slot identifier, e.g. `2026-01-04-21`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(String);

impl SlotId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
