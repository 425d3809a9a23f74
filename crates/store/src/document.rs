//! Wire shape of the per-namespace document.
//!
//! Dates arrive from the store in more than one shape depending on which
//! client wrote them: an epoch-milliseconds timestamp or a string (RFC
//! 3339 or a plain calendar date). The decode step here is the only
//! place that polymorphism exists; everything past it works with
//! [`Slot`] values.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use slotsync_core::errors::{SlotError, SlotResult};
use slotsync_core::models::slot::Slot;

/// The remote document: `{ "slots": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotDocument {
    #[serde(default)]
    pub slots: Vec<WireSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireSlot {
    pub date: WireDate,
    pub hour: u8,
}

/// A date as the store may hand it back.
///
/// `Other` absorbs any value that is neither shape so that one malformed
/// slot cannot fail deserialization of the whole document; it surfaces as
/// [`SlotError::UnrecognizedDate`] at decode time instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireDate {
    Millis(i64),
    Text(String),
    Other(serde_json::Value),
}

impl WireDate {
    /// Rehydrates the calendar date, whichever wire shape it took.
    pub fn to_date(&self) -> SlotResult<NaiveDate> {
        match self {
            WireDate::Millis(millis) => DateTime::from_timestamp_millis(*millis)
                .map(|instant| instant.date_naive())
                .ok_or_else(|| SlotError::UnrecognizedDate(millis.to_string())),
            WireDate::Text(text) => {
                if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
                    return Ok(instant.date_naive());
                }
                text.parse::<NaiveDate>()
                    .map_err(|_| SlotError::UnrecognizedDate(text.clone()))
            }
            WireDate::Other(value) => Err(SlotError::UnrecognizedDate(value.to_string())),
        }
    }
}

impl WireSlot {
    /// Decodes into a validated [`Slot`].
    pub fn decode(&self) -> SlotResult<Slot> {
        Slot::new(self.date.to_date()?, self.hour)
    }
}

impl From<&Slot> for WireSlot {
    /// Encodes for writing. This implementation always writes plain
    /// `YYYY-MM-DD` strings; decode stays liberal about what it accepts.
    fn from(slot: &Slot) -> Self {
        WireSlot {
            date: WireDate::Text(slot.date.format("%Y-%m-%d").to_string()),
            hour: slot.hour,
        }
    }
}
