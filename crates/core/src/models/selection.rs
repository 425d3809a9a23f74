use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::slot::Slot;
use crate::models::slot_set::SlotSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleRequest {
    pub date: NaiveDate,
    pub hour: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub date: NaiveDate,
    pub hour: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub namespace: String,
    pub count: usize,
    pub slots: Vec<SlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedTextResponse {
    pub count: usize,
    /// Messaging-app list format, one numbered line per slot.
    pub list: String,
    /// Reservation-admin line format, one line per date.
    pub admin: String,
}

impl SelectionResponse {
    /// Projects a slot set into the response shape, preserving the set's
    /// chronological order.
    pub fn from_slots(namespace: &str, slots: &SlotSet) -> Self {
        Self {
            namespace: namespace.to_string(),
            count: slots.len(),
            slots: slots
                .iter()
                .map(|slot: &Slot| SlotResponse {
                    date: slot.date,
                    hour: slot.hour,
                })
                .collect(),
        }
    }
}
