//! The two clipboard text renderings of a selection.
//!
//! Both functions are pure and idempotent over the already-ordered
//! [`SlotSet`]; neither re-sorts its input.

use chrono::{Datelike, NaiveDate};

use crate::models::slot_set::SlotSet;

/// Circled-digit markers for list positions 1..=20. Positions beyond the
/// table fall back to the textual form `(n)` rather than failing.
const CIRCLED_DIGITS: [char; 20] = [
    '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩', '⑪', '⑫', '⑬', '⑭', '⑮', '⑯',
    '⑰', '⑱', '⑲', '⑳',
];

/// Japanese single-kanji day-of-week, indexed from Sunday.
const WEEKDAY_KANJI: [char; 7] = ['日', '月', '火', '水', '木', '金', '土'];

fn marker(position: usize) -> String {
    match position {
        1..=20 => CIRCLED_DIGITS[position - 1].to_string(),
        _ => format!("({position})"),
    }
}

fn weekday_kanji(date: NaiveDate) -> char {
    WEEKDAY_KANJI[date.weekday().num_days_from_sunday() as usize]
}

/// Messaging-app list format.
///
/// One line per slot in chronological order:
/// `①1/7(水) 21:00～`. An empty selection renders as the empty string;
/// the surrounding UI decides how to present "nothing selected".
pub fn list_format(slots: &SlotSet) -> String {
    slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            format!(
                "{}{}/{}({}) {}:00～",
                marker(index + 1),
                slot.date.month(),
                slot.date.day(),
                weekday_kanji(slot.date),
                slot.hour,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reservation-admin line format.
///
/// Slots are grouped by date under the unpadded key `YYYY-M-D`, one line
/// per date: `2026-1-4:21:00,22:00`. Grouping walks the sorted input and
/// keeps first-seen date order, so groups come out chronological without
/// ever sorting date keys as strings. A single-hour date uses the same
/// hour-list shape.
pub fn admin_format(slots: &SlotSet) -> String {
    let mut groups: Vec<(String, Vec<u8>)> = Vec::new();
    for slot in slots.iter() {
        let key = format!(
            "{}-{}-{}",
            slot.date.year(),
            slot.date.month(),
            slot.date.day()
        );
        match groups.last_mut() {
            Some((last_key, hours)) if *last_key == key => hours.push(slot.hour),
            _ => groups.push((key, vec![slot.hour])),
        }
    }

    groups
        .iter()
        .map(|(key, hours)| {
            let times = hours
                .iter()
                .map(|hour| format!("{hour}:00"))
                .collect::<Vec<_>>()
                .join(",");
            format!("{key}:{times}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
