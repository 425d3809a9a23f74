//! Snapshot decoding and encoding between the wire document and the
//! canonical [`SlotSet`].

use slotsync_core::models::slot_set::SlotSet;
use slotsync_store::document::{SlotDocument, WireSlot};
use tracing::warn;

/// Rebuilds the canonical set from a remote snapshot.
///
/// A slot whose date is unrecognizable (or whose hour is out of range) is
/// skipped with a warning instead of aborting the whole load; the rest of
/// the document still hydrates. Ordering and uniqueness come from
/// [`SlotSet::replace`], never from the wire order.
pub fn hydrate(document: &SlotDocument) -> SlotSet {
    let mut slots = Vec::with_capacity(document.slots.len());
    for wire in &document.slots {
        match wire.decode() {
            Ok(slot) => slots.push(slot),
            Err(err) => warn!("skipping undecodable slot: {err}"),
        }
    }
    SlotSet::replace(slots)
}

/// Serializes the full set for a wholesale document write.
pub fn encode(slots: &SlotSet) -> SlotDocument {
    SlotDocument {
        slots: slots.iter().map(WireSlot::from).collect(),
    }
}
