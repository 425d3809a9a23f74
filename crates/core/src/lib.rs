//! # SlotSync Core
//!
//! Domain types and pure logic for the SlotSync scheduling service:
//! slot identity, the ordered selection set, the two clipboard text
//! formats, and the shared error taxonomy. This crate performs no I/O.

pub mod errors;
pub mod format;
pub mod models;
pub mod paste;
