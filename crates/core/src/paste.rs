//! Boundary contracts for the clipboard and the form-filling agent.
//!
//! The concrete agent lives outside this repository (a browser extension
//! driving a third-party booking form); these traits pin down the
//! interface the core relies on. Everything crossing this boundary is
//! plain UTF-8 text, never structured clipboard data.

use async_trait::async_trait;

use crate::errors::SlotResult;

/// Async clipboard access.
///
/// Reads may fail with [`crate::errors::SlotError::EmptyClipboard`] when
/// the clipboard is empty or permission is denied; callers surface that
/// as a transient status message, with no retry loop.
#[async_trait]
pub trait Clipboard {
    async fn read_text(&self) -> SlotResult<String>;
    async fn write_text(&self, text: &str) -> SlotResult<()>;
}

/// Outcome of one best-effort paste-and-save pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteOutcome {
    /// Text was spliced into an eligible input field.
    pub pasted: bool,
    /// A save control was found and triggered. Finding one is
    /// best-effort; `false` here is a status, not an error.
    pub save_triggered: bool,
}

/// Agent that injects clipboard text into the focused text-input-like
/// element (or the first such element on the page), notifies host-page
/// frameworks of the change, then looks for a save control to click.
///
/// No eligible input field at all is
/// [`crate::errors::SlotError::TargetNotFound`].
#[async_trait]
pub trait PasteAgent {
    async fn paste_from_clipboard(&self) -> SlotResult<PasteOutcome>;
}
