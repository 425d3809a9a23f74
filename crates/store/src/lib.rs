//! # SlotSync Store
//!
//! The remote document store boundary. A store keeps one document per
//! namespace and offers exactly two operations: a full-document replace
//! and a live subscription that delivers the current state immediately
//! and every subsequent change. Any key-value document store with those
//! semantics can sit behind [`SlotStore`]; this crate ships an in-memory
//! implementation and a mock for tests.

pub mod document;
pub mod memory;
pub mod mock;

use async_trait::async_trait;
use eyre::Result;
use tokio::sync::watch;

use crate::document::SlotDocument;

/// Live feed of a namespace's document. The receiver's initial value is
/// the state at subscription time (`None` when no document exists yet);
/// every write to the namespace publishes a new value.
pub type DocumentFeed = watch::Receiver<Option<SlotDocument>>;

#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Overwrites the namespace's document wholesale.
    ///
    /// This is a full replace, not a patch: concurrent writers on the
    /// same namespace silently clobber each other and the last write
    /// wins. Writers recover the authoritative state through their
    /// subscription, not through this call.
    async fn write(&self, namespace: &str, document: SlotDocument) -> Result<()>;

    /// Opens a live feed for the namespace.
    async fn subscribe(&self, namespace: &str) -> Result<DocumentFeed>;
}
