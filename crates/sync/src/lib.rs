//! # SlotSync Sync
//!
//! Reconciles a local [`SlotSet`] with the remotely persisted copy of one
//! namespace at a time. The store side is a live document feed; this
//! crate turns each snapshot into a hydrated, canonically ordered set and
//! hands it to the owner, replacing local state wholesale. Writes go the
//! other way as full-document replacements (last write wins).

pub mod hydrate;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use slotsync_core::errors::{SlotError, SlotResult};
use slotsync_core::models::slot_set::SlotSet;
use slotsync_store::SlotStore;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::hydrate::{encode, hydrate};

/// Per-namespace subscription and write-through against a [`SlotStore`].
///
/// At most one subscription is active per instance; subscribing to a new
/// namespace cancels the previous feed first, and a generation counter
/// guarantees a cancelled feed can never deliver a stale snapshot into
/// the new namespace's state.
pub struct SelectionSync {
    store: Arc<dyn SlotStore>,
    epoch: Arc<AtomicU64>,
    active: Option<JoinHandle<()>>,
}

impl SelectionSync {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        Self {
            store,
            epoch: Arc::new(AtomicU64::new(0)),
            active: None,
        }
    }

    /// Opens a live feed for `namespace`, delivering every snapshot to
    /// `on_update` as a freshly hydrated [`SlotSet`].
    ///
    /// The current state is delivered immediately; a namespace with no
    /// document yet delivers the empty set rather than leaving prior
    /// state in place. A transport failure while opening the feed is
    /// surfaced once as `Err` and the caller keeps its local-only state;
    /// nothing panics and nothing retries.
    pub async fn subscribe<F>(&mut self, namespace: &str, mut on_update: F)
    where
        F: FnMut(SlotResult<SlotSet>) + Send + 'static,
    {
        self.unsubscribe();
        let epoch = self.epoch.load(Ordering::SeqCst);
        let current = Arc::clone(&self.epoch);

        let mut feed = match self.store.subscribe(namespace).await {
            Ok(feed) => feed,
            Err(err) => {
                warn!(namespace, "subscription failed: {:#}", err);
                on_update(Err(SlotError::Store(err)));
                return;
            }
        };

        let namespace = namespace.to_string();
        let task = tokio::spawn(async move {
            loop {
                let snapshot = feed.borrow_and_update().clone();
                // Re-check the generation right before delivering: a feed
                // cancelled mid-flight must not touch the next
                // namespace's state.
                if current.load(Ordering::SeqCst) != epoch {
                    break;
                }
                let slots = snapshot.as_ref().map(hydrate).unwrap_or_default();
                on_update(Ok(slots));

                if feed.changed().await.is_err() {
                    debug!(%namespace, "document feed closed");
                    break;
                }
            }
        });
        self.active = Some(task);
    }

    /// Cancels the active subscription, if any. Safe to call repeatedly.
    pub fn unsubscribe(&mut self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        if let Some(task) = self.active.take() {
            task.abort();
        }
    }

    /// Serializes the full set and overwrites the namespace's document.
    ///
    /// Failure is returned to the caller and nothing is rolled back: the
    /// owner's optimistic local state may briefly diverge from the store,
    /// and the next toggle re-writes current state anyway.
    pub async fn write(&self, namespace: &str, slots: &SlotSet) -> SlotResult<()> {
        self.store
            .write(namespace, encode(slots))
            .await
            .map_err(SlotError::Store)
    }

    /// One-shot read of the namespace's current selection.
    pub async fn fetch(&self, namespace: &str) -> SlotResult<SlotSet> {
        let feed = self
            .store
            .subscribe(namespace)
            .await
            .map_err(SlotError::Store)?;
        let snapshot = feed.borrow().clone();
        Ok(snapshot.as_ref().map(hydrate).unwrap_or_default())
    }
}

impl Drop for SelectionSync {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
