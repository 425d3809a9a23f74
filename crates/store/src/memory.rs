use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use eyre::Result;
use tokio::sync::watch;
use tracing::debug;

use crate::document::SlotDocument;
use crate::{DocumentFeed, SlotStore};

/// In-memory document store.
///
/// One `watch` channel per namespace, created lazily on first write or
/// subscribe. `watch` gives exactly the required feed semantics: a new
/// receiver starts at the current value and observes the latest state
/// after every write (intermediate states may be conflated, which is fine
/// for wholesale snapshot replacement).
#[derive(Debug, Default)]
pub struct MemoryStore {
    namespaces: Mutex<HashMap<String, watch::Sender<Option<SlotDocument>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SlotStore for MemoryStore {
    async fn write(&self, namespace: &str, document: SlotDocument) -> Result<()> {
        let mut namespaces = self.namespaces.lock().expect("namespace map poisoned");
        let sender = namespaces
            .entry(namespace.to_string())
            .or_insert_with(|| watch::channel(None).0);
        // send_replace publishes even with zero subscribers.
        sender.send_replace(Some(document));
        debug!(namespace, "document replaced");
        Ok(())
    }

    async fn subscribe(&self, namespace: &str) -> Result<DocumentFeed> {
        let mut namespaces = self.namespaces.lock().expect("namespace map poisoned");
        let sender = namespaces
            .entry(namespace.to_string())
            .or_insert_with(|| watch::channel(None).0);
        Ok(sender.subscribe())
    }
}
