use async_trait::async_trait;
use eyre::Result;
use mockall::mock;

use crate::document::SlotDocument;
use crate::{DocumentFeed, SlotStore};

// Mock store for testing transport failures and subscription behavior
// without a real backend.
mock! {
    pub Store {}

    #[async_trait]
    impl SlotStore for Store {
        async fn write(&self, namespace: &str, document: SlotDocument) -> Result<()>;
        async fn subscribe(&self, namespace: &str) -> Result<DocumentFeed>;
    }
}
