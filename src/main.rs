use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotsync_api::config::ApiConfig;
use slotsync_store::memory::MemoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create the backing document store
    let store = Arc::new(MemoryStore::new());

    // Start API server
    slotsync_api::start_server(config, store).await?;

    Ok(())
}
