use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::StaticConfig;
use crate::storage::LinkStore;

pub struct StartupContext {
    pub store: Arc<LinkStore>,
}

/// 准备服务器启动的上下文：连接数据库并确保表结构存在
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let store = LinkStore::new(&config.database)
        .await
        .context("Failed to initialize link store")?;
    info!("Using storage backend: {}", store.backend_name());

    match store.count().await {
        Ok(count) => info!("Link store ready with {} links", count),
        Err(e) => warn!("Failed to count links at startup: {}", e),
    }

    debug!("Pre-startup processing completed in {:?}", start_time.elapsed());

    Ok(StartupContext {
        store: Arc::new(store),
    })
}
