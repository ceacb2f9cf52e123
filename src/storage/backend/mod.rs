//! SeaORM storage backend
//!
//! `LinkStore` owns the persisted link records. SQLite is the default medium;
//! MySQL/MariaDB and PostgreSQL URLs are accepted as well.

mod connection;
mod converters;
mod mutations;
mod query;
pub mod retry;

use std::time::Duration;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::{Result, WeblinksError};

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{model_to_link, new_link_to_active_model};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(WeblinksError::database_config(format!(
            "Cannot infer database type from URL: {}. Supported: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// 规范化 backend 名称
pub fn normalize_backend_name(backend: &str) -> String {
    match backend {
        "mariadb" => "mysql".to_string(),
        other => other.to_string(),
    }
}

/// Persistent link repository.
///
/// Cloning is cheap: clones share the same connection pool. Every operation
/// checks a connection out of the pool for the duration of the call only.
#[derive(Clone)]
pub struct LinkStore {
    db: DatabaseConnection,
    backend_name: String,
    retry_config: retry::RetryConfig,
}

impl LinkStore {
    /// Connect to the configured database and run `initialize()`.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let database_url = config.database_url.trim();
        if database_url.is_empty() {
            return Err(WeblinksError::database_config("database_url is empty"));
        }

        let backend_name = normalize_backend_name(&infer_backend_from_url(database_url)?);
        let timeout = Duration::from_secs(config.timeout.max(1));

        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url, config.pool_size, timeout).await?
        } else {
            connect_generic(database_url, &backend_name, config.pool_size, timeout).await?
        };

        let store = LinkStore {
            db,
            backend_name,
            retry_config: retry::RetryConfig {
                max_retries: config.retry_count,
                base_delay_ms: config.retry_base_delay_ms,
                max_delay_ms: config.retry_max_delay_ms,
            },
        };

        store.initialize().await?;

        info!(
            "{} link store initialized.",
            store.backend_name.to_uppercase()
        );
        Ok(store)
    }

    /// Ensure the schema exists. Safe to call on every startup: migrations are
    /// tracked and never drop existing data.
    pub async fn initialize(&self) -> Result<()> {
        run_migrations(&self.db).await
    }

    /// Close the connection pool.
    pub async fn close(self) -> Result<()> {
        self.db.close().await?;
        Ok(())
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    pub(crate) fn db_backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }
}
