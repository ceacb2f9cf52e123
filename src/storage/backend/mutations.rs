//! Mutation operations for LinkStore
//!
//! This module contains all write database operations. Each one is a single
//! statement, so a record is never observed half-written.

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use tracing::{debug, info};

use super::LinkStore;
use super::converters::new_link_to_active_model;
use super::retry;
use crate::errors::Result;
use crate::storage::NewLink;

use migration::entities::link;

impl LinkStore {
    /// Insert a new link and return its assigned id.
    pub async fn create(&self, new_link: NewLink) -> Result<i64> {
        let db = &self.db;
        let active_model = new_link_to_active_model(&new_link);

        let result = retry::with_retry("create", self.retry_config, || async {
            link::Entity::insert(active_model.clone()).exec(db).await
        })
        .await?;

        let id = result.last_insert_id;
        info!("Link created: {} ({})", id, new_link.url);
        Ok(id)
    }

    /// Replace all four fields of link `id`. Unknown ids are a silent no-op.
    pub async fn update(&self, id: i64, new_link: NewLink) -> Result<()> {
        let db = &self.db;
        let active_model = new_link_to_active_model(&new_link);

        let result = retry::with_retry(&format!("update({})", id), self.retry_config, || async {
            link::Entity::update_many()
                .set(active_model.clone())
                .filter(link::Column::Id.eq(id))
                .exec(db)
                .await
        })
        .await?;

        if result.rows_affected == 0 {
            debug!("Update of link {} affected no rows", id);
        } else {
            info!("Link updated: {}", id);
        }
        Ok(())
    }

    /// Remove link `id` if present. Unknown ids are a no-op.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let db = &self.db;

        let result = retry::with_retry(&format!("delete({})", id), self.retry_config, || async {
            link::Entity::delete_by_id(id).exec(db).await
        })
        .await?;

        if result.rows_affected == 0 {
            debug!("Delete of link {} affected no rows", id);
        } else {
            info!("Link deleted: {}", id);
        }
        Ok(())
    }
}
