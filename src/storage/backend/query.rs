//! Query operations for LinkStore
//!
//! This module contains all read-only database operations.

use sea_orm::{
    ColumnTrait, Condition, DbBackend, EntityTrait, ExprTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Alias, Expr, Func},
};
use tracing::{debug, trace};

use super::LinkStore;
use super::converters::model_to_link;
use super::retry;
use crate::errors::{Result, WeblinksError};
use crate::storage::{GroupCount, Link, LinkStats};

use migration::entities::link;

/// 分组聚合查询结果
#[derive(Debug, FromQueryResult)]
struct GroupRow {
    file_group: String,
    link_count: i64,
}

impl LinkStore {
    /// Point lookup. Absent ids yield `WeblinksError::NotFound`.
    pub async fn get(&self, id: i64) -> Result<Link> {
        let db = &self.db;

        let model = retry::with_retry(&format!("get({})", id), self.retry_config, || async {
            link::Entity::find_by_id(id).one(db).await
        })
        .await?;

        model
            .map(model_to_link)
            .ok_or_else(|| WeblinksError::not_found(format!("Link not found: {}", id)))
    }

    /// Every link in id order.
    pub async fn list_all(&self) -> Result<Vec<Link>> {
        self.find_ordered("list_all", Condition::all()).await
    }

    /// Links whose group equals `group` exactly (case-sensitive).
    pub async fn list_by_group(&self, group: &str) -> Result<Vec<Link>> {
        self.find_ordered(
            "list_by_group",
            Condition::all().add(link::Column::FileGroup.eq(group)),
        )
        .await
    }

    /// Links where `query` is a case-sensitive substring of the description,
    /// the tags or the URL. An empty query returns every link.
    pub async fn search(&self, query: &str) -> Result<Vec<Link>> {
        if query.is_empty() {
            return self.list_all().await;
        }

        let backend = self.db_backend();
        let condition = Condition::any()
            .add(substring_expr(backend, link::Column::Description, query))
            .add(substring_expr(backend, link::Column::Tags, query))
            .add(substring_expr(backend, link::Column::Url, query));

        self.find_ordered("search", condition).await
    }

    /// Distinct group names, sorted ascending.
    pub async fn distinct_groups(&self) -> Result<Vec<String>> {
        let db = &self.db;

        let groups = retry::with_retry("distinct_groups", self.retry_config, || async {
            link::Entity::find()
                .select_only()
                .column(link::Column::FileGroup)
                .distinct()
                .order_by_asc(link::Column::FileGroup)
                .into_tuple::<String>()
                .all(db)
                .await
        })
        .await?;

        trace!("distinct_groups: {} groups", groups.len());
        Ok(groups)
    }

    /// Number of stored links.
    pub async fn count(&self) -> Result<u64> {
        let db = &self.db;
        let count = retry::with_retry("count", self.retry_config, || async {
            link::Entity::find().count(db).await
        })
        .await?;
        Ok(count)
    }

    /// 聚合统计（单条 GROUP BY 查询，读取同一快照）
    pub async fn stats(&self) -> Result<LinkStats> {
        let db = &self.db;

        let rows = retry::with_retry("stats", self.retry_config, || async {
            link::Entity::find()
                .select_only()
                .column(link::Column::FileGroup)
                .column_as(link::Column::Id.count(), "link_count")
                .group_by(link::Column::FileGroup)
                .order_by_asc(link::Column::FileGroup)
                .into_model::<GroupRow>()
                .all(db)
                .await
        })
        .await?;

        let stats = aggregate_stats(rows);
        debug!(
            "stats: {} links in {} groups",
            stats.total_links, stats.total_groups
        );
        Ok(stats)
    }

    async fn find_ordered(&self, operation: &str, condition: Condition) -> Result<Vec<Link>> {
        let db = &self.db;

        let models = retry::with_retry(operation, self.retry_config, || async {
            link::Entity::find()
                .filter(condition.clone())
                .order_by_asc(link::Column::Id)
                .all(db)
                .await
        })
        .await?;

        trace!("{}: {} rows", operation, models.len());
        Ok(models.into_iter().map(model_to_link).collect())
    }
}

/// 大小写敏感的子串匹配。
///
/// 不使用 LIKE：SQLite 与 MySQL 的 LIKE 默认不区分大小写，且 `%` / `_` 需要转义。
/// NULL 列（如空 tags）永远不匹配。
fn substring_expr(backend: DbBackend, column: link::Column, needle: &str) -> Expr {
    let position = match backend {
        DbBackend::Postgres => Func::cust(Alias::new("strpos"))
            .arg(Expr::col(column))
            .arg(needle),
        DbBackend::MySql => Func::cust(Alias::new("INSTR"))
            .arg(Func::cast_as(Expr::col(column), Alias::new("BINARY")))
            .arg(Func::cast_as(needle, Alias::new("BINARY"))),
        _ => Func::cust(Alias::new("instr"))
            .arg(Expr::col(column))
            .arg(needle),
    };

    Expr::expr(position).gt(0)
}

fn row_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}

/// 汇总分组行。并列时取组名字典序最小者（行已按组名升序）。
fn aggregate_stats(rows: Vec<GroupRow>) -> LinkStats {
    let total_groups = rows.len() as u64;
    let total_links = rows.iter().map(|r| row_count(r.link_count)).sum();

    let most_populous = rows
        .into_iter()
        .map(|r| GroupCount {
            group: r.file_group,
            count: row_count(r.link_count),
        })
        .reduce(|best, candidate| {
            if candidate.count > best.count {
                candidate
            } else {
                best
            }
        });

    LinkStats {
        total_links,
        total_groups,
        most_populous,
    }
}
