use sea_orm_migration::prelude::*;

use crate::m20251101_000001_links_table::Link;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 分组过滤、DISTINCT 与 GROUP BY 都走这个索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_links_file_group")
                    .table(Link::Table)
                    .col(Link::FileGroup)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_links_file_group")
                    .table(Link::Table)
                    .to_owned(),
            )
            .await
    }
}
