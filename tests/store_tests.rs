//! LinkStore tests
//!
//! Every test runs against its own temporary SQLite database.

use tempfile::TempDir;
use weblinks::config::DatabaseConfig;
use weblinks::errors::WeblinksError;
use weblinks::storage::backend::{infer_backend_from_url, normalize_backend_name};
use weblinks::storage::{Link, LinkStore, NewLink};

fn db_url(temp_dir: &TempDir) -> String {
    format!("sqlite://{}?mode=rwc", temp_dir.path().join("links.db").display())
}

/// 创建临时 SQLite 数据库的 store
async fn create_temp_store() -> (LinkStore, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = LinkStore::new(&DatabaseConfig::with_url(db_url(&temp_dir)))
        .await
        .expect("Failed to create store");
    (store, temp_dir)
}

fn new_link(description: &str, tags: Option<&str>, url: &str, group: &str) -> NewLink {
    NewLink::new(description, tags, url, group)
}

fn ids(links: &[Link]) -> Vec<i64> {
    links.iter().map(|l| l.id).collect()
}

// =============================================================================
// URL 推断
// =============================================================================

#[cfg(test)]
mod url_inference_tests {
    use super::*;

    #[test]
    fn test_infer_backends() {
        assert_eq!(infer_backend_from_url("sqlite://links.db").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url("links.db").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url(":memory:").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url("mysql://u@h/db").unwrap(), "mysql");
        assert_eq!(infer_backend_from_url("mariadb://u@h/db").unwrap(), "mysql");
        assert_eq!(
            infer_backend_from_url("postgres://u@h/db").unwrap(),
            "postgres"
        );
        assert_eq!(normalize_backend_name("mariadb"), "mysql");
    }

    #[test]
    fn test_unknown_scheme_is_config_error() {
        let err = infer_backend_from_url("redis://localhost").unwrap_err();
        assert!(matches!(err, WeblinksError::DatabaseConfig(_)));
    }

    #[tokio::test]
    async fn test_empty_url_is_rejected() {
        let result = LinkStore::new(&DatabaseConfig::with_url("  ")).await;
        assert!(matches!(result, Err(WeblinksError::DatabaseConfig(_))));
    }

    #[tokio::test]
    async fn test_unopenable_location_is_storage_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let url = format!(
            "sqlite://{}?mode=rwc",
            temp_dir.path().join("missing").join("dir").join("links.db").display()
        );
        let result = LinkStore::new(&DatabaseConfig::with_url(url)).await;
        assert!(matches!(result, Err(WeblinksError::StorageUnavailable(_))));
    }
}

// =============================================================================
// 初始化
// =============================================================================

#[cfg(test)]
mod initialize_tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let (store, _dir) = create_temp_store().await;
        store
            .create(new_link("a", None, "https://a.example", "g"))
            .await
            .unwrap();

        store.initialize().await.unwrap();
        store.initialize().await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.backend_name(), "sqlite");
    }

    #[tokio::test]
    async fn test_reopen_preserves_data() {
        let temp_dir = TempDir::new().unwrap();
        let config = DatabaseConfig::with_url(db_url(&temp_dir));

        let store = LinkStore::new(&config).await.unwrap();
        let id = store
            .create(new_link("kept", Some("t"), "https://kept.example", "g"))
            .await
            .unwrap();
        store.close().await.unwrap();

        let reopened = LinkStore::new(&config).await.unwrap();
        let link = reopened.get(id).await.unwrap();
        assert_eq!(link.description, "kept");
        assert_eq!(link.tags.as_deref(), Some("t"));
    }

    #[tokio::test]
    async fn test_in_memory_store() {
        let store = LinkStore::new(&DatabaseConfig::with_url("sqlite::memory:"))
            .await
            .unwrap();
        let id = store
            .create(new_link("m", None, "https://m.example", "g"))
            .await
            .unwrap();
        assert_eq!(store.get(id).await.unwrap().description, "m");
    }
}

// =============================================================================
// CRUD
// =============================================================================

#[cfg(test)]
mod crud_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get_returns_inserted_values() {
        let (store, _dir) = create_temp_store().await;
        let id = store
            .create(new_link(
                "Rust book",
                Some("lang rust"),
                "https://doc.rust-lang.org/book/",
                "dev",
            ))
            .await
            .unwrap();

        let link = store.get(id).await.unwrap();
        assert_eq!(
            link,
            Link {
                id,
                description: "Rust book".to_string(),
                tags: Some("lang rust".to_string()),
                url: "https://doc.rust-lang.org/book/".to_string(),
                file_group: "dev".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_absent_tags_stay_absent() {
        let (store, _dir) = create_temp_store().await;
        let id = store
            .create(new_link("no tags", None, "https://x.example", "g"))
            .await
            .unwrap();
        assert_eq!(store.get(id).await.unwrap().tags, None);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let (store, _dir) = create_temp_store().await;
        assert!(store.get(42).await.unwrap_err().is_not_found());
        assert!(store.get(-1).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let (store, _dir) = create_temp_store().await;
        let id = store
            .create(new_link("gone", None, "https://gone.example", "g"))
            .await
            .unwrap();

        store.delete(id).await.unwrap();
        assert!(store.get(id).await.unwrap_err().is_not_found());

        // 第二次删除是 no-op
        store.delete(id).await.unwrap();
        store.delete(9999).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let (store, _dir) = create_temp_store().await;
        let id = store
            .create(new_link("old", Some("x"), "https://old.example", "a"))
            .await
            .unwrap();

        store
            .update(id, new_link("new", None, "https://new.example", "b"))
            .await
            .unwrap();

        let link = store.get(id).await.unwrap();
        assert_eq!(link.id, id);
        assert_eq!(link.description, "new");
        assert_eq!(link.tags, None);
        assert_eq!(link.url, "https://new.example");
        assert_eq!(link.file_group, "b");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let (store, _dir) = create_temp_store().await;
        store
            .create(new_link("only", None, "https://only.example", "g"))
            .await
            .unwrap();

        store
            .update(777, new_link("ghost", None, "https://ghost.example", "g"))
            .await
            .unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "only");
        assert!(store.get(777).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let (store, _dir) = create_temp_store().await;
        let first = store
            .create(new_link("1", None, "https://1.example", "g"))
            .await
            .unwrap();
        let second = store
            .create(new_link("2", None, "https://2.example", "g"))
            .await
            .unwrap();
        assert!(second > first);

        store.delete(second).await.unwrap();
        let third = store
            .create(new_link("3", None, "https://3.example", "g"))
            .await
            .unwrap();
        assert!(third > second);
    }

    #[tokio::test]
    async fn test_store_does_not_validate_url() {
        let (store, _dir) = create_temp_store().await;
        let id = store
            .create(new_link("ftp", None, "ftp://files.example", "g"))
            .await
            .unwrap();
        assert_eq!(store.get(id).await.unwrap().url, "ftp://files.example");
    }

    #[tokio::test]
    async fn test_duplicate_content_gets_distinct_ids() {
        let (store, _dir) = create_temp_store().await;
        let a = store
            .create(new_link("same", None, "https://same.example", "g"))
            .await
            .unwrap();
        let b = store
            .create(new_link("same", None, "https://same.example", "g"))
            .await
            .unwrap();
        assert_ne!(a, b);
        assert_eq!(store.count().await.unwrap(), 2);
    }
}

// =============================================================================
// 查询
// =============================================================================

#[cfg(test)]
mod query_tests {
    use super::*;

    async fn seeded_store() -> (LinkStore, TempDir) {
        let (store, dir) = create_temp_store().await;
        for (description, tags, url, group) in [
            ("Go docs", Some("lang"), "https://go.dev/doc/", "dev"),
            ("News", None, "https://news.example.com", "Read"),
            ("Rust book", Some("lang"), "https://doc.rust-lang.org/book/", "dev"),
            ("Recipes", Some("food 100%"), "https://cook.example.com", "home"),
            ("read later", Some("misc"), "https://later.example.com", "read"),
        ] {
            store
                .create(new_link(description, tags, url, group))
                .await
                .unwrap();
        }
        (store, dir)
    }

    #[tokio::test]
    async fn test_list_all_is_ordered_by_id() {
        let (store, _dir) = seeded_store().await;
        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 5);
        assert!(ids(&all).windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_list_by_group_is_subset_of_list_all() {
        let (store, _dir) = seeded_store().await;
        let all = store.list_all().await.unwrap();
        let dev = store.list_by_group("dev").await.unwrap();

        let expected: Vec<Link> = all.into_iter().filter(|l| l.file_group == "dev").collect();
        assert_eq!(dev, expected);
        assert_eq!(dev.len(), 2);
    }

    #[tokio::test]
    async fn test_list_by_group_is_case_sensitive() {
        let (store, _dir) = seeded_store().await;
        let read = store.list_by_group("read").await.unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].description, "read later");

        assert!(store.list_by_group("READ").await.unwrap().is_empty());
        assert!(store.list_by_group("nope").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_search_equals_list_all() {
        let (store, _dir) = seeded_store().await;
        assert_eq!(
            store.search("").await.unwrap(),
            store.list_all().await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_search_matches_each_field() {
        let (store, _dir) = seeded_store().await;

        // description
        let hits = store.search("Recipes").await.unwrap();
        assert_eq!(hits.len(), 1);

        // tags only
        let hits = store.search("misc").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "read later");

        // url only
        let hits = store.search("go.dev").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "Go docs");

        assert!(store.search("does-not-occur").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_is_case_sensitive() {
        let (store, _dir) = seeded_store().await;
        assert_eq!(store.search("News").await.unwrap().len(), 1);
        assert!(store.search("NEWS").await.unwrap().is_empty());
        assert!(store.search("LANG").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let (store, _dir) = seeded_store().await;

        let hits = store.search("100%").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "Recipes");

        assert!(store.search("%").await.unwrap().len() == 1);
        assert!(store.search("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_distinct_groups_reflects_deletes() {
        let (store, _dir) = seeded_store().await;
        assert_eq!(
            store.distinct_groups().await.unwrap(),
            vec!["Read", "dev", "home", "read"]
        );

        let home = store.list_by_group("home").await.unwrap();
        store.delete(home[0].id).await.unwrap();

        assert_eq!(
            store.distinct_groups().await.unwrap(),
            vec!["Read", "dev", "read"]
        );
    }
}

// =============================================================================
// 统计
// =============================================================================

#[cfg(test)]
mod stats_tests {
    use super::*;

    #[tokio::test]
    async fn test_stats_on_empty_store() {
        let (store, _dir) = create_temp_store().await;
        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total_links, 0);
        assert_eq!(stats.total_groups, 0);
        assert!(stats.most_populous.is_none());
    }

    #[tokio::test]
    async fn test_stats_three_in_a_one_in_b() {
        let (store, _dir) = create_temp_store().await;
        for (i, group) in ["A", "B", "A", "A"].iter().enumerate() {
            store
                .create(new_link(
                    &format!("link {}", i),
                    None,
                    "https://x.example",
                    group,
                ))
                .await
                .unwrap();
        }

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total_links, 4);
        assert_eq!(stats.total_groups, 2);
        let top = stats.most_populous.unwrap();
        assert_eq!(top.group, "A");
        assert_eq!(top.count, 3);
    }

    #[tokio::test]
    async fn test_stats_tie_prefers_smallest_name() {
        let (store, _dir) = create_temp_store().await;
        for group in ["zeta", "alpha", "zeta", "alpha"] {
            store
                .create(new_link("x", None, "https://x.example", group))
                .await
                .unwrap();
        }

        let top = store.stats().await.unwrap().most_populous.unwrap();
        assert_eq!(top.group, "alpha");
        assert_eq!(top.count, 2);
    }
}

// =============================================================================
// 端到端
// =============================================================================

#[tokio::test]
async fn test_end_to_end_scenario() {
    let (store, _dir) = create_temp_store().await;

    let go = store
        .create(new_link("Go docs", Some("lang"), "https://go.dev/doc/", "dev"))
        .await
        .unwrap();
    let rust = store
        .create(new_link(
            "Rust book",
            Some("lang"),
            "https://doc.rust-lang.org/book/",
            "dev",
        ))
        .await
        .unwrap();
    assert_eq!(go, 1);
    assert_eq!(rust, 2);

    assert_eq!(ids(&store.search("lang").await.unwrap()), vec![1, 2]);
    assert_eq!(ids(&store.list_by_group("dev").await.unwrap()), vec![1, 2]);

    store.delete(1).await.unwrap();
    assert_eq!(ids(&store.list_all().await.unwrap()), vec![2]);
    assert_eq!(store.distinct_groups().await.unwrap(), vec!["dev"]);
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let (store, _dir) = create_temp_store().await;
    let store = std::sync::Arc::new(store);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .create(new_link(
                        &format!("c{}", i),
                        None,
                        "https://c.example",
                        "g",
                    ))
                    .await
            })
        })
        .collect();

    let mut created = Vec::new();
    for handle in handles {
        created.push(handle.await.unwrap().unwrap());
    }
    created.sort_unstable();
    created.dedup();
    assert_eq!(created.len(), 8);
    assert_eq!(store.count().await.unwrap(), 8);
}
