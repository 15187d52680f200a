//! 分类查找仓储
//!
//! 基于 SQLite 的 `LookupStore` 实现。表名来自 `Category::table_name`，
//! 只能是固定的三个值，因此可以直接拼入 SQL。

use async_trait::async_trait;
use indiegame_shared::observability::metrics;
use sqlx::SqlitePool;
use tracing::{debug, info, instrument, warn};

use super::traits::LookupStore;
use crate::error::{GameError, Result};
use crate::link::MAX_LINK_ID;
use crate::models::{Category, CategoryValue};

/// SQLite 分类查找仓储
pub struct SqliteLookupStore {
    pool: SqlitePool,
}

impl SqliteLookupStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 确保三张分类表存在
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<()> {
        for category in Category::ALL {
            let sql = format!(
                "CREATE TABLE IF NOT EXISTS {} (id INTEGER PRIMARY KEY, value TEXT)",
                category.table_name()
            );
            sqlx::query(&sql).execute(&self.pool).await?;
        }

        info!("Category tables ready");
        Ok(())
    }

    /// 以指定 id 写入一行（种子数据、测试用）
    pub async fn insert_with_id(&self, category: Category, id: i64, value: &str) -> Result<()> {
        let sql = format!(
            "INSERT INTO {} (id, value) VALUES (?, ?)",
            category.table_name()
        );
        sqlx::query(&sql)
            .bind(id)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl LookupStore for SqliteLookupStore {
    #[instrument(skip(self))]
    async fn random_value(&self, category: Category) -> Result<CategoryValue> {
        // 超出单字节的行无法生成链接，不参与抽取
        let sql = format!(
            "SELECT id, value FROM {} WHERE id BETWEEN 0 AND ? ORDER BY RANDOM() LIMIT 1",
            category.table_name()
        );

        let row = sqlx::query_as::<_, CategoryValue>(&sql)
            .bind(MAX_LINK_ID)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(GameError::EmptyTable(category))?;

        debug!(id = row.id, "Random value drawn");
        Ok(row)
    }

    #[instrument(skip(self))]
    async fn value_by_id(&self, category: Category, id: i64) -> Result<String> {
        let sql = format!("SELECT value FROM {} WHERE id = ?", category.table_name());

        sqlx::query_scalar::<_, String>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(GameError::NotFound { category, id })
    }

    #[instrument(skip(self, values), fields(candidates = values.len()))]
    async fn insert_values(&self, category: Category, values: &[String]) -> Result<usize> {
        let sql = format!("INSERT INTO {} (value) VALUES (?)", category.table_name());

        let mut inserted = 0;
        for value in values.iter().filter(|v| !v.is_empty()) {
            if let Err(e) = sqlx::query(&sql).bind(value).execute(&self.pool).await {
                warn!(
                    inserted,
                    error = %e,
                    "Insert aborted, earlier rows stay committed"
                );
                metrics::record_values_inserted(category.table_name(), inserted);
                return Err(e.into());
            }
            inserted += 1;
        }

        metrics::record_values_inserted(category.table_name(), inserted);
        debug!(inserted, "Values inserted");
        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn count(&self, category: Category) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", category.table_name());
        let count = sqlx::query_scalar::<_, i64>(&sql)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indiegame_shared::Database;
    use ::metrics::{
        Counter, CounterFn, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString,
        Unit,
    };
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[derive(Default)]
    struct InsertedTotal(AtomicU64);

    impl CounterFn for InsertedTotal {
        fn increment(&self, value: u64) {
            self.0.fetch_add(value, Ordering::Relaxed);
        }

        fn absolute(&self, value: u64) {
            self.0.store(value, Ordering::Relaxed);
        }
    }

    /// 只捕获 `category_values_inserted_total` 的本地 recorder
    #[derive(Default)]
    struct InsertedRecorder {
        inserted: Arc<InsertedTotal>,
    }

    impl Recorder for InsertedRecorder {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            if key.name() == "category_values_inserted_total" {
                Counter::from_arc(self.inserted.clone())
            } else {
                Counter::noop()
            }
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }

    async fn setup_store() -> SqliteLookupStore {
        let db = Database::in_memory().await.unwrap();
        let store = SqliteLookupStore::new(db.pool().clone());
        store.ensure_schema().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_random_value_on_empty_table() {
        let store = setup_store().await;
        let err = store.random_value(Category::Genre).await.unwrap_err();
        assert!(matches!(err, GameError::EmptyTable(Category::Genre)));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_random_value_single_row() {
        let store = setup_store().await;
        store
            .insert_with_id(Category::Fantasy, 42, "underwater city")
            .await
            .unwrap();

        let row = store.random_value(Category::Fantasy).await.unwrap();
        assert_eq!(
            row,
            CategoryValue {
                id: 42,
                value: "underwater city".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_random_value_draws_from_table_only() {
        let store = setup_store().await;
        let values: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        store.insert_values(Category::Emotion, &values).await.unwrap();
        store
            .insert_with_id(Category::Genre, 1, "not an emotion")
            .await
            .unwrap();

        for _ in 0..20 {
            let row = store.random_value(Category::Emotion).await.unwrap();
            assert!(values.contains(&row.value));
        }
    }

    #[tokio::test]
    async fn test_random_value_skips_rows_beyond_link_range() {
        let store = setup_store().await;
        let values: Vec<String> = (1..=300).map(|i| format!("genre {i}")).collect();
        store.insert_values(Category::Genre, &values).await.unwrap();

        for _ in 0..200 {
            let row = store.random_value(Category::Genre).await.unwrap();
            assert!((1..=MAX_LINK_ID).contains(&row.id), "drew id {}", row.id);
        }

        store
            .insert_with_id(Category::Fantasy, 256, "unreachable")
            .await
            .unwrap();
        let err = store.random_value(Category::Fantasy).await.unwrap_err();
        assert!(matches!(err, GameError::EmptyTable(Category::Fantasy)));
    }

    #[tokio::test]
    async fn test_value_by_id() {
        let store = setup_store().await;
        store
            .insert_with_id(Category::Emotion, 7, "nostalgia")
            .await
            .unwrap();

        assert_eq!(
            store.value_by_id(Category::Emotion, 7).await.unwrap(),
            "nostalgia"
        );

        let err = store.value_by_id(Category::Emotion, 8).await.unwrap_err();
        assert!(matches!(
            err,
            GameError::NotFound {
                category: Category::Emotion,
                id: 8
            }
        ));
    }

    #[tokio::test]
    async fn test_insert_values_skips_empty_and_keeps_duplicates() {
        let store = setup_store().await;
        let values: Vec<String> = ["rpg", "", "rpg", "shmup"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let inserted = store.insert_values(Category::Genre, &values).await.unwrap();
        assert_eq!(inserted, 3);
        assert_eq!(store.count(Category::Genre).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_insert_failure_keeps_prior_rows() {
        let store = setup_store().await;
        let values = vec!["first".to_string(), "second".to_string()];
        store.insert_values(Category::Genre, &values).await.unwrap();

        // 删表模拟写入故障：之前的行不会被回滚
        sqlx::query("DROP TABLE fantasy")
            .execute(&store.pool)
            .await
            .unwrap();
        let err = store
            .insert_values(Category::Fantasy, &values)
            .await
            .unwrap_err();
        assert!(matches!(err, GameError::Store(_)));
        assert_eq!(store.count(Category::Genre).await.unwrap(), 2);
    }

    #[test]
    fn test_partial_insert_counts_committed_rows() {
        let recorder = InsertedRecorder::default();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        ::metrics::with_local_recorder(&recorder, || {
            runtime.block_on(async {
                let store = setup_store().await;
                sqlx::query(
                    "CREATE TRIGGER reject_boom BEFORE INSERT ON genre \
                     WHEN NEW.value = 'boom' BEGIN SELECT RAISE(ABORT, 'rejected'); END",
                )
                .execute(&store.pool)
                .await
                .unwrap();

                let values: Vec<String> = ["a", "b", "boom", "c"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                let err = store
                    .insert_values(Category::Genre, &values)
                    .await
                    .unwrap_err();
                assert!(matches!(err, GameError::Store(_)));
                assert_eq!(store.count(Category::Genre).await.unwrap(), 2);
            })
        });

        assert_eq!(recorder.inserted.0.load(Ordering::Relaxed), 2);
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let store = setup_store().await;
        store.insert_with_id(Category::Genre, 1, "rpg").await.unwrap();
        store.ensure_schema().await.unwrap();
        assert_eq!(store.count(Category::Genre).await.unwrap(), 1);
    }
}
