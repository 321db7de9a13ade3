//! SQLite 後端（嵌入式，透過 sqlx）

use crate::domain::model::{Backend, NameRecord, NameRow};
use crate::domain::ports::NameStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn open(database_path: &Path, max_connections: u32) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path.display());

        super::ensure_parent_dir(database_path).await?;

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;
        tracing::debug!("SQLite schema ready");

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS names (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(100) NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// 依 id 排序的所有資料列
    pub async fn rows(&self) -> Result<Vec<NameRow>> {
        let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM names ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| NameRow { id, name })
            .collect())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl NameStore for SqliteStore {
    fn backend(&self) -> Backend {
        Backend::Sqlite
    }

    async fn append(&self, record: &NameRecord) -> Result<Option<i64>> {
        let id = sqlx::query("INSERT INTO names (name) VALUES (?)")
            .bind(record.name())
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        tracing::debug!("Inserted '{}' as row {}", record.name(), id);
        Ok(Some(id))
    }

    async fn read_all(&self) -> Result<Vec<String>> {
        // 不指定 ORDER BY，沿用儲存順序
        let names: Vec<String> = sqlx::query_scalar("SELECT name FROM names")
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_empty_table_reads_as_no_data() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqliteStore::open(&temp_dir.path().join("nombres.db"), 1)
            .await
            .unwrap();

        assert!(store.read_all().await.unwrap().is_empty());
        store.close().await;
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqliteStore::open(&temp_dir.path().join("db/nombres.db"), 2)
            .await
            .unwrap();

        let mut ids = Vec::new();
        for name in ["Ana", "Luis", "Ana"] {
            let id = store.append(&NameRecord::new(name).unwrap()).await.unwrap();
            ids.push(id.unwrap());
        }
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

        let rows = store.rows().await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], NameRow { id: ids[1], name: "Luis".to_string() });
        store.close().await;
    }

    #[tokio::test]
    async fn test_rows_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nombres.db");

        let store = SqliteStore::open(&path, 1).await.unwrap();
        store.append(&NameRecord::new("Ana").unwrap()).await.unwrap();
        store.close().await;

        let reopened = SqliteStore::open(&path, 1).await.unwrap();
        assert_eq!(reopened.read_all().await.unwrap(), vec!["Ana"]);
        reopened.close().await;
    }
}
