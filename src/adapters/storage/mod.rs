pub mod csv_store;
pub mod json_store;
pub mod sqlite_store;
pub mod text_store;

pub use csv_store::CsvStore;
pub use json_store::JsonStore;
pub use sqlite_store::SqliteStore;
pub use text_store::TextStore;

use crate::domain::ports::{ConfigProvider, NameStore};
use crate::utils::error::Result;
use std::path::Path;
use std::sync::Arc;

/// 本機的四個後端
#[derive(Clone)]
pub struct LocalStores {
    pub text: Arc<TextStore>,
    pub json: Arc<JsonStore>,
    pub csv: Arc<CsvStore>,
    pub sqlite: Arc<SqliteStore>,
}

impl LocalStores {
    pub async fn open<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let data_dir = config.data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;
        tracing::debug!("Data directory ready: {}", data_dir.display());

        let sqlite = SqliteStore::open(&config.database_path(), config.max_connections()).await?;

        Ok(Self {
            text: Arc::new(TextStore::new(config.text_path())),
            json: Arc::new(JsonStore::new(config.json_path())),
            csv: Arc::new(CsvStore::new(config.csv_path())),
            sqlite: Arc::new(sqlite),
        })
    }

    /// 文字 → JSON → CSV → SQLite
    pub fn in_write_order(&self) -> Vec<Arc<dyn NameStore>> {
        vec![
            self.text.clone(),
            self.json.clone(),
            self.csv.clone(),
            self.sqlite.clone(),
        ]
    }
}

pub(crate) async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}

/// 檔案不存在時回傳 None，視為「尚無資料」
pub(crate) async fn read_if_exists(path: &Path) -> Result<Option<Vec<u8>>> {
    match tokio::fs::read(path).await {
        Ok(data) => Ok(Some(data)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
