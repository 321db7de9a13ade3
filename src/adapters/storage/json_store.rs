use super::{ensure_parent_dir, read_if_exists};
use crate::domain::model::{Backend, NameRecord};
use crate::domain::ports::NameStore;
use crate::utils::error::{RegistryError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// JSON 檔案，內容為單一字串陣列。
///
/// 每次寫入都會讀出整個陣列、在記憶體中附加後整檔重寫。
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn staging_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    async fn load(&self) -> Result<Vec<String>> {
        let Some(data) = read_if_exists(&self.path).await? else {
            return Ok(Vec::new());
        };

        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&data).map_err(|e| RegistryError::CorruptStore {
            backend: Backend::Json,
            message: format!("expected an array of strings: {}", e),
        })
    }
}

#[async_trait]
impl NameStore for JsonStore {
    fn backend(&self) -> Backend {
        Backend::Json
    }

    async fn append(&self, record: &NameRecord) -> Result<Option<i64>> {
        let mut names = self.load().await?;
        names.push(record.name().to_string());

        let json_data = serde_json::to_vec_pretty(&names)?;
        ensure_parent_dir(&self.path).await?;

        // 先寫同目錄的暫存檔再 rename，讀取端永遠看到完整的陣列
        let staging = self.staging_path();
        tokio::fs::write(&staging, &json_data).await?;
        tokio::fs::rename(&staging, &self.path).await?;

        tracing::debug!(
            "Rewrote {} with {} names ({} bytes)",
            self.path.display(),
            names.len(),
            json_data.len()
        );
        Ok(None)
    }

    async fn read_all(&self) -> Result<Vec<String>> {
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_is_valid_json_after_every_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data/nombres.json");
        let store = JsonStore::new(path.clone());

        for name in ["Ana", "Luis", "Sofía"] {
            store.append(&NameRecord::new(name).unwrap()).await.unwrap();

            let raw = std::fs::read_to_string(&path).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
            let array = parsed.as_array().unwrap();
            assert_eq!(array.last().unwrap(), name);
        }

        assert_eq!(store.read_all().await.unwrap(), vec!["Ana", "Luis", "Sofía"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_reads_during_rewrites_always_see_stored_names() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nombres.json");
        let store = std::sync::Arc::new(JsonStore::new(path.clone()));

        for i in 0..50 {
            store
                .append(&NameRecord::new(format!("Previo {}", i)).unwrap())
                .await
                .unwrap();
        }

        let writer = {
            let store = store.clone();
            tokio::spawn(async move {
                for i in 0..100 {
                    store
                        .append(&NameRecord::new(format!("Nuevo {}", i)).unwrap())
                        .await
                        .unwrap();
                }
            })
        };

        let mut previous = 50;
        while !writer.is_finished() {
            let names = store.read_all().await.unwrap();
            assert!(names.len() >= previous, "{} < {}", names.len(), previous);
            previous = names.len();
            tokio::task::yield_now().await;
        }
        writer.await.unwrap();

        assert_eq!(store.read_all().await.unwrap().len(), 150);
        assert!(!path.with_file_name("nombres.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_zero_byte_file_is_treated_as_empty_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nombres.json");
        std::fs::write(&path, "").unwrap();

        let store = JsonStore::new(path);
        assert!(store.read_all().await.unwrap().is_empty());

        store.append(&NameRecord::new("Ana").unwrap()).await.unwrap();
        assert_eq!(store.read_all().await.unwrap(), vec!["Ana"]);
    }

    #[tokio::test]
    async fn test_non_array_content_is_reported_as_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nombres.json");
        std::fs::write(&path, r#"{"nombre": "Ana"}"#).unwrap();

        let store = JsonStore::new(path.clone());
        let err = store.append(&NameRecord::new("Luis").unwrap()).await.unwrap_err();

        assert!(matches!(
            err,
            RegistryError::CorruptStore {
                backend: Backend::Json,
                ..
            }
        ));
        // 損毀的檔案不會被覆寫
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            r#"{"nombre": "Ana"}"#
        );
    }
}
