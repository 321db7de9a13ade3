use super::{ensure_parent_dir, read_if_exists};
use crate::domain::model::{Backend, NameRecord};
use crate::domain::ports::NameStore;
use crate::utils::error::{RegistryError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// CSV 記錄檔：無標題列，每列一個欄位
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn encode_row(name: &str) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record([name])?;
        writer
            .into_inner()
            .map_err(|e| RegistryError::IoError(e.into_error()))
    }
}

#[async_trait]
impl NameStore for CsvStore {
    fn backend(&self) -> Backend {
        Backend::Csv
    }

    async fn append(&self, record: &NameRecord) -> Result<Option<i64>> {
        let row = Self::encode_row(record.name())?;
        ensure_parent_dir(&self.path).await?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&row).await?;
        file.flush().await?;

        tracing::debug!("Appended CSV row ({} bytes) to {}", row.len(), self.path.display());
        Ok(None)
    }

    async fn read_all(&self) -> Result<Vec<String>> {
        let Some(data) = read_if_exists(&self.path).await? else {
            return Ok(Vec::new());
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_slice());

        let mut names = Vec::new();
        for row in reader.records() {
            let row = row?;
            if let Some(name) = row.get(0).filter(|field| !field.is_empty()) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }
}
