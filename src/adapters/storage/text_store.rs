use super::{ensure_parent_dir, read_if_exists};
use crate::domain::model::{Backend, NameRecord};
use crate::domain::ports::NameStore;
use crate::utils::error::{RegistryError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// 純文字記錄檔，每行一個名字
#[derive(Debug, Clone)]
pub struct TextStore {
    path: PathBuf,
}

impl TextStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// 一行一筆：跳脫 `\\`、`\n`、`\r`，名字裡的換行不會拆成多行
fn encode_line(name: &str) -> String {
    let mut line = String::with_capacity(name.len() + 1);
    for c in name.chars() {
        match c {
            '\\' => line.push_str("\\\\"),
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            other => line.push(other),
        }
    }
    line.push('\n');
    line
}

fn decode_line(line: &str) -> String {
    let mut name = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            name.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => name.push('\n'),
            Some('r') => name.push('\r'),
            Some(other) => name.push(other),
            None => name.push('\\'),
        }
    }
    name
}

#[async_trait]
impl NameStore for TextStore {
    fn backend(&self) -> Backend {
        Backend::Text
    }

    async fn append(&self, record: &NameRecord) -> Result<Option<i64>> {
        ensure_parent_dir(&self.path).await?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(encode_line(record.name()).as_bytes()).await?;
        file.flush().await?;

        tracing::debug!("Appended '{}' to {}", record.name(), self.path.display());
        Ok(None)
    }

    async fn read_all(&self) -> Result<Vec<String>> {
        let Some(data) = read_if_exists(&self.path).await? else {
            return Ok(Vec::new());
        };

        let content = String::from_utf8(data).map_err(|e| RegistryError::CorruptStore {
            backend: Backend::Text,
            message: e.to_string(),
        })?;

        Ok(content
            .lines()
            .filter(|line| !line.is_empty())
            .map(decode_line)
            .collect())
    }
}
