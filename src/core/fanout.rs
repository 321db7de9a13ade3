use crate::core::{Backend, FanOutReport, NameRecord, NameStore};
use crate::utils::error::{RegistryError, Result};
use std::sync::Arc;
use tokio::sync::Mutex;

/// 依固定順序把同一個名字寫入每個後端。
///
/// 沒有交易也沒有補償：某個後端失敗時，先前的寫入保留，之後的後端不會被呼叫。
pub struct FanOutEngine {
    stores: Vec<Arc<dyn NameStore>>,
    write_lock: Mutex<()>,
}

impl FanOutEngine {
    pub fn new(stores: Vec<Arc<dyn NameStore>>) -> Self {
        Self {
            stores,
            write_lock: Mutex::new(()),
        }
    }

    pub fn backends(&self) -> Vec<Backend> {
        self.stores.iter().map(|store| store.backend()).collect()
    }

    pub async fn write(&self, record: &NameRecord) -> Result<FanOutReport> {
        // 同一行程內的寫入逐一進行，避免 JSON 讀改寫交錯
        let _guard = self.write_lock.lock().await;

        let mut written = Vec::with_capacity(self.stores.len());
        let mut row_id = None;

        for store in &self.stores {
            let backend = store.backend();
            match store.append(record).await {
                Ok(id) => {
                    row_id = id.or(row_id);
                    written.push(backend);
                }
                Err(source) => {
                    tracing::error!(
                        "❌ Fan-out of '{}' failed at {} (already written: {:?}): {}",
                        record.name(),
                        backend,
                        written,
                        source
                    );
                    return Err(RegistryError::PartialWrite {
                        failed: backend,
                        written,
                        source: Box::new(source),
                    });
                }
            }
        }

        tracing::info!("✅ Stored '{}' in {} backends", record.name(), written.len());

        Ok(FanOutReport {
            record: record.clone(),
            written,
            row_id,
        })
    }

    pub async fn read_all(&self, backend: Backend) -> Result<Vec<String>> {
        let store = self
            .stores
            .iter()
            .find(|store| store.backend() == backend)
            .ok_or(RegistryError::BackendNotRegistered { backend })?;

        store.read_all().await
    }
}
