use crate::domain::model::{Backend, NameRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// 單一持久化後端
#[async_trait]
pub trait NameStore: Send + Sync {
    fn backend(&self) -> Backend;

    /// 寫入一筆名字；關聯式後端回傳新列的 id
    async fn append(&self, record: &NameRecord) -> Result<Option<i64>>;

    /// 依儲存順序讀回所有名字；尚無資料時回傳空陣列
    async fn read_all(&self) -> Result<Vec<String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn data_dir(&self) -> PathBuf;
    fn text_path(&self) -> PathBuf;
    fn json_path(&self) -> PathBuf;
    fn csv_path(&self) -> PathBuf;
    fn database_path(&self) -> PathBuf;
    fn max_connections(&self) -> u32;
}
