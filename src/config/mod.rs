#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_socket_addr,
    Validate,
};
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 合併 CLI 與 TOML 後的最終設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_address: String,
    pub data_dir: PathBuf,
    pub text_file: PathBuf,
    pub json_file: PathBuf,
    pub csv_file: PathBuf,
    pub database_file: PathBuf,
    pub max_connections: u32,
    pub log_level: Option<String>,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            text_file: PathBuf::from("nombres.txt"),
            json_file: PathBuf::from("nombres.json"),
            csv_file: PathBuf::from("nombres.csv"),
            database_file: PathBuf::from("nombres.db"),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            log_level: None,
            log_json: false,
        }
    }
}

impl Settings {
    /// 以指定資料目錄建立預設設定
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }
}

impl ConfigProvider for Settings {
    fn bind_address(&self) -> &str {
        &self.bind_address
    }

    fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    // 相對路徑以 data_dir 為基準，絕對路徑原樣使用
    fn text_path(&self) -> PathBuf {
        self.data_dir.join(&self.text_file)
    }

    fn json_path(&self) -> PathBuf {
        self.data_dir.join(&self.json_file)
    }

    fn csv_path(&self) -> PathBuf {
        self.data_dir.join(&self.csv_file)
    }

    fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }

    fn max_connections(&self) -> u32 {
        self.max_connections
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("server.bind", &self.bind_address)?;
        validate_path("storage.data_dir", &self.data_dir)?;
        validate_path("storage.text_file", &self.text_file)?;
        validate_path("storage.json_file", &self.json_file)?;
        validate_path("storage.csv_file", &self.csv_file)?;
        validate_path("storage.database_file", &self.database_file)?;
        validate_positive_number(
            "storage.max_connections",
            self.max_connections as usize,
            1,
        )?;
        if let Some(level) = &self.log_level {
            validate_non_empty_string("logging.level", level)?;
        }
        Ok(())
    }
}
