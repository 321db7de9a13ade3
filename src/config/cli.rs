use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "name-registry")]
#[command(about = "Web form that stores every submitted name in text, JSON, CSV and SQLite")]
pub struct CliConfig {
    /// Listen address [default: 127.0.0.1:5000]
    #[arg(long)]
    pub bind: Option<String>,

    /// Directory holding the four stores [default: ./data]
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// SQLite pool size [default: 5]
    #[arg(long)]
    pub max_connections: Option<u32>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON log lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// 預設值 ← TOML 檔案 ← 命令列參數
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.to_settings(),
            None => Settings::default(),
        };

        if let Some(bind) = &self.bind {
            settings.bind_address = bind.clone();
        }
        if let Some(dir) = &self.data_dir {
            settings.data_dir = dir.clone();
        }
        if let Some(max) = self.max_connections {
            settings.max_connections = max;
        }
        if self.verbose {
            settings.log_level = Some("debug".to_string());
        }
        if self.log_json {
            settings.log_json = true;
        }

        Ok(settings)
    }
}
