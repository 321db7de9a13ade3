use crate::config::Settings;
use crate::utils::error::{RegistryError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    pub storage: Option<StorageConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: Option<PathBuf>,
    pub text_file: Option<PathBuf>,
    pub json_file: Option<PathBuf>,
    pub csv_file: Option<PathBuf>,
    pub database_file: Option<PathBuf>,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RegistryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RegistryError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 把檔案中有寫的欄位覆蓋到設定上
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(bind) = self.server.as_ref().and_then(|s| s.bind.clone()) {
            settings.bind_address = bind;
        }

        if let Some(storage) = &self.storage {
            if let Some(dir) = &storage.data_dir {
                settings.data_dir = dir.clone();
            }
            if let Some(file) = &storage.text_file {
                settings.text_file = file.clone();
            }
            if let Some(file) = &storage.json_file {
                settings.json_file = file.clone();
            }
            if let Some(file) = &storage.csv_file {
                settings.csv_file = file.clone();
            }
            if let Some(file) = &storage.database_file {
                settings.database_file = file.clone();
            }
            if let Some(max) = storage.max_connections {
                settings.max_connections = max;
            }
        }

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                settings.log_level = Some(level.clone());
            }
            if let Some(json) = logging.json {
                settings.log_json = json;
            }
        }
    }

    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();
        self.apply_to(&mut settings);
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
bind = "0.0.0.0:8080"

[storage]
data_dir = "/srv/registro"
json_file = "lista.json"
max_connections = 2

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = config.to_settings();

        assert_eq!(settings.bind_address(), "0.0.0.0:8080");
        assert_eq!(settings.json_path(), PathBuf::from("/srv/registro/lista.json"));
        assert_eq!(settings.text_path(), PathBuf::from("/srv/registro/nombres.txt"));
        assert_eq!(settings.max_connections(), 2);
        assert_eq!(settings.log_level.as_deref(), Some("debug"));
        assert!(settings.log_json);
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        let settings = config.to_settings();

        assert_eq!(settings.bind_address, crate::config::DEFAULT_BIND);
        assert_eq!(settings.data_dir, PathBuf::from(crate::config::DEFAULT_DATA_DIR));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NAME_REGISTRY_TEST_DATA_DIR", "/tmp/registro");

        let toml_content = r#"
[storage]
data_dir = "${NAME_REGISTRY_TEST_DATA_DIR}"
csv_file = "${NAME_REGISTRY_TEST_UNSET}.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let storage = config.storage.unwrap();
        assert_eq!(storage.data_dir, Some(PathBuf::from("/tmp/registro")));
        assert_eq!(
            storage.csv_file,
            Some(PathBuf::from("${NAME_REGISTRY_TEST_UNSET}.csv"))
        );

        std::env::remove_var("NAME_REGISTRY_TEST_DATA_DIR");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[server]
bind = "not-an-address"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.to_settings().validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[server\nbind = ").unwrap_err();
        assert!(matches!(err, RegistryError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[storage]
data_dir = "./otra"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.to_settings().data_dir, PathBuf::from("./otra"));
    }
}
