use std::fmt;

/// 一筆要寫入所有後端的名字；建立時已通過表單驗證
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    name: String,
}

impl NameRecord {
    /// 只接受非空白的名字，原樣保留使用者輸入
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            None
        } else {
            Some(Self { name })
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Text,
    Json,
    Csv,
    Sqlite,
}

impl Backend {
    /// 固定的寫入順序
    pub const ALL: [Backend; 4] = [Backend::Text, Backend::Json, Backend::Csv, Backend::Sqlite];

    pub fn label(&self) -> &'static str {
        match self {
            Backend::Text => "txt",
            Backend::Json => "json",
            Backend::Csv => "csv",
            Backend::Sqlite => "sqlite",
        }
    }

    pub fn read_route(&self) -> String {
        format!("/leer_{}", self.label())
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct FanOutReport {
    pub record: NameRecord,
    pub written: Vec<Backend>,
    pub row_id: Option<i64>,
}
