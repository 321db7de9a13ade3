use crate::core::NameRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NAME_FIELD: &str = "nombre";
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// 首頁表單送出的資料
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameForm {
    #[serde(default)]
    pub nombre: String,
}

/// 欄位名稱 → 錯誤訊息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn validate_name_form(form: &NameForm) -> Result<NameRecord, FieldErrors> {
    NameRecord::new(form.nombre.clone()).ok_or_else(|| {
        let mut errors = FieldErrors::default();
        errors.add(NAME_FIELD, REQUIRED_MESSAGE);
        errors
    })
}
