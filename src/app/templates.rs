use crate::core::form::{FieldErrors, NameForm, NAME_FIELD};
use crate::core::Backend;
use crate::utils::error::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// 編譯進執行檔的頁面模板（.html 自動跳脫）
pub struct Templates {
    tera: Tera,
}

#[derive(Serialize)]
struct BackendLink {
    label: &'static str,
    route: String,
}

impl Templates {
    pub fn load() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../../templates/base.html")),
            ("index.html", include_str!("../../templates/index.html")),
            ("about.html", include_str!("../../templates/about.html")),
        ])?;
        Ok(Self { tera })
    }

    fn base_context() -> Context {
        let backends: Vec<BackendLink> = Backend::ALL
            .iter()
            .map(|backend| BackendLink {
                label: backend.label(),
                route: backend.read_route(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("backends", &backends);
        context
    }

    pub fn render_index(&self, form: &NameForm, errors: &FieldErrors) -> Result<String> {
        let mut context = Self::base_context();
        context.insert("nombre", &form.nombre);
        context.insert("errors", errors.get(NAME_FIELD));
        Ok(self.tera.render("index.html", &context)?)
    }

    pub fn render_about(&self) -> Result<String> {
        Ok(self.tera.render("about.html", &Self::base_context())?)
    }
}
