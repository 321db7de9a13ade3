//! HTTP handlers

use crate::app::state::AppState;
use crate::core::form::{validate_name_form, FieldErrors, NameForm};
use crate::core::Backend;
use crate::utils::error::{RegistryError, Result};
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use url::Url;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let html = state
        .templates
        .render_index(&NameForm::default(), &FieldErrors::default())?;
    Ok(Html(html))
}

pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<NameForm>,
) -> Result<Response> {
    match validate_name_form(&form) {
        Ok(record) => {
            let report = state.fanout.write(&record).await?;
            tracing::debug!(
                "Stored '{}' (row id {:?})",
                report.record.name(),
                report.row_id
            );
            Ok(Redirect::to(&greeting_path(record.name())?).into_response())
        }
        Err(errors) => {
            tracing::debug!("Form rejected: {:?}", errors);
            let html = state.templates.render_index(&form, &errors)?;
            Ok(Html(html).into_response())
        }
    }
}

pub async fn greet(Path(nombre): Path<String>) -> Html<String> {
    Html(format!("Bienvenido, {}!", tera::escape_html(&nombre)))
}

pub async fn about(State(state): State<AppState>) -> Result<Html<String>> {
    Ok(Html(state.templates.render_about()?))
}

pub async fn read_txt(State(state): State<AppState>) -> Result<Html<String>> {
    read_back(&state, Backend::Text).await
}

pub async fn read_json(State(state): State<AppState>) -> Result<Html<String>> {
    read_back(&state, Backend::Json).await
}

pub async fn read_csv(State(state): State<AppState>) -> Result<Html<String>> {
    read_back(&state, Backend::Csv).await
}

pub async fn read_sqlite(State(state): State<AppState>) -> Result<Html<String>> {
    read_back(&state, Backend::Sqlite).await
}

async fn read_back(state: &AppState, backend: Backend) -> Result<Html<String>> {
    let names = state.fanout.read_all(backend).await?;
    Ok(Html(render_names(backend, &names)))
}

pub fn empty_message(backend: Backend) -> String {
    format!("No hay nombres guardados en {}.", backend)
}

pub fn render_names(backend: Backend, names: &[String]) -> String {
    if names.is_empty() {
        return empty_message(backend);
    }

    names
        .iter()
        .map(|name| tera::escape_html(name))
        .collect::<Vec<_>>()
        .join("<br>")
}

const GREETING_BASE: &str = "http://localhost/usuario";

/// `/usuario/<nombre>`，名字以單一路徑片段編碼
pub fn greeting_path(name: &str) -> Result<String> {
    // url 不會保留 "." 與 ".." 片段
    if name == "." || name == ".." {
        return Ok(format!("/usuario/{}", "%2E".repeat(name.len())));
    }

    let mut url = Url::parse(GREETING_BASE).map_err(|e| RegistryError::RedirectError {
        message: e.to_string(),
    })?;

    url.path_segments_mut()
        .map_err(|_| RegistryError::RedirectError {
            message: format!("{} cannot have path segments", GREETING_BASE),
        })?
        .push(name);

    Ok(url.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_path_encodes_segment() {
        assert_eq!(greeting_path("Ana").unwrap(), "/usuario/Ana");
        assert_eq!(greeting_path("Ana María").unwrap(), "/usuario/Ana%20Mar%C3%ADa");
        assert_eq!(greeting_path("a/b").unwrap(), "/usuario/a%2Fb");
        assert_eq!(greeting_path("50%").unwrap(), "/usuario/50%25");
        assert_eq!(greeting_path("..").unwrap(), "/usuario/%2E%2E");
    }

    #[test]
    fn test_render_names_joins_with_breaks() {
        let names = vec!["Ana".to_string(), "<Luis>".to_string()];
        assert_eq!(render_names(Backend::Csv, &names), "Ana<br>&lt;Luis&gt;");
        assert_eq!(
            render_names(Backend::Sqlite, &[]),
            "No hay nombres guardados en sqlite."
        );
    }
}
