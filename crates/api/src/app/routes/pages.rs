use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::app::{content, errors};
use crate::context::Locale;

pub async fn home(Path(lang): Path<String>) -> axum::response::Response {
    page_response(&lang, "")
}

pub async fn page(Path((lang, page)): Path<(String, String)>) -> axum::response::Response {
    page_response(&lang, &page)
}

fn page_response(lang: &str, slug: &str) -> axum::response::Response {
    let locale = Locale::from_path_code(lang);

    let Some(meta) = content::page_meta(slug) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "page not found");
    };

    let language = locale.language();
    let path = if slug.is_empty() {
        format!("/{lang}")
    } else {
        format!("/{lang}/{slug}")
    };

    (
        StatusCode::OK,
        Json(json!({
            "title": meta.title.get(language),
            "description": meta.description.get(language),
            "locale": language.as_str(),
            "dir": locale.dir(),
            "path": path,
        })),
    )
        .into_response()
}
