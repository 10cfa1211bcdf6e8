//! Language-prefix normalization.
//!
//! Every page path is served under a two-letter language prefix. The bare
//! root and unprefixed paths redirect to the default (`/en`) prefix; API
//! routes, the health check and static-looking paths (a dot in the last
//! segment) pass through untouched.

use axum::{
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

pub async fn language_redirect(req: Request<axum::body::Body>, next: Next) -> Response {
    let path = req.uri().path();

    if path.starts_with("/api/") || path == "/api" || path == "/health" || has_dot_segment(path) {
        return next.run(req).await;
    }

    if path == "/" {
        return Redirect::temporary("/en").into_response();
    }

    if !has_language_prefix(path) {
        return Redirect::temporary(&format!("/en{path}")).into_response();
    }

    next.run(req).await
}

/// First segment is exactly two lowercase ASCII letters.
fn has_language_prefix(path: &str) -> bool {
    let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
    first.len() == 2 && first.bytes().all(|b| b.is_ascii_lowercase())
}

fn has_dot_segment(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|seg| seg.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_language_prefixes() {
        assert!(has_language_prefix("/en"));
        assert!(has_language_prefix("/ar/products"));
        assert!(has_language_prefix("/fr/about")); // any two-letter code passes
        assert!(!has_language_prefix("/products"));
        assert!(!has_language_prefix("/EN/products"));
        assert!(!has_language_prefix("/"));
    }

    #[test]
    fn static_looking_paths_are_skipped() {
        assert!(has_dot_segment("/favicon.ico"));
        assert!(has_dot_segment("/images/logo.png"));
        assert!(!has_dot_segment("/en/products"));
    }
}
