//! HTTP API application wiring (Axum router + service wiring).
//!
//! Folder structure:
//! - `services.rs`: shared state (catalog handle, quote sender, in-flight guard)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and localized JSON mapping helpers
//! - `content.rs`: bilingual page metadata table
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use sudood_quotes::Mailer;

use crate::middleware;

pub mod content;
pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests, which inject a recording mailer here).
pub fn build_app(mailer: Arc<dyn Mailer>) -> Router {
    let services = Arc::new(services::AppServices::new(mailer));

    routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn(middleware::language_redirect))
        .layer(ServiceBuilder::new())
}
