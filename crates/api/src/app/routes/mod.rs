use axum::{
    routing::{get, post},
    Router,
};

pub mod pages;
pub mod products;
pub mod quotes;
pub mod system;

/// Full route tree. Static segments (`/health`, `/api`, `products`) win over
/// the language/page captures.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/api/send-quote", post(quotes::send_quote))
        .route("/:lang", get(pages::home))
        .route("/:lang/:page", get(pages::page))
        .route("/:lang/products", get(products::list))
        .route("/:lang/products/:id", get(products::detail))
}
