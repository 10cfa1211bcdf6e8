use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use sudood_catalog::{CatalogQuery, CatalogView, ProductId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::Locale;

/// Number of related products surfaced on the detail page.
const RELATED_LIMIT: usize = 4;

pub async fn list(
    Extension(services): Extension<Arc<AppServices>>,
    Path(lang): Path<String>,
    Query(params): Query<dto::ListProductsQuery>,
) -> axum::response::Response {
    let locale = Locale::from_path_code(&lang);

    let query = CatalogQuery::default()
        .with_selection(params.selection())
        .with_page(params.page.unwrap_or(1));
    let view = CatalogView::derive(services.catalog(), &query);

    tracing::debug!(
        filtered = view.filtered_count,
        page = view.page,
        "catalog view derived"
    );

    (
        StatusCode::OK,
        Json(dto::catalog_view_json(&view, locale.language())),
    )
        .into_response()
}

pub async fn detail(
    Extension(services): Extension<Arc<AppServices>>,
    Path((lang, id)): Path<(String, String)>,
) -> axum::response::Response {
    let locale = Locale::from_path_code(&lang);
    let product_id = ProductId(id);

    let Some(product) = services.catalog().get(&product_id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found");
    };

    let related = services.catalog().related(&product_id, RELATED_LIMIT);

    (
        StatusCode::OK,
        Json(dto::product_detail_json(product, &related, locale.language())),
    )
        .into_response()
}
