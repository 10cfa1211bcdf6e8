use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use sudood_quotes::{QuoteError, QuoteRequest};

use crate::app::errors;
use crate::app::services::AppServices;

pub async fn send_quote(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<QuoteRequest>,
) -> axum::response::Response {
    // Validate before claiming the in-flight slot so a 400 never blocks a
    // corrected resubmission.
    if body.validate().is_err() {
        return errors::quote_error_to_response(QuoteError::Invalid);
    }

    // The guard frees the slot when it drops, including when the client
    // disconnects and this future is cancelled mid-send.
    let Some(_guard) = services.begin_submission(&body) else {
        tracing::warn!(email = %body.email, product_id = %body.product_id, "duplicate quote submission rejected");
        return errors::json_error(
            StatusCode::TOO_MANY_REQUESTS,
            "duplicate_submission",
            "A quote request for this product is already being processed",
        );
    };

    match services.quotes().send(&body).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Quote request sent successfully. Check your email for confirmation.",
            })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "quote delivery failed");
            errors::quote_error_to_response(err)
        }
    }
}
