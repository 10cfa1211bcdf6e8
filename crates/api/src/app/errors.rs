use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use sudood_quotes::QuoteError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Quote submission errors keep the original site's wire bodies.
pub fn quote_error_to_response(err: QuoteError) -> axum::response::Response {
    match err {
        QuoteError::Invalid => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({ "error": "Missing required fields" })),
        )
            .into_response(),
        QuoteError::Delivery(details) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(json!({
                "error": "Failed to send quote request. Please try again later.",
                "details": details,
            })),
        )
            .into_response(),
    }
}
