use std::sync::Arc;

use sudood_quotes::SmtpMailer;

#[tokio::main]
async fn main() {
    sudood_observability::init();

    let app = sudood_api::app::build_app(Arc::new(SmtpMailer::new()));

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
