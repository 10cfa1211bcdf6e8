use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

use sudood_quotes::{MailError, Mailer, OutboundEmail};

/// Recording mailer injected in place of SMTP.
struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    mode: MailerMode,
}

enum MailerMode {
    Deliver,
    Fail,
    /// Each send blocks until a permit is released by the test.
    Hold(Arc<tokio::sync::Semaphore>),
}

impl RecordingMailer {
    fn new(mode: MailerMode) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            mode,
        })
    }

    fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        match &self.mode {
            MailerMode::Deliver => {}
            MailerMode::Fail => return Err(MailError::Transport("connection refused".into())),
            MailerMode::Hold(gate) => {
                let permit = gate.acquire().await.expect("gate closed");
                permit.forget();
            }
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(mailer: Arc<RecordingMailer>) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = sudood_api::app::build_app(mailer);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

fn quote_body() -> serde_json::Value {
    json!({
        "name": "Amal Haddad",
        "company": "Haddad Contracting",
        "email": "amal@example.com",
        "phone": "+966500000000",
        "productName": "Standard Brass Ball Valve",
        "productId": "bv-100",
        "category": "Ball Valves",
        "series": "S-100",
        "quantity": "250",
        "notes": "Needed within 6 weeks."
    })
}

#[tokio::test]
async fn health_is_ok() {
    let server = TestServer::spawn(RecordingMailer::new(MailerMode::Deliver)).await;
    let res = reqwest::get(format!("{}/health", server.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn root_and_unprefixed_paths_redirect_to_english() {
    let server = TestServer::spawn(RecordingMailer::new(MailerMode::Deliver)).await;
    let client = no_redirect_client();

    let res = client.get(format!("{}/", server.base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()["location"], "/en");

    let res = client
        .get(format!("{}/products", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()["location"], "/en/products");

    // A language-prefixed path is served directly.
    let res = client
        .get(format!("{}/en/products", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn catalog_paginates_fourteen_products_into_three_pages() {
    let server = TestServer::spawn(RecordingMailer::new(MailerMode::Deliver)).await;
    let client = reqwest::Client::new();

    let first: serde_json::Value = client
        .get(format!("{}/en/products", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first["filteredCount"], 14);
    assert_eq!(first["pageCount"], 3);
    assert_eq!(first["items"].as_array().unwrap().len(), 6);
    assert_eq!(first["showing"], json!({ "start": 1, "end": 6 }));

    let last: serde_json::Value = client
        .get(format!("{}/en/products?page=3", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(last["items"].as_array().unwrap().len(), 2);
    assert_eq!(last["showing"], json!({ "start": 13, "end": 14 }));
}

#[tokio::test]
async fn saso_filter_narrows_to_five_products_on_one_page() {
    let server = TestServer::spawn(RecordingMailer::new(MailerMode::Deliver)).await;

    let view: serde_json::Value =
        reqwest::get(format!("{}/en/products?certification=SASO", server.base_url))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
    assert_eq!(view["filteredCount"], 5);
    assert_eq!(view["pageCount"], 1);
    for item in view["items"].as_array().unwrap() {
        let certs = item["certifications"].as_array().unwrap();
        assert!(certs.iter().any(|c| c == "SASO"));
    }
    // Facet options stay complete while a filter is active.
    assert!(view["facets"]["categories"].as_array().unwrap().len() > 1);
}

#[tokio::test]
async fn arabic_listing_resolves_arabic_text_with_english_category_keys() {
    let server = TestServer::spawn(RecordingMailer::new(MailerMode::Deliver)).await;
    let client = reqwest::Client::new();

    let en: serde_json::Value = client
        .get(format!("{}/en/products", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ar: serde_json::Value = client
        .get(format!("{}/ar/products", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let en_item = &en["items"][0];
    let ar_item = &ar["items"][0];
    assert_eq!(en_item["id"], ar_item["id"]);
    assert_ne!(en_item["name"], ar_item["name"]);
    assert_eq!(en_item["categoryKey"], ar_item["categoryKey"]);
}

#[tokio::test]
async fn product_detail_carries_related_products_and_unknown_ids_are_404() {
    let server = TestServer::spawn(RecordingMailer::new(MailerMode::Deliver)).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/en/products/bv-100", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let detail: serde_json::Value = res.json().await.unwrap();
    assert_eq!(detail["id"], "bv-100");
    let related = detail["related"].as_array().unwrap();
    assert!(!related.is_empty() && related.len() <= 4);
    for r in related {
        assert_eq!(r["categoryKey"], detail["categoryKey"]);
        assert_ne!(r["id"], detail["id"]);
    }

    let res = client
        .get(format!("{}/en/products/no-such-valve", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn page_metadata_is_localized() {
    let server = TestServer::spawn(RecordingMailer::new(MailerMode::Deliver)).await;
    let client = reqwest::Client::new();

    let about: serde_json::Value = client
        .get(format!("{}/ar/about", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(about["locale"], "ar");
    assert_eq!(about["dir"], "rtl");
    assert_eq!(about["title"], "عن سدود");

    let res = client
        .get(format!("{}/en/checkout", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quote_with_missing_email_is_rejected_with_the_wire_body() {
    let mailer = RecordingMailer::new(MailerMode::Deliver);
    let server = TestServer::spawn(mailer.clone()).await;

    let mut body = quote_body();
    body.as_object_mut().unwrap().remove("email");

    let res = reqwest::Client::new()
        .post(format!("{}/api/send-quote", server.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Missing required fields" }));
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn quote_submission_sends_business_and_customer_emails() {
    let mailer = RecordingMailer::new(MailerMode::Deliver);
    let server = TestServer::spawn(mailer.clone()).await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/send-quote", server.base_url))
        .json(&quote_body())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].subject, "New Quote Request: Standard Brass Ball Valve");
    assert_eq!(sent[0].reply_to.as_deref(), Some("amal@example.com"));
    assert_eq!(sent[1].to, "amal@example.com");
    assert!(sent[1].html_body.contains("Dear Amal Haddad,"));
}

#[tokio::test]
async fn delivery_failure_is_a_500_with_details() {
    let server = TestServer::spawn(RecordingMailer::new(MailerMode::Fail)).await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/send-quote", server.base_url))
        .json(&quote_body())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["error"],
        "Failed to send quote request. Please try again later."
    );
    assert!(body["details"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn duplicate_submission_is_rejected_while_the_first_is_in_flight() {
    let gate = Arc::new(tokio::sync::Semaphore::new(0));
    let mailer = RecordingMailer::new(MailerMode::Hold(gate.clone()));
    let server = TestServer::spawn(mailer.clone()).await;
    let client = reqwest::Client::new();

    let url = format!("{}/api/send-quote", server.base_url);
    let first = tokio::spawn({
        let client = client.clone();
        let url = url.clone();
        async move { client.post(url).json(&quote_body()).send().await.unwrap() }
    });

    // Let the first submission claim the in-flight slot.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let duplicate = client.post(&url).json(&quote_body()).send().await.unwrap();
    assert_eq!(duplicate.status(), StatusCode::TOO_MANY_REQUESTS);

    // Release both sends; the original submission completes normally.
    gate.add_permits(2);
    let first = first.await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(mailer.sent().len(), 2);
}

#[tokio::test]
async fn disconnected_submission_does_not_block_a_retry() {
    let gate = Arc::new(tokio::sync::Semaphore::new(0));
    let mailer = RecordingMailer::new(MailerMode::Hold(gate.clone()));
    let server = TestServer::spawn(mailer.clone()).await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/send-quote", server.base_url);

    let first = tokio::spawn({
        let client = client.clone();
        let url = url.clone();
        async move { client.post(url).json(&quote_body()).send().await }
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    // Drop the client request mid-send. Closing the connection cancels the
    // handler, which must release the in-flight key.
    first.abort();
    let _ = first.await;

    // Enough permits for a full retry even if the cancelled send raced one.
    gate.add_permits(4);
    let mut retry = client.post(&url).json(&quote_body()).send().await.unwrap();
    for _ in 0..20 {
        if retry.status() != StatusCode::TOO_MANY_REQUESTS {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(25)).await;
        retry = client.post(&url).json(&quote_body()).send().await.unwrap();
    }
    assert_eq!(retry.status(), StatusCode::OK);
}
