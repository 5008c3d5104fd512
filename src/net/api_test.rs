use super::*;
use std::time::Duration;

// =============================================================
// parse_receipt
// =============================================================

#[test]
fn parse_receipt_empty_body_is_none() {
    assert!(parse_receipt("").is_none());
    assert!(parse_receipt("  \n").is_none());
}

#[test]
fn parse_receipt_ignores_foreign_json() {
    assert!(parse_receipt(r#"{"ok":true}"#).is_none());
    assert!(parse_receipt("created").is_none());
}

#[test]
fn parse_receipt_reads_success_body() {
    let body = r#"{"status":"success","message":"Заказ создан успешно","order":{"id":1,"box_id":2,"customer_name":"n","customer_email":"e@x","customer_phone":"p","created_at":"c"}}"#;
    let receipt = parse_receipt(body).expect("receipt");
    assert_eq!(receipt.status, "success");
    assert_eq!(receipt.order.map(|o| o.box_id), Some(2));
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn status_error_display_omits_body() {
    let err = ApiError::Status { status: 500, body: "traceback".into() };
    assert_eq!(err.to_string(), "unexpected status 500");
}

// =============================================================
// HttpStorefront
// =============================================================

#[test]
fn new_keeps_config() {
    let mut config = ApiConfig::with_base_url("http://127.0.0.1:9/api");
    config.request_timeout = Some(Duration::from_secs(2));
    let client = HttpStorefront::new(config.clone()).unwrap();
    assert_eq!(client.config(), &config);
}

#[tokio::test]
async fn unreachable_service_is_request_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpStorefront::new(ApiConfig::with_base_url(&format!("http://{addr}/api"))).unwrap();
    let err = client.fetch_boxes().await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)), "got {err:?}");
}
