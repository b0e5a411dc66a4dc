mod common;

use actix_web::test;
use serde_json::json;
use serial_test::serial;

use common::TestApp;

// These tests never reach the model: they cover the request-side
// contract (deserialization) and the uniform failure envelope when the
// collaborator is not configured.

#[actix_rt::test]
#[serial]
async fn test_stays_without_api_key_returns_failure_envelope() {
    std::env::remove_var("GEMINI_API_KEY");

    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/suggestions/stays")
        .set_json(&json!({
            "destination": "Goa",
            "travelers": 4,
            "budget": "moderate",
            "preferences": "near beach",
            "currentLocation": "Bengaluru",
            "tripStartDate": "2025-01-10",
            "dailyTravelDistance": 300.0
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("GEMINI_API_KEY"));
    assert!(body.get("data").is_none());
}

#[actix_rt::test]
#[serial]
async fn test_currency_without_api_key_returns_failure_envelope() {
    std::env::remove_var("GEMINI_API_KEY");

    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/suggestions/currency")
        .set_json(&json!({
            "amount": 100.0,
            "from": "USD",
            "to": "INR"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_rt::test]
#[serial]
async fn test_stays_rejects_malformed_request() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    // travelers must be a number
    let req = test::TestRequest::post()
        .uri("/api/suggestions/stays")
        .set_json(&json!({
            "destination": "Goa",
            "travelers": "four",
            "budget": "moderate",
            "preferences": "",
            "currentLocation": "Bengaluru",
            "tripStartDate": "2025-01-10",
            "dailyTravelDistance": 300.0
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_translate_rejects_missing_fields() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/suggestions/translate")
        .set_json(&json!({ "text": "hello" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_health_reports_missing_model_configuration() {
    std::env::remove_var("GEMINI_API_KEY");

    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["suggestion_model"]["status"], "error");
}

#[actix_rt::test]
#[serial]
async fn test_health_ok_when_model_configured() {
    std::env::set_var("GEMINI_API_KEY", "test-key-12345");

    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");

    std::env::remove_var("GEMINI_API_KEY");
}
