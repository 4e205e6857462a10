//! Integration tests for the registration API.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use mailchannels_client::MailChannelsClient;
use registration_api::api::{create_router, AppState};
use registration_api::Config;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// App state with delivery pointed at the given mail API URL.
fn create_test_state(mail_api_url: &str) -> AppState {
    let mut config = Config::default();
    config.email.api_url = mail_api_url.to_string();
    let mailer = MailChannelsClient::new(mail_api_url).unwrap();
    AppState::new(config, Some(mailer))
}

/// App state with email delivery disabled.
fn create_test_state_no_email() -> AppState {
    let mut config = Config::default();
    config.email.enabled = false;
    AppState::new(config, None)
}

fn post_register(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn complete_submission() -> serde_json::Value {
    serde_json::json!({
        "name": "A&B",
        "email": "a@b.com",
        "university": "U",
        "year": "1",
        "experience": "Beginner",
        "tshirt": "M",
        "coc": true
    })
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router(create_test_state_no_email());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["emailDeliveryEnabled"], false);
}

#[tokio::test]
async fn test_missing_required_field() {
    let app = create_router(create_test_state_no_email());

    let mut submission = complete_submission();
    submission.as_object_mut().unwrap().remove("email");

    let response = app.oneshot(post_register(&submission.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Missing required fields");
}

#[tokio::test]
async fn test_unchecked_coc_counts_as_missing() {
    let app = create_router(create_test_state_no_email());

    let mut submission = complete_submission();
    submission["coc"] = serde_json::json!(false);

    let response = app.oneshot(post_register(&submission.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Missing required fields");
}

#[tokio::test]
async fn test_invalid_email_format() {
    let app = create_router(create_test_state_no_email());

    let mut submission = complete_submission();
    submission["email"] = serde_json::json!("not-an-email");

    let response = app.oneshot(post_register(&submission.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Invalid email format");
}

#[tokio::test]
async fn test_malformed_body_is_internal_error() {
    let app = create_router(create_test_state_no_email());

    let response = app.oneshot(post_register("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Internal server error");
}

#[tokio::test]
async fn test_non_object_body_is_internal_error() {
    let app = create_router(create_test_state_no_email());

    let response = app.oneshot(post_register("[1, 2, 3]")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Internal server error");
}

#[tokio::test]
async fn test_register_delivers_email() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tx/v1/send"))
        .and(body_partial_json(serde_json::json!({
            "subject": "New registration: A&amp;B",
            "reply_to": { "email": "a@b.com" },
            "personalizations": [{ "to": [{ "email": "registrations@hackthevalley.com" }] }]
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = create_router(create_test_state(&mock_server.uri()));

    let response = app
        .oneshot(post_register(&complete_submission().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["deliveredByEmail"], true);
    assert_eq!(json["message"], "Registration received");
}

#[tokio::test]
async fn test_register_accepted_when_delivery_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tx/v1/send"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let app = create_router(create_test_state(&mock_server.uri()));

    let response = app
        .oneshot(post_register(&complete_submission().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["deliveredByEmail"], false);
}

#[tokio::test]
async fn test_register_accepted_when_mail_api_unreachable() {
    // Nothing is listening on this port
    let app = create_router(create_test_state("http://127.0.0.1:9"));

    let response = app
        .oneshot(post_register(&complete_submission().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["deliveredByEmail"], false);
}

#[tokio::test]
async fn test_register_without_email_delivery() {
    let app = create_router(create_test_state_no_email());

    let response = app
        .oneshot(post_register(&complete_submission().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Registration received");
    // Simpler variant omits the delivery flag entirely
    assert!(json.get("deliveredByEmail").is_none());
}

#[tokio::test]
async fn test_optional_fields_render_as_not_provided() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tx/v1/send"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = create_router(create_test_state(&mock_server.uri()));

    // No major, dietary, or timestamp
    let response = app
        .oneshot(post_register(&complete_submission().to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let payload: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let html = payload["content"][0]["value"].as_str().unwrap();
    assert!(html.contains("<strong>Major:</strong> Not provided"));
    assert!(html.contains("<strong>Agreed to CoC:</strong> Yes"));
}
