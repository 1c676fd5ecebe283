//! HTTP-level tests driving the router in-process

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use linkpage_core::{ClientSecret, LinkpageError, PaymentProvider, Result, Storage};
use linkpage_server::storage::MemStorage;
use linkpage_server::{build_router, AppState};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

struct FakeStripe {
    fail_with: Option<String>,
}

#[async_trait]
impl PaymentProvider for FakeStripe {
    async fn create_payment_intent(
        &self,
        _amount_minor: i64,
        _currency: &str,
        _metadata: HashMap<String, String>,
    ) -> Result<ClientSecret> {
        if let Some(ref reason) = self.fail_with {
            return Err(LinkpageError::Payment(reason.clone()));
        }
        Ok(ClientSecret {
            intent_id: "pi_test".to_string(),
            client_secret: "pi_test_secret".to_string(),
        })
    }

    async fn create_setup_intent(
        &self,
        _metadata: HashMap<String, String>,
    ) -> Result<ClientSecret> {
        Ok(ClientSecret {
            intent_id: "seti_test".to_string(),
            client_secret: "seti_test_secret".to_string(),
        })
    }
}

fn app_with(provider: Option<FakeStripe>) -> (Router, Arc<MemStorage>) {
    let storage = Arc::new(MemStorage::new());
    let provider = provider.map(|p| Arc::new(p) as Arc<dyn PaymentProvider>);
    let state = AppState::new(storage.clone(), provider);
    (build_router(state, None), storage)
}

fn app() -> Router {
    app_with(None).0
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_profile_returns_seeded_user_and_links() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/profile", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], "default-user");
    assert_eq!(body["user"]["displayName"], "Alex Johnson");
    assert_eq!(body["socialLinks"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_user_by_username() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/users/alexjohnson", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "alexjohnson");

    let (status, body) = send(&app, Method::GET, "/api/users/nobody", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn test_create_and_update_user() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "username": "jdoe", "displayName": "J Doe" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["followers"], 0);
    assert!(created["bio"].is_null());
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/users/{id}"),
        Some(json!({ "bio": "Hello", "posts": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["bio"], "Hello");
    assert_eq!(updated["posts"], 3);
    assert_eq!(updated["displayName"], "J Doe");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let (status, body) = send(&app, Method::GET, "/api/users/jdoe", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["socialLinks"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_user_payloads() {
    let app = app();

    // Missing displayName
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "username": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid data");

    // Present but empty
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "username": "", "displayName": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/users/default-user",
        Some(json!({ "followers": -5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/users/missing",
        Some(json!({ "bio": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_social_link_crud() {
    let (app, storage) = app_with(None);

    let (status, link) = send(
        &app,
        Method::POST,
        "/api/social-links",
        Some(json!({ "userId": "u1", "platform": "github", "handle": "x", "url": "http://x" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(link["isActive"], "true");
    let id = link["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/social-links/{id}"),
        Some(json!({ "isActive": "false" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["isActive"], "false");
    assert_eq!(updated["handle"], "x");

    let (status, body) = send(&app, Method::DELETE, &format!("/api/social-links/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Social link deleted");
    assert!(storage.get_social_links("u1").await.unwrap().is_empty());

    let (status, _) = send(&app, Method::DELETE, &format!("/api/social-links/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/social-links",
        Some(json!({ "userId": "u1", "platform": "myspace", "handle": "x", "url": "http://x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_track_records_client_info() {
    let app = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/analytics/track")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::USER_AGENT, "test-agent")
        .header("X-Forwarded-For", "198.51.100.4")
        .body(Body::from(
            json!({ "eventType": "click", "linkId": "l1", "metadata": { "platform": "github" } })
                .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, events) = send(&app, Method::GET, "/api/analytics/default-user", None).await;
    assert_eq!(status, StatusCode::OK);
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["eventType"], "click");
    assert_eq!(events[0]["linkId"], "l1");
    assert_eq!(events[0]["ipAddress"], "198.51.100.4");
    assert_eq!(events[0]["userAgent"], "test-agent");
    assert_eq!(events[0]["metadata"]["platform"], "github");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/analytics/track",
        Some(json!({ "eventType": "hover" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_payments_unavailable_without_provider() {
    let app = app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/create-payment-intent",
        Some(json!({ "amount": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/create-subscription",
        Some(json!({ "planId": "pro", "price": 9.99 })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (_, tips) = send(&app, Method::GET, "/api/tips/default-user", None).await;
    assert!(tips.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_payment_intent_records_tip() {
    let (app, _) = app_with(Some(FakeStripe { fail_with: None }));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/create-payment-intent",
        Some(json!({ "amount": 25, "tipperName": "Sam" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clientSecret"], "pi_test_secret");

    let (status, tips) = send(&app, Method::GET, "/api/tips/default-user", None).await;
    assert_eq!(status, StatusCode::OK);
    let tips = tips.as_array().unwrap();
    assert_eq!(tips.len(), 1);
    assert_eq!(tips[0]["id"], body["tipId"]);
    assert_eq!(tips[0]["status"], "pending");
    assert_eq!(tips[0]["currency"], "USD");
    assert_eq!(tips[0]["paymentIntentId"], "pi_test");
    assert_eq!(tips[0]["tipperName"], "Sam");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/create-payment-intent",
        Some(json!({ "amount": 0.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_oversized_tip_amount_rejected() {
    let (app, storage) = app_with(Some(FakeStripe { fail_with: None }));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/create-payment-intent",
        Some(json!({ "amount": 1e27 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid data: amount"));
    assert!(storage.get_tips("default-user").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_provider_failure_reports_reason() {
    let (app, storage) = app_with(Some(FakeStripe {
        fail_with: Some("Your card was declined.".to_string()),
    }));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/create-payment-intent",
        Some(json!({ "amount": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["message"],
        "Error creating payment intent: Your card was declined."
    );
    assert!(storage.get_tips("default-user").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_subscription_and_plans() {
    let (app, _) = app_with(Some(FakeStripe { fail_with: None }));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/create-subscription",
        Some(json!({ "planId": "business", "price": 19.99 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clientSecret"], "seti_test_secret");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/create-subscription",
        Some(json!({ "planId": "platinum" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, plans) = send(&app, Method::GET, "/api/plans", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = plans
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["basic", "pro", "business"]);
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app_with(Some(FakeStripe { fail_with: None }));
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["payments"], true);
    assert_eq!(body["counts"]["users"], 1);
    assert_eq!(body["counts"]["socialLinks"], 6);
    assert_eq!(body["counts"]["tips"], 0);
}
