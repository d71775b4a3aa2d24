mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_json(app: &TestApp, uri: &str, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

fn future_date(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days)).format("%Y-%m-%d").to_string()
}

fn enquiry_payload(team_size: &str, duration: &str) -> Value {
    json!({
        "companyName": "Acme Corp",
        "contactName": "Bob",
        "contactEmail": "bob@acme.example",
        "contactPhone": "+91-5550123",
        "teamSize": team_size,
        "preferredDate": future_date(14),
        "timeSlot": "afternoon",
        "duration": duration,
        "message": "Team offsite"
    })
}

#[tokio::test]
async fn test_create_corporate_enquiry_with_estimate() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/corporate", enquiry_payload("21-50", "3h")).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = parse_body(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["companyName"], "Acme Corp");
    assert_eq!(body["data"]["status"], "pending");
    // 4500.00 base for 21-50 people, x1.4 for 3 hours
    assert_eq!(body["data"]["estimatedCents"], 630000);
}

#[tokio::test]
async fn test_full_day_estimate_for_largest_bracket() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/corporate", enquiry_payload("100+", "full_day")).await;
    let body = parse_body(res).await;
    assert_eq!(body["data"]["estimatedCents"], 3750000);
}

#[tokio::test]
async fn test_corporate_validation() {
    let app = TestApp::new().await;

    let mut bad_team = enquiry_payload("21-50", "3h");
    bad_team["teamSize"] = json!("5-9");
    let res = post_json(&app, "/api/v1/corporate", bad_team).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let mut bad_slot = enquiry_payload("21-50", "3h");
    bad_slot["timeSlot"] = json!("14:00");
    let res = post_json(&app, "/api/v1/corporate", bad_slot).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let mut past_date = enquiry_payload("21-50", "3h");
    past_date["preferredDate"] = json!(future_date(-1));
    let res = post_json(&app, "/api/v1/corporate", past_date).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let mut bad_email = enquiry_payload("21-50", "3h");
    bad_email["contactEmail"] = json!("not-an-email");
    let res = post_json(&app, "/api/v1/corporate", bad_email).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_corporate_status_transitions_and_listing() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/corporate", enquiry_payload("10-20", "2h")).await;
    let id = parse_body(res).await["data"]["id"].as_str().unwrap().to_string();
    post_json(&app, "/api/v1/corporate", enquiry_payload("51-100", "4h")).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PATCH").uri(format!("/api/v1/corporate/{}/status", id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"status": "quoted"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["data"]["status"], "quoted");

    let res = app.router.clone().oneshot(
        Request::builder().uri("/api/v1/corporate?status=quoted").body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["pagination"]["totalItems"], 1);

    let res = app.router.clone().oneshot(
        Request::builder().method("PATCH").uri(format!("/api/v1/corporate/{}/status", id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"status": "archived"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.router.clone().oneshot(
        Request::builder().method("PATCH").uri("/api/v1/corporate/missing/status")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"status": "quoted"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_corporate_enquiry() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/corporate", enquiry_payload("10-20", "2h")).await;
    let id = parse_body(res).await["data"]["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().uri(format!("/api/v1/corporate/{}", id)).body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["data"]["teamSize"], "10-20");
    assert_eq!(body["data"]["duration"], "2h");

    let res = app.router.clone().oneshot(
        Request::builder().uri("/api/v1/corporate/nope").body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
