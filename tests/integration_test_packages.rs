mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
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

fn rage_room_payload() -> Value {
    json!({
        "name": "Rage Room",
        "description": "30 minutes of cathartic destruction",
        "priceCents": 150000,
        "durationMin": 30,
        "capacityMin": 1,
        "capacityMax": 6,
        "corporateDiscountPct": 20,
        "groupDiscountPct": 10,
        "groupMinParticipants": 4,
        "seasonalDiscountPct": 30,
        "seasonalStart": "2025-12-01",
        "seasonalEnd": "2025-12-31"
    })
}

#[tokio::test]
async fn test_create_and_get_package() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/packages", rage_room_payload()).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = parse_body(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Rage Room");
    assert_eq!(body["data"]["slug"], "rage-room");
    assert_eq!(body["data"]["priceCents"], 150000);
    assert_eq!(body["data"]["isActive"], true);
    assert_eq!(body["data"]["timesBooked"], 0);

    let id = body["data"]["id"].as_str().unwrap();
    let res = app.router.clone().oneshot(
        Request::builder().uri(format!("/api/v1/packages/{}", id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["data"]["name"], "Rage Room");
}

#[tokio::test]
async fn test_duplicate_package_name_conflict() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/packages", rage_room_payload()).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = post_json(&app, "/api/v1/packages", rage_room_payload()).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = parse_body(res).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_package_validation_rules() {
    let app = TestApp::new().await;

    let mut bad_price = rage_room_payload();
    bad_price["priceCents"] = json!(0);
    let res = post_json(&app, "/api/v1/packages", bad_price).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let mut bad_capacity = rage_room_payload();
    bad_capacity["capacityMin"] = json!(10);
    bad_capacity["capacityMax"] = json!(2);
    let res = post_json(&app, "/api/v1/packages", bad_capacity).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let mut oversized = rage_room_payload();
    oversized["capacityMax"] = json!(60);
    let res = post_json(&app, "/api/v1/packages", oversized).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let mut bad_discount = rage_room_payload();
    bad_discount["groupDiscountPct"] = json!(60);
    let res = post_json(&app, "/api/v1/packages", bad_discount).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let mut inverted_season = rage_room_payload();
    inverted_season["seasonalStart"] = json!("2025-12-31");
    inverted_season["seasonalEnd"] = json!("2025-12-01");
    let res = post_json(&app, "/api/v1/packages", inverted_season).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_soft_delete_hides_package_from_default_list() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/packages", rage_room_payload()).await;
    let id = parse_body(res).await["data"]["id"].as_str().unwrap().to_string();

    let mut second = rage_room_payload();
    second["name"] = json!("Smash Deluxe");
    post_json(&app, "/api/v1/packages", second).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/packages/{}", id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().uri("/api/v1/packages").body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], "Smash Deluxe");
    assert_eq!(body["pagination"]["totalItems"], 1);

    let res = app.router.clone().oneshot(
        Request::builder().uri("/api/v1/packages?active_only=false").body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // Deleting again is a 404: the row is already inactive.
    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/packages/{}", id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quote_applies_and_caps_discounts() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/packages", rage_room_payload()).await;
    let id = parse_body(res).await["data"]["id"].as_str().unwrap().to_string();

    // Off-season, small group, not corporate: no discount.
    let res = post_json(&app, &format!("/api/v1/packages/{}/quote", id), json!({
        "participants": 2, "date": "2025-06-15"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["data"]["originalPrice"], 300000);
    assert_eq!(body["data"]["finalPrice"], 300000);
    assert_eq!(body["data"]["discountApplied"], 0);

    // Corporate + group + seasonal = 60, capped at 50.
    let res = post_json(&app, &format!("/api/v1/packages/{}/quote", id), json!({
        "participants": 4, "corporate": true, "date": "2025-12-15"
    })).await;
    let body = parse_body(res).await;
    assert_eq!(body["data"]["discountApplied"], 50);
    assert_eq!(body["data"]["originalPrice"], 600000);
    assert_eq!(body["data"]["finalPrice"], 300000);
    assert_eq!(body["data"]["savings"], 300000);
}

#[tokio::test]
async fn test_quote_rejects_unknown_and_inactive_packages() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/packages/nope/quote", json!({"participants": 2})).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = post_json(&app, "/api/v1/packages", rage_room_payload()).await;
    let id = parse_body(res).await["data"]["id"].as_str().unwrap().to_string();

    app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/packages/{}", id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let res = post_json(&app, &format!("/api/v1/packages/{}/quote", id), json!({"participants": 2})).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_package() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/packages", rage_room_payload()).await;
    let id = parse_body(res).await["data"]["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/packages/{}", id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"priceCents": 175000, "description": "Now with more glass"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["data"]["priceCents"], 175000);
    assert_eq!(body["data"]["description"], "Now with more glass");
    assert_eq!(body["data"]["name"], "Rage Room");

    // Update must re-validate.
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/packages/{}", id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"corporateDiscountPct": 99}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
