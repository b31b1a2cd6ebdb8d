//! API integration tests
//! ルーター全体を oneshot で叩いて挙動を確認する

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use car_market_server::cache::KvCache;
use car_market_server::{handlers, AppState};

fn test_app() -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let cache = KvCache::open(dir.path()).unwrap();
    let state = Arc::new(AppState::new(cache));
    let app = handlers::router(state, 10 * 1024 * 1024);
    (dir, app)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn login(app: &Router, email: &str) {
    let (status, body) = send(
        app,
        post_json("/api/auth/login", json!({"email": email, "password": "pw"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn health_check_reports_ok() {
    let (_dir, app) = test_app();
    let (status, body) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "car-market-api");
}

#[tokio::test]
async fn list_cars_returns_seed_collection() {
    let (_dir, app) = test_app();
    let (status, body) = send(&app, get("/api/cars")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6);
    // 新着順：先頭は BMW X5
    assert_eq!(body["cars"][0]["brand"], "BMW");
    assert_eq!(body["cars"][0]["fuelType"], "Petrol");
    assert_eq!(body["cars"][0]["bodyType"], "SUV");
}

#[tokio::test]
async fn filter_electric_returns_only_the_tesla() {
    let (_dir, app) = test_app();
    let (status, body) = send(&app, get("/api/cars?fuelType=Electric")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["cars"][0]["model"], "Model 3");
}

#[tokio::test]
async fn min_price_filter_is_inclusive() {
    let (_dir, app) = test_app();
    let (status, body) = send(&app, get("/api/cars?minPrice=60000")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2); // BMW 75000, Audi 68000
    for car in body["cars"].as_array().unwrap() {
        assert!(car["price"].as_i64().unwrap() >= 60000);
    }
}

#[tokio::test]
async fn search_matches_description_case_insensitively() {
    let (_dir, app) = test_app();
    let (status, body) = send(&app, get("/api/cars?q=AUTOPILOT")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["cars"][0]["brand"], "Tesla");
}

#[tokio::test]
async fn sort_orders_results_without_mutating_the_store() {
    let (_dir, app) = test_app();
    let (_, by_price) = send(&app, get("/api/cars?sort=price-low")).await;
    assert_eq!(by_price["cars"][0]["price"], 28000);

    // ソート後も素の一覧は新着順のまま
    let (_, plain) = send(&app, get("/api/cars")).await;
    assert_eq!(plain["cars"][0]["brand"], "BMW");
}

#[tokio::test]
async fn featured_cars_are_featured_and_active() {
    let (_dir, app) = test_app();
    let (status, body) = send(&app, get("/api/cars/featured")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    for car in body["cars"].as_array().unwrap() {
        assert_eq!(car["featured"], true);
        assert_eq!(car["status"], "active");
    }
}

#[tokio::test]
async fn missing_car_is_404() {
    let (_dir, app) = test_app();
    let (status, body) = send(&app, get("/api/cars/999999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn create_car_requires_login() {
    let (_dir, app) = test_app();
    let req = json!({
        "title": "Mazda MX-5",
        "brand": "Mazda",
        "model": "MX-5",
        "year": 2020,
        "price": 25000,
        "mileage": 30000,
        "fuelType": "Petrol",
        "transmission": "Manual",
        "bodyType": "Convertible",
        "color": "Soul Red",
        "description": "Fun little roadster",
        "location": "Austin, TX"
    });

    let (status, _) = send(&app, post_json("/api/cars", req.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    login(&app, "seller@example.com").await;
    let (status, body) = send(&app, post_json("/api/cars", req)).await;
    assert_eq!(status, StatusCode::OK);
    // 投稿フローは審査待ちで作成され、出品者はセッションの identity になる
    assert_eq!(body["car"]["status"], "pending");
    assert_eq!(body["car"]["sellerName"], "John Doe");
    assert_eq!(body["car"]["createdAt"], body["car"]["updatedAt"]);

    let (_, list) = send(&app, get("/api/cars")).await;
    assert_eq!(list["total"], 7);
}

#[tokio::test]
async fn update_and_delete_car() {
    let (_dir, app) = test_app();

    let (status, body) = send(&app, put_json("/api/cars/2", json!({"price": 43000}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["car"]["price"], 43000);
    assert_eq!(body["car"]["brand"], "Tesla");

    let (status, _) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/api/cars/2")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // 2 回目の削除は 404
    let (status, _) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/api/cars/2")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn auth_flow_login_me_logout() {
    let (_dir, app) = test_app();

    let (status, _) = send(&app, get("/api/auth/me")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    login(&app, "admin@example.com").await;
    let (status, body) = send(&app, get("/api/auth/me")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["userType"], "admin");
    assert_eq!(body["user"]["isAdmin"], true);
    assert_eq!(body["user"]["subscriptionStatus"], "active");

    let (status, _) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/api/auth/logout")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, get("/api/auth/me")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_creates_standard_user() {
    let (_dir, app) = test_app();
    let (status, body) = send(
        &app,
        post_json(
            "/api/auth/register",
            json!({"name": "Jane", "email": "jane@example.com", "password": "pw"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Jane");
    assert_eq!(body["user"]["userType"], "user");
    assert_eq!(body["user"]["subscriptionStatus"], "none");
}

#[tokio::test]
async fn receipt_admin_gating() {
    let (_dir, app) = test_app();

    let (status, _) = send(&app, get("/api/receipts")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    login(&app, "jane@example.com").await;
    let (status, _) = send(&app, get("/api/receipts")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    login(&app, "admin@example.com").await;
    let (status, body) = send(&app, get("/api/receipts")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
}

#[tokio::test]
async fn approve_receipt_appends_exactly_one_action() {
    let (_dir, app) = test_app();
    login(&app, "admin@example.com").await;

    let (_, before) = send(&app, get("/api/subscriptions/actions")).await;
    let actions_before = before["total"].as_u64().unwrap();

    // seed の receipt 1 は pending
    let (status, body) = send(
        &app,
        post_json("/api/receipts/1/approve", json!({"notes": "ok"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["receipt"]["status"], "approved");
    assert_eq!(body["receipt"]["reviewedBy"], "John Doe");
    assert_eq!(body["receipt"]["notes"], "ok");

    let (_, after) = send(&app, get("/api/subscriptions/actions")).await;
    assert_eq!(after["total"].as_u64().unwrap(), actions_before + 1);
    assert_eq!(after["actions"][0]["action"], "approve");
    assert_eq!(after["actions"][0]["receiptId"], 1);
    assert_eq!(after["actions"][0]["newStatus"], "active");

    // 再承認は 409
    let (status, _) = send(&app, post_json("/api/receipts/1/approve", json!({}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn reject_requires_a_reason() {
    let (_dir, app) = test_app();
    login(&app, "admin@example.com").await;

    let (status, _) = send(
        &app,
        post_json("/api/receipts/4/reject", json!({"reason": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        post_json("/api/receipts/4/reject", json!({"reason": "Blurry photo"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["receipt"]["status"], "rejected");
    assert_eq!(body["receipt"]["rejectionReason"], "Blurry photo");
}

#[tokio::test]
async fn manual_revoke_records_expired_action() {
    let (_dir, app) = test_app();
    login(&app, "admin@example.com").await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/subscriptions/actions",
            json!({"userId": 7, "action": "revoke", "details": "fraud"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"]["receiptId"], 0);
    assert_eq!(body["action"]["userId"], 7);
    assert_eq!(body["action"]["newStatus"], "expired");

    // approve は手動アクションとして受け付けない
    let (status, _) = send(
        &app,
        post_json(
            "/api/subscriptions/actions",
            json!({"userId": 7, "action": "approve", "details": "nope"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_receipt_via_multipart() {
    let (_dir, app) = test_app();
    login(&app, "jane@example.com").await;

    let boundary = "test-boundary";
    let file_bytes = b"fake image bytes";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"planType\"\r\n\r\npro\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"bank_receipt.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(file_bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri("/api/receipts")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["receipt"]["status"], "pending");
    assert_eq!(body["receipt"]["planType"], "pro");
    assert_eq!(body["receipt"]["planPrice"], 29);
    assert_eq!(body["receipt"]["fileName"], "bank_receipt.jpg");
    assert_eq!(
        body["receipt"]["fileSize"].as_i64().unwrap(),
        file_bytes.len() as i64
    );
}
