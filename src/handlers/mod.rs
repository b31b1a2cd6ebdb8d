//! API Handlers
//! ルーター構築と /api/health

pub mod auth;
pub mod cars;
pub mod receipts;

use axum::{
    extract::DefaultBodyLimit,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// ヘルスチェック
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "car-market-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// ルーター構築
pub fn router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        // cars
        .route("/api/cars", get(cars::list_cars).post(cars::create_car))
        .route("/api/cars/featured", get(cars::featured_cars))
        .route(
            "/api/cars/:id",
            get(cars::get_car)
                .put(cars::update_car)
                .delete(cars::delete_car),
        )
        // receipts
        .route(
            "/api/receipts",
            get(receipts::list_receipts).post(receipts::upload_receipt),
        )
        .route("/api/receipts/:id", get(receipts::get_receipt))
        .route("/api/receipts/:id/actions", get(receipts::receipt_actions))
        .route("/api/receipts/:id/approve", post(receipts::approve_receipt))
        .route("/api/receipts/:id/reject", post(receipts::reject_receipt))
        // subscriptions
        .route(
            "/api/subscriptions/actions",
            get(receipts::list_actions).post(receipts::manual_action),
        )
        // auth
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
