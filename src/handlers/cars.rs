//! Cars API Handlers
//! /api/cars エンドポイント

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::models::{
    BodyType, Car, CarFilters, CreateCarRequest, FuelType, NewCar, SortKey, Transmission,
    UpdateCarRequest,
};
use crate::store::listings::sort_cars;
use crate::AppState;

/// 投稿フォームと同じ固定の連絡先（実ユーザーに電話番号フィールドはない）
const SELLER_PHONE_PLACEHOLDER: &str = "+1 (555) 123-4567";

// ========================================
// Response Types
// ========================================

#[derive(Serialize)]
pub struct CarListResponse {
    pub success: bool,
    pub cars: Vec<Car>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct CarDetailResponse {
    pub success: bool,
    pub car: Car,
}

#[derive(Serialize)]
pub struct CarDeleteResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

// ========================================
// Query Parameters
// ========================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCarsQuery {
    pub q: Option<String>,
    pub brand: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub body_type: Option<BodyType>,
    pub location: Option<String>,
    #[serde(default)]
    pub sort: SortKey,
}

// ========================================
// Handlers
// ========================================

/// GET /api/cars - 検索・フィルタ・ソート込みの一覧取得
pub async fn list_cars(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListCarsQuery>,
) -> Json<CarListResponse> {
    let filters = CarFilters {
        brand: query.brand.clone(),
        min_price: query.min_price,
        max_price: query.max_price,
        min_year: query.min_year,
        max_year: query.max_year,
        fuel_type: query.fuel_type,
        transmission: query.transmission,
        body_type: query.body_type,
        location: query.location.clone(),
    };

    // リストページ同様、フィルタ指定時はフィルタ結果を優先する
    let cars = if !filters.is_empty() {
        state.cars.filter(&filters)
    } else if let Some(q) = &query.q {
        state.cars.search(q)
    } else {
        state.cars.all().to_vec()
    };

    let cars = sort_cars(cars, query.sort);
    let total = cars.len();
    Json(CarListResponse {
        success: true,
        cars,
        total,
    })
}

/// GET /api/cars/featured - おすすめ一覧
pub async fn featured_cars(State(state): State<Arc<AppState>>) -> Json<CarListResponse> {
    let cars = state.cars.featured();
    let total = cars.len();
    Json(CarListResponse {
        success: true,
        cars,
        total,
    })
}

/// GET /api/cars/:id - 詳細取得
pub async fn get_car(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<CarDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.cars.get_by_id(id) {
        Some(car) => Ok(Json(CarDetailResponse { success: true, car })),
        None => Err(error_response(
            StatusCode::NOT_FOUND,
            "Car not found".to_string(),
        )),
    }
}

/// POST /api/cars - 出品（要ログイン、出品者情報はセッションから補完）
pub async fn create_car(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCarRequest>,
) -> Result<Json<CarDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let user = state.session.current().ok_or_else(|| {
        error_response(StatusCode::UNAUTHORIZED, "Login required".to_string())
    })?;

    let car = state.cars.create(NewCar {
        title: req.title,
        brand: req.brand,
        model: req.model,
        year: req.year,
        price: req.price,
        mileage: req.mileage,
        fuel_type: req.fuel_type,
        transmission: req.transmission,
        body_type: req.body_type,
        color: req.color,
        description: req.description,
        images: req.images,
        location: req.location,
        seller_id: user.id,
        seller_name: user.name,
        seller_phone: SELLER_PHONE_PLACEHOLDER.to_string(),
        status: req.status,
        featured: req.featured,
    });

    Ok(Json(CarDetailResponse { success: true, car }))
}

/// PUT /api/cars/:id - 部分更新
pub async fn update_car(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCarRequest>,
) -> Result<Json<CarDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.cars.update(id, req) {
        Some(car) => Ok(Json(CarDetailResponse { success: true, car })),
        None => Err(error_response(
            StatusCode::NOT_FOUND,
            "Car not found".to_string(),
        )),
    }
}

/// DELETE /api/cars/:id - 削除
pub async fn delete_car(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<CarDeleteResponse>, (StatusCode, Json<ErrorResponse>)> {
    if state.cars.delete(id) {
        Ok(Json(CarDeleteResponse { success: true, id }))
    } else {
        Err(error_response(
            StatusCode::NOT_FOUND,
            "Car not found".to_string(),
        ))
    }
}

// ========================================
// Helper Functions
// ========================================

fn error_response(status: StatusCode, message: String) -> (StatusCode, Json<ErrorResponse>) {
    warn!("API Error: {}", message);
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: message,
        }),
    )
}
