//! Auth API Handlers
//! /api/auth エンドポイント（モック認証）

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::models::{LoginRequest, RegisterRequest, User};
use crate::AppState;

// ========================================
// Response Types
// ========================================

#[derive(Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: User,
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

// ========================================
// Handlers
// ========================================

/// POST /api/auth/login - ログイン（モック — パスワードは検証しない）
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, Json<ErrorResponse>)> {
    let user = state
        .session
        .login(&req.email, &req.password)
        .map_err(|e| {
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Login failed: {}", e),
            )
        })?;
    Ok(Json(AuthResponse {
        success: true,
        user,
    }))
}

/// POST /api/auth/register - 登録（モック）
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, Json<ErrorResponse>)> {
    let user = state
        .session
        .register(&req.name, &req.email, &req.password)
        .map_err(|e| {
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Registration failed: {}", e),
            )
        })?;
    Ok(Json(AuthResponse {
        success: true,
        user,
    }))
}

/// POST /api/auth/logout - ログアウト
pub async fn logout(State(state): State<Arc<AppState>>) -> Json<LogoutResponse> {
    state.session.logout();
    Json(LogoutResponse { success: true })
}

/// GET /api/auth/me - 現在の identity
pub async fn me(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AuthResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.session.current() {
        Some(user) => Ok(Json(AuthResponse {
            success: true,
            user,
        })),
        None => Err(error_response(
            StatusCode::UNAUTHORIZED,
            "Not logged in".to_string(),
        )),
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
