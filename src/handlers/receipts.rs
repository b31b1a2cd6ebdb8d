//! Receipts API Handlers
//! /api/receipts・/api/subscriptions エンドポイント（管理バックオフィス）

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::models::{
    ApproveReceiptRequest, ManualActionRequest, NewReceipt, PaymentReceipt, PlanType,
    RejectReceiptRequest, SubscriptionAction, User,
};
use crate::store::StoreError;
use crate::AppState;

// ========================================
// Response Types
// ========================================

#[derive(Serialize)]
pub struct ReceiptListResponse {
    pub success: bool,
    pub receipts: Vec<PaymentReceipt>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct ReceiptDetailResponse {
    pub success: bool,
    pub receipt: PaymentReceipt,
}

#[derive(Serialize)]
pub struct ActionListResponse {
    pub success: bool,
    pub actions: Vec<SubscriptionAction>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct ActionDetailResponse {
    pub success: bool,
    pub action: SubscriptionAction,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

// ========================================
// Handlers
// ========================================

/// GET /api/receipts - 領収書一覧（管理者のみ）
pub async fn list_receipts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReceiptListResponse>, (StatusCode, Json<ErrorResponse>)> {
    require_admin(&state)?;
    let receipts = state.receipts.receipts().to_vec();
    let total = receipts.len();
    Ok(Json(ReceiptListResponse {
        success: true,
        receipts,
        total,
    }))
}

/// GET /api/receipts/:id - 領収書詳細
pub async fn get_receipt(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ReceiptDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.receipts.get_by_id(id) {
        Some(receipt) => Ok(Json(ReceiptDetailResponse {
            success: true,
            receipt,
        })),
        None => Err(error_response(
            StatusCode::NOT_FOUND,
            "Receipt not found".to_string(),
        )),
    }
}

/// GET /api/receipts/:id/actions - 領収書に紐づく監査ログ
pub async fn receipt_actions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ActionListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let actions = state.receipts.actions_for_receipt(id);
    let total = actions.len();
    Ok(Json(ActionListResponse {
        success: true,
        actions,
        total,
    }))
}

/// POST /api/receipts - 領収書アップロード（multipart、要ログイン）
///
/// Parameters (multipart/form-data):
///   - file: 領収書ファイル（必須）
///   - planType: "pro" | "premium"（必須）
pub async fn upload_receipt(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ReceiptDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let user = state.session.current().ok_or_else(|| {
        error_response(StatusCode::UNAUTHORIZED, "Login required".to_string())
    })?;

    let mut file_name: Option<String> = None;
    let mut file_size: Option<i64> = None;
    let mut plan_type: Option<PlanType> = None;

    // multipart フィールドを解析
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Multipart error: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                file_name = Some(field.file_name().unwrap_or("receipt.bin").to_string());
                let bytes = field.bytes().await.map_err(|e| {
                    error_response(StatusCode::BAD_REQUEST, format!("File read error: {}", e))
                })?;
                // ファイル本体は保存しない。サイズだけ控えておく
                file_size = Some(bytes.len() as i64);
            }
            "planType" => {
                let text = field.text().await.map_err(|e| {
                    error_response(StatusCode::BAD_REQUEST, format!("planType error: {}", e))
                })?;
                plan_type = Some(match text.as_str() {
                    "pro" => PlanType::Pro,
                    "premium" => PlanType::Premium,
                    other => {
                        return Err(error_response(
                            StatusCode::BAD_REQUEST,
                            format!("planType must be 'pro' or 'premium', got '{}'", other),
                        ))
                    }
                });
            }
            _ => {
                warn!("Unknown multipart field: {}", name);
            }
        }
    }

    let file_name = file_name.ok_or_else(|| {
        error_response(StatusCode::BAD_REQUEST, "No file uploaded".to_string())
    })?;
    let file_size = file_size.unwrap_or(0);
    let plan_type = plan_type.ok_or_else(|| {
        error_response(StatusCode::BAD_REQUEST, "planType is required".to_string())
    })?;

    let receipt = state.receipts.upload(NewReceipt {
        user_id: user.id,
        user_name: user.name,
        user_email: user.email,
        plan_type,
        plan_price: plan_type.price(),
        receipt_file: format!("receipt://{}", file_name),
        file_name,
        file_size,
    });

    Ok(Json(ReceiptDetailResponse {
        success: true,
        receipt,
    }))
}

/// POST /api/receipts/:id/approve - 承認（管理者のみ）
pub async fn approve_receipt(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<ApproveReceiptRequest>,
) -> Result<Json<ReceiptDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let admin = require_admin(&state)?;
    let receipt = state
        .receipts
        .approve(id, &admin.name, req.notes)
        .map_err(store_error_response)?;
    Ok(Json(ReceiptDetailResponse {
        success: true,
        receipt,
    }))
}

/// POST /api/receipts/:id/reject - 却下（管理者のみ、理由必須）
pub async fn reject_receipt(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<RejectReceiptRequest>,
) -> Result<Json<ReceiptDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let admin = require_admin(&state)?;
    let receipt = state
        .receipts
        .reject(id, &admin.name, &req.reason)
        .map_err(store_error_response)?;
    Ok(Json(ReceiptDetailResponse {
        success: true,
        receipt,
    }))
}

/// GET /api/subscriptions/actions - 監査ログ一覧（管理者のみ）
pub async fn list_actions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ActionListResponse>, (StatusCode, Json<ErrorResponse>)> {
    require_admin(&state)?;
    let actions = state.receipts.actions().to_vec();
    let total = actions.len();
    Ok(Json(ActionListResponse {
        success: true,
        actions,
        total,
    }))
}

/// POST /api/subscriptions/actions - 手動操作（管理者のみ）
pub async fn manual_action(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ManualActionRequest>,
) -> Result<Json<ActionDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let admin = require_admin(&state)?;
    let action = state
        .receipts
        .manual_action(req.user_id, req.action, &admin.name, &req.details)
        .map_err(store_error_response)?;
    Ok(Json(ActionDetailResponse {
        success: true,
        action,
    }))
}

// ========================================
// Helper Functions
// ========================================

/// 管理者権限チェック。アクション記録に使う表示名もここで手に入る
fn require_admin(state: &AppState) -> Result<User, (StatusCode, Json<ErrorResponse>)> {
    let user = state.session.current().ok_or_else(|| {
        error_response(StatusCode::UNAUTHORIZED, "Login required".to_string())
    })?;
    if !user.is_admin {
        return Err(error_response(
            StatusCode::FORBIDDEN,
            "Admin privileges required".to_string(),
        ));
    }
    Ok(user)
}

fn store_error_response(err: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        StoreError::ReceiptNotFound(_) => StatusCode::NOT_FOUND,
        StoreError::AlreadyReviewed(_) => StatusCode::CONFLICT,
        StoreError::EmptyReason | StoreError::NotManualAction(_) => StatusCode::BAD_REQUEST,
    };
    error_response(status, err.to_string())
}

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
