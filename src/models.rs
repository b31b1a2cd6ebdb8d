//! Data Models
//! Car, User, PaymentReceipt などのデータ構造定義

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ========================================
// Car
// ========================================

/// 燃料タイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

/// トランスミッション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
}

/// ボディタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Hatchback,
    Coupe,
    Convertible,
    Wagon,
}

/// 出品ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    Active,
    Pending,
    Sold,
    Flagged,
}

/// Car (store record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: i64,
    pub mileage: i64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub body_type: BodyType,
    pub color: String,
    pub description: String,
    pub images: Vec<String>,
    pub location: String,
    pub seller_id: i64,
    pub seller_name: String,
    pub seller_phone: String,
    pub status: CarStatus,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Car 作成入力（id / createdAt / updatedAt はストアが採番する）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub title: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: i64,
    pub mileage: i64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub body_type: BodyType,
    pub color: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub location: String,
    pub seller_id: i64,
    pub seller_name: String,
    pub seller_phone: String,
    pub status: CarStatus,
    #[serde(default)]
    pub featured: bool,
}

/// Car 作成リクエスト（出品者情報はセッションから補完される）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    pub title: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: i64,
    pub mileage: i64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub body_type: BodyType,
    pub color: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub location: String,
    #[serde(default = "default_car_status")]
    pub status: CarStatus,
    #[serde(default)]
    pub featured: bool,
}

fn default_car_status() -> CarStatus {
    // 投稿フローは審査待ちで作成する
    CarStatus::Pending
}

/// Car 部分更新リクエスト
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price: Option<i64>,
    pub mileage: Option<i64>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub body_type: Option<BodyType>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub location: Option<String>,
    pub status: Option<CarStatus>,
    pub featured: Option<bool>,
}

/// 検索フィルタ（存在する条件の AND）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarFilters {
    pub brand: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub body_type: Option<BodyType>,
    pub location: Option<String>,
}

impl CarFilters {
    /// 条件が 1 つも指定されていないか
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_year.is_none()
            && self.max_year.is_none()
            && self.fuel_type.is_none()
            && self.transmission.is_none()
            && self.body_type.is_none()
            && self.location.is_none()
    }
}

/// ソートキー（リストページのセレクト値と同じ表記）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    YearNew,
    YearOld,
    MileageLow,
    MileageHigh,
}

// ========================================
// User
// ========================================

/// ユーザー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Seller,
    Admin,
}

/// サブスクリプション状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Expired,
    None,
}

/// User (session identity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(rename = "userType")]
    pub role: UserRole,
    pub is_admin: bool,
    pub subscription_status: SubscriptionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// ログインリクエスト（モック認証 — パスワードは検証しない）
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub password: String,
}

/// 登録リクエスト
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub password: String,
}

// ========================================
// PaymentReceipt
// ========================================

/// プラン種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Pro,
    Premium,
}

impl PlanType {
    /// 月額（USD）
    pub fn price(&self) -> i64 {
        match self {
            PlanType::Pro => 29,
            PlanType::Premium => 59,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Pro => "pro",
            PlanType::Premium => "premium",
        }
    }
}

/// 領収書ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Pending,
    Approved,
    Rejected,
}

/// PaymentReceipt (store record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub plan_type: PlanType,
    pub plan_price: i64,
    pub receipt_file: String,
    pub file_name: String,
    pub file_size: i64,
    pub upload_date: DateTime<Utc>,
    pub status: ReceiptStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// 領収書アップロード入力（id / uploadDate / status はストアが採番する）
#[derive(Debug, Clone)]
pub struct NewReceipt {
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub plan_type: PlanType,
    pub plan_price: i64,
    pub receipt_file: String,
    pub file_name: String,
    pub file_size: i64,
}

// ========================================
// SubscriptionAction
// ========================================

/// アクション種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Approve,
    Reject,
    Activate,
    Extend,
    Revoke,
}

impl ActionKind {
    /// 領収書に紐づかない手動アクションかどうか
    pub fn is_manual(&self) -> bool {
        matches!(
            self,
            ActionKind::Activate | ActionKind::Extend | ActionKind::Revoke
        )
    }
}

/// SubscriptionAction (append-only audit record)
/// receipt_id = 0 は手動アクション（紐づく領収書なし）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionAction {
    pub id: i64,
    pub receipt_id: i64,
    pub user_id: i64,
    pub action: ActionKind,
    pub admin_id: i64,
    pub admin_name: String,
    pub timestamp: DateTime<Utc>,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_status: Option<String>,
}

/// 領収書承認リクエスト
#[derive(Debug, Default, Deserialize)]
pub struct ApproveReceiptRequest {
    pub notes: Option<String>,
}

/// 領収書却下リクエスト
#[derive(Debug, Deserialize)]
pub struct RejectReceiptRequest {
    pub reason: String,
}

/// 手動サブスクリプション操作リクエスト
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualActionRequest {
    pub user_id: i64,
    pub action: ActionKind,
    pub details: String,
}
