//! In-Memory Stores
//! cars / receipts / session の状態管理（実バックエンドなし、プロセス内メモリのみ）
//!
//! 各ストアは独立に構築できる状態コンテナで、コレクションは常に
//! まるごと差し替える（copy-on-write）。読み手が保持しているスナップ
//! ショットは後続の変更の影響を受けない。

pub mod listings;
pub mod receipts;
pub mod session;

use chrono::Utc;
use thiserror::Error;

use crate::models::ActionKind;

/// ストア操作のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("receipt not found: {0}")]
    ReceiptNotFound(i64),
    #[error("receipt already reviewed: {0}")]
    AlreadyReviewed(i64),
    #[error("rejection reason must not be empty")]
    EmptyReason,
    #[error("{0:?} is not a manual subscription action")]
    NotManualAction(ActionKind),
}

/// 現在時刻ミリ秒ベースの採番
///
/// 同一ミリ秒内の連続作成でも一意になるよう、既存の最大 id を超える値まで繰り上げる。
pub(crate) fn fresh_id(current_max: Option<i64>) -> i64 {
    let now_ms = Utc::now().timestamp_millis();
    match current_max {
        Some(max) if now_ms <= max => max + 1,
        _ => now_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_id_bumps_past_existing_max() {
        let now_ms = Utc::now().timestamp_millis();
        assert_eq!(fresh_id(Some(now_ms + 100)), now_ms + 101);
        assert!(fresh_id(None) >= now_ms);
        assert!(fresh_id(Some(1)) >= now_ms);
    }
}
