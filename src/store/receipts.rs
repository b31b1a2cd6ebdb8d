//! Receipt Store
//! 支払い領収書のレビューワークフローと監査ログ（SubscriptionAction）

use std::sync::{Arc, RwLock};

use chrono::Utc;
use tracing::info;

use super::{fresh_id, StoreError};
use crate::models::{
    ActionKind, NewReceipt, PaymentReceipt, ReceiptStatus, SubscriptionAction,
};
use crate::seed;

/// 領収書と監査ログの正本コレクションを持つストア
///
/// 領収書は pending で作成され、approve / reject でちょうど 1 回だけ
/// 遷移する。監査ログは追記専用で、変更も削除もされない。
#[derive(Debug)]
pub struct ReceiptStore {
    receipts: RwLock<Arc<Vec<PaymentReceipt>>>,
    actions: RwLock<Arc<Vec<SubscriptionAction>>>,
}

impl ReceiptStore {
    /// モックデータ入りで構築
    pub fn new() -> Self {
        Self::with_data(seed::mock_receipts(), seed::mock_actions())
    }

    /// 任意の初期データで構築
    pub fn with_data(receipts: Vec<PaymentReceipt>, actions: Vec<SubscriptionAction>) -> Self {
        Self {
            receipts: RwLock::new(Arc::new(receipts)),
            actions: RwLock::new(Arc::new(actions)),
        }
    }

    /// 空で構築（テスト用）
    pub fn empty() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }

    /// 領収書の全件スナップショット（新着順）
    pub fn receipts(&self) -> Arc<Vec<PaymentReceipt>> {
        Arc::clone(&self.receipts.read().unwrap())
    }

    /// 監査ログの全件スナップショット（新着順）
    pub fn actions(&self) -> Arc<Vec<SubscriptionAction>> {
        Arc::clone(&self.actions.read().unwrap())
    }

    /// id で 1 件取得
    pub fn get_by_id(&self, id: i64) -> Option<PaymentReceipt> {
        self.receipts
            .read()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// 指定領収書に紐づくアクション（ストア順 = 新着順）
    pub fn actions_for_receipt(&self, receipt_id: i64) -> Vec<SubscriptionAction> {
        self.actions
            .read()
            .unwrap()
            .iter()
            .filter(|a| a.receipt_id == receipt_id)
            .cloned()
            .collect()
    }

    /// アップロード。id と uploadDate を採番し、ステータスは必ず pending で先頭に挿入
    pub fn upload(&self, input: NewReceipt) -> PaymentReceipt {
        let mut guard = self.receipts.write().unwrap();
        let receipt = PaymentReceipt {
            id: fresh_id(guard.iter().map(|r| r.id).max()),
            user_id: input.user_id,
            user_name: input.user_name,
            user_email: input.user_email,
            plan_type: input.plan_type,
            plan_price: input.plan_price,
            receipt_file: input.receipt_file,
            file_name: input.file_name,
            file_size: input.file_size,
            upload_date: Utc::now(),
            status: ReceiptStatus::Pending,
            reviewed_by: None,
            reviewed_at: None,
            rejection_reason: None,
            notes: None,
        };

        let mut next = Vec::with_capacity(guard.len() + 1);
        next.push(receipt.clone());
        next.extend(guard.iter().cloned());
        *guard = Arc::new(next);

        info!(
            "Receipt uploaded: id={}, user={}, plan={}",
            receipt.id,
            receipt.user_name,
            receipt.plan_type.as_str()
        );
        receipt
    }

    /// 承認。pending の領収書にのみ適用でき、監査ログをちょうど 1 件追記する
    ///
    /// ログは更新後のレコードから生成する（更新前の読み値からは作らない）。
    pub fn approve(
        &self,
        receipt_id: i64,
        admin_name: &str,
        notes: Option<String>,
    ) -> Result<PaymentReceipt, StoreError> {
        let updated = self.review(receipt_id, |r| {
            r.status = ReceiptStatus::Approved;
            r.reviewed_by = Some(admin_name.to_string());
            r.reviewed_at = Some(Utc::now());
            r.notes = notes.clone();
        })?;

        self.append_action(
            receipt_id,
            updated.user_id,
            ActionKind::Approve,
            admin_name,
            format!(
                "Receipt approved - {} subscription activated for 1 month",
                updated.plan_type.as_str()
            ),
            Some("none".to_string()),
            Some("active".to_string()),
        );

        info!("Receipt approved: id={}, by={}", receipt_id, admin_name);
        Ok(updated)
    }

    /// 却下。理由は必須（空文字・空白のみは不可）
    ///
    /// サブスクリプション状態はここでは変化しない（newStatus は "none" のまま）。
    pub fn reject(
        &self,
        receipt_id: i64,
        admin_name: &str,
        reason: &str,
    ) -> Result<PaymentReceipt, StoreError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(StoreError::EmptyReason);
        }

        let updated = self.review(receipt_id, |r| {
            r.status = ReceiptStatus::Rejected;
            r.reviewed_by = Some(admin_name.to_string());
            r.reviewed_at = Some(Utc::now());
            r.rejection_reason = Some(reason.to_string());
        })?;

        self.append_action(
            receipt_id,
            updated.user_id,
            ActionKind::Reject,
            admin_name,
            format!("Receipt rejected - {}", reason),
            Some("none".to_string()),
            Some("none".to_string()),
        );

        info!("Receipt rejected: id={}, by={}", receipt_id, admin_name);
        Ok(updated)
    }

    /// 手動サブスクリプション操作（activate / extend / revoke）
    ///
    /// 紐づく領収書がないため receiptId = 0 で記録する。userId の実在確認は行わない。
    pub fn manual_action(
        &self,
        user_id: i64,
        kind: ActionKind,
        admin_name: &str,
        details: &str,
    ) -> Result<SubscriptionAction, StoreError> {
        if !kind.is_manual() {
            return Err(StoreError::NotManualAction(kind));
        }

        let new_status = if kind == ActionKind::Revoke {
            "expired"
        } else {
            "active"
        };
        let action = self.append_action(
            0,
            user_id,
            kind,
            admin_name,
            details.to_string(),
            Some("active".to_string()),
            Some(new_status.to_string()),
        );

        info!(
            "Manual subscription action: user={}, kind={:?}, by={}",
            user_id, kind, admin_name
        );
        Ok(action)
    }

    /// pending チェック込みの単一レビュー遷移。更新後のレコードを返す
    fn review(
        &self,
        receipt_id: i64,
        apply: impl FnOnce(&mut PaymentReceipt),
    ) -> Result<PaymentReceipt, StoreError> {
        let mut guard = self.receipts.write().unwrap();
        let idx = guard
            .iter()
            .position(|r| r.id == receipt_id)
            .ok_or(StoreError::ReceiptNotFound(receipt_id))?;
        if guard[idx].status != ReceiptStatus::Pending {
            return Err(StoreError::AlreadyReviewed(receipt_id));
        }

        let mut next: Vec<PaymentReceipt> = guard.iter().cloned().collect();
        apply(&mut next[idx]);
        let updated = next[idx].clone();
        *guard = Arc::new(next);
        Ok(updated)
    }

    #[allow(clippy::too_many_arguments)]
    fn append_action(
        &self,
        receipt_id: i64,
        user_id: i64,
        kind: ActionKind,
        admin_name: &str,
        details: String,
        previous_status: Option<String>,
        new_status: Option<String>,
    ) -> SubscriptionAction {
        let mut guard = self.actions.write().unwrap();
        let action = SubscriptionAction {
            id: fresh_id(guard.iter().map(|a| a.id).max()),
            receipt_id,
            user_id,
            action: kind,
            // 元データと同じく管理者 id は固定
            admin_id: 1,
            admin_name: admin_name.to_string(),
            timestamp: Utc::now(),
            details,
            previous_status,
            new_status,
        };

        let mut next = Vec::with_capacity(guard.len() + 1);
        next.push(action.clone());
        next.extend(guard.iter().cloned());
        *guard = Arc::new(next);
        action
    }
}

impl Default for ReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}
