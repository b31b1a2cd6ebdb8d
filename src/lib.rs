pub mod cache;
pub mod config;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod store;

use crate::cache::KvCache;
use crate::store::listings::ListingStore;
use crate::store::receipts::ReceiptStore;
use crate::store::session::SessionStore;

/// 全ストアを束ねたアプリケーション状態
///
/// 各ストアは独立したコンテナで、ハンドラにはこの形で注入される。
/// ストア同士は互いを呼ばない（管理者名の参照だけハンドラ経由で行う）。
#[derive(Debug)]
pub struct AppState {
    pub cars: ListingStore,
    pub receipts: ReceiptStore,
    pub session: SessionStore,
}

impl AppState {
    /// モックデータ入りで構築
    pub fn new(cache: KvCache) -> Self {
        Self {
            cars: ListingStore::new(),
            receipts: ReceiptStore::new(),
            session: SessionStore::new(cache),
        }
    }
}
