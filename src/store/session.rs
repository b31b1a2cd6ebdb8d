//! Session Store
//! 現在のログイン identity の保持とローカルキャッシュへの永続化（モック認証）

use std::sync::RwLock;

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::cache::KvCache;
use crate::models::{SubscriptionStatus, User, UserRole};

/// キャッシュ上のキー。存在しないのは「未ログイン」の正常状態
const USER_KEY: &str = "user";

/// ログイン時に割り当てる固定アバター
const PLACEHOLDER_AVATAR: &str =
    "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2";

/// 現在の認証 identity を 1 つだけ持つストア
///
/// 認証はモック：パスワードは受け取るが検証しない。identity はローカル
/// KV キャッシュに単一 JSON として書かれ、起動時に復元される。
#[derive(Debug)]
pub struct SessionStore {
    cache: KvCache,
    current: RwLock<Option<User>>,
}

impl SessionStore {
    /// キャッシュから identity を復元しつつ構築
    pub fn new(cache: KvCache) -> Self {
        let restored: Option<User> = cache.get(USER_KEY);
        if let Some(user) = &restored {
            info!("Session restored: user={}, email={}", user.name, user.email);
        }
        Self {
            cache,
            current: RwLock::new(restored),
        }
    }

    /// 現在の identity
    pub fn current(&self) -> Option<User> {
        self.current.read().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().unwrap().is_some()
    }

    /// ログイン（モック）
    ///
    /// email の部分一致だけで役割を決める："admin" → 管理者、"seller" →
    /// 出品者、それ以外は一般ユーザー。失敗パスはキャッシュ書き込みの
    /// 内部エラーのみで、モックロジック自体からは発生しない。
    pub fn login(&self, email: &str, _password: &str) -> Result<User> {
        let role = if email.contains("admin") {
            UserRole::Admin
        } else if email.contains("seller") {
            UserRole::Seller
        } else {
            UserRole::User
        };

        let user = User {
            id: 1,
            name: "John Doe".to_string(),
            email: email.to_string(),
            role,
            is_admin: role == UserRole::Admin,
            subscription_status: SubscriptionStatus::Active,
            avatar: Some(PLACEHOLDER_AVATAR.to_string()),
        };

        *self.current.write().unwrap() = Some(user.clone());
        self.cache.put(USER_KEY, &user)?;

        info!("User logged in: email={}, role={:?}", user.email, user.role);
        Ok(user)
    }

    /// 登録（モック）。常に一般ユーザーとして作成する
    pub fn register(&self, name: &str, email: &str, _password: &str) -> Result<User> {
        let user = User {
            id: Utc::now().timestamp_millis(),
            name: name.to_string(),
            email: email.to_string(),
            role: UserRole::User,
            is_admin: false,
            subscription_status: SubscriptionStatus::None,
            avatar: None,
        };

        *self.current.write().unwrap() = Some(user.clone());
        self.cache.put(USER_KEY, &user)?;

        info!("User registered: email={}", user.email);
        Ok(user)
    }

    /// ログアウト。identity を消してキャッシュからも取り除く
    pub fn logout(&self) {
        *self.current.write().unwrap() = None;
        self.cache.remove(USER_KEY);
        info!("User logged out");
    }
}
