//! App Configuration
//! 環境変数から読む設定（未設定時はデフォルト）

use std::env;
use std::path::PathBuf;

/// サーバ設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// リッスンアドレス
    pub bind_addr: String,
    /// セッションキャッシュの置き場所
    pub data_dir: PathBuf,
    /// 領収書アップロードの上限サイズ
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            data_dir: PathBuf::from("./data/car-market"),
            max_upload_bytes: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl AppConfig {
    /// CAR_MARKET_* 環境変数から構築
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env::var("CAR_MARKET_ADDR").unwrap_or(defaults.bind_addr),
            data_dir: env::var("CAR_MARKET_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            max_upload_bytes: env::var("CAR_MARKET_MAX_UPLOAD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_upload_bytes),
        }
    }
}
