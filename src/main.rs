use std::sync::Arc;

use tracing::info;

use car_market_server::cache::KvCache;
use car_market_server::config::AppConfig;
use car_market_server::{handlers, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ログ初期化
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env();

    // セッションキャッシュ（前回の identity があれば復元される）
    let cache = KvCache::open(&config.data_dir)?;
    let state = Arc::new(AppState::new(cache));

    // ルーター構築
    let app = handlers::router(state, config.max_upload_bytes);

    info!("🚀 Car Market API Server listening on {}", config.bind_addr);
    info!("📦 Max upload size: {} bytes", config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
