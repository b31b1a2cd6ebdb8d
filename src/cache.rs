//! Local Key/Value Cache
//! セッション情報をローカルに保持する簡易 KV キャッシュ（1 キー = 1 JSON ファイル）

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// ファイルベースの KV キャッシュ
///
/// 書き込みは同期・ベストエフォート。トランザクション保証はない
/// （書き込む単位は小さな単一レコードのみ）。
#[derive(Debug, Clone)]
pub struct KvCache {
    dir: PathBuf,
}

impl KvCache {
    /// キャッシュディレクトリを開く（なければ作成）
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// 値を JSON で保存
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path_for(key), json)?;
        Ok(())
    }

    /// 値を読み込む。キーが存在しないのは正常系（None）
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let content = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Cache entry unreadable, ignoring: key={}, error={}", key, e);
                None
            }
        }
    }

    /// キーを削除（ベストエフォート）
    pub fn remove(&self, key: &str) {
        if let Err(e) = fs::remove_file(self.path_for(key)) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to remove cache entry: key={}, error={}", key, e);
            }
        }
    }
}
