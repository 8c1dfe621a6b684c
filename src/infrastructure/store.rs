use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// 永続化層のエラー
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// リポジトリ操作のエラー。
/// 対象レコードが存在しないケースは暗黙に握りつぶさず NotFound として返し、
/// メッセージにするかどうかは呼び出し側が決める
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("record not found: {0}")]
    NotFound(&'static str),
}

/// 同期的なキーバリューストア。
/// 1つのキーに対してコレクション全体のJSON文書を読み書きする
/// (ブラウザのlocalStorageと同じ粒度)。部分更新は無い
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// keyの値をデシリアライズして返す。未保存ならdefaultの値を返す
pub fn load_or<T, F>(store: &dyn KeyValueStore, key: &str, default: F) -> Result<T, StoreError>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.get(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(default()),
    }
}

/// 値をシリアライズして保存する
pub fn save<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// 採番カウンタ付きのコレクション文書
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub next_id: i64,
}

impl<T> Collection<T> {
    pub fn new(items: Vec<T>, next_id: i64) -> Self {
        Self { items, next_id }
    }

    /// 次のIDを発行してカウンタを進める
    pub fn issue_id(&mut self) -> i64 {
        if self.next_id <= 0 {
            self.next_id = 1;
        }
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// =====================
// インメモリ実装 (テスト用)
// =====================
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

// =====================
// JSONファイル実装
// =====================

/// キーごとに `<base_dir>/<key>.json` を読み書きする
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_dir = base_dir.into();
        // ディレクトリ作成(冪等)
        fs::create_dir_all(&base_dir)?;
        debug!(dir = %base_dir.display(), "JSONファイルストアを初期化しました");
        Ok(Self { base_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());

        store.set("key", r#"{"items":[],"nextId":1}"#).unwrap();
        assert_eq!(
            store.get("key").unwrap().as_deref(),
            Some(r#"{"items":[],"nextId":1}"#)
        );

        store.remove("key").unwrap();
        assert!(store.get("key").unwrap().is_none());
    }

    #[test]
    fn test_load_or_returns_default_when_missing() {
        let store = MemoryStore::new();
        let col: Collection<i64> =
            load_or(&store, "numbers", || Collection::new(vec![1, 2], 3)).unwrap();
        assert_eq!(col.items, vec![1, 2]);
        assert_eq!(col.next_id, 3);

        // defaultはまだ永続化されていない
        assert!(store.get("numbers").unwrap().is_none());
    }

    #[test]
    fn test_issue_id_repairs_invalid_counter() {
        let mut col: Collection<i64> = Collection::new(vec![], 0);
        assert_eq!(col.issue_id(), 1);
        assert_eq!(col.issue_id(), 2);
        assert_eq!(col.next_id, 3);
    }
}
