//! 表形式データの受け渡し。
//! 画面側のダウンロード/アップロードに対応する器で、
//! フラットなレコード列をJSON文書として書き出し・読み戻しする。

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::infrastructure::store::StoreError;

/// レコード列を `<out_dir>/<name>.json` に書き出してパスを返す
pub fn export_records<T: Serialize>(
    records: &[T],
    name: &str,
    out_dir: &Path,
) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("{name}.json"));
    let json = serde_json::to_string_pretty(records)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// 書き出した表形式レコードを読み戻す。
/// 解析に失敗した場合は StoreError::Parse になる
pub fn import_records(path: &Path) -> Result<Vec<serde_json::Value>, StoreError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
