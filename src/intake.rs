//! ローカルファイルの読み込み
//!
//! MIMEタイプは拡張子から判定し、拡張子が不明な場合のみ内容から推定する。

use crate::error::{MagicPathError, Result};
use magic_path_common::CandidateFile;
use std::path::Path;

const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// ファイルを読み込んで受け付け候補を作る
pub fn load_candidate(path: &Path) -> Result<CandidateFile> {
    if !path.is_file() {
        return Err(MagicPathError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let media_type = detect_media_type(path, &bytes);

    tracing::debug!(file = %name, %media_type, size = bytes.len(), "loaded candidate file");

    Ok(CandidateFile::new(name, media_type, bytes))
}

/// MIMEタイプを判定
pub fn detect_media_type(path: &Path, bytes: &[u8]) -> String {
    if let Some(mime) = mime_guess::from_path(path).first() {
        return mime.essence_str().to_string();
    }

    match image::guess_format(bytes) {
        Ok(format) => format.to_mime_type().to_string(),
        Err(_) => UNKNOWN_MEDIA_TYPE.to_string(),
    }
}
