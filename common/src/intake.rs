//! ファイル受け付け（CLI/WASM共通）
//!
//! ファイル選択ダイアログとドラッグ&ドロップは同じ検証を通る。

use base64::{engine::general_purpose::STANDARD, Engine as _};
use crate::error::{Error, Result};

/// 受け付け前のファイル
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }
}

/// プレビュー表示用の参照（data URL）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    /// 画像バイト列から data URL を生成
    pub fn from_bytes(media_type: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", media_type, STANDARD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 受け付け済みのファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// MIMEタイプが画像か判定
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.trim().to_ascii_lowercase().starts_with("image/")
}

/// 候補ファイルを検証し、画像ならプレビューと共に受け付ける
///
/// 画像以外・空ファイルは NotAnImage で拒否する。
pub fn accept(candidate: CandidateFile) -> Result<(SelectedFile, PreviewHandle)> {
    if !is_image_media_type(&candidate.media_type) || candidate.bytes.is_empty() {
        return Err(Error::NotAnImage {
            name: candidate.name,
            media_type: candidate.media_type,
        });
    }

    let media_type = candidate.media_type.trim().to_ascii_lowercase();
    let preview = PreviewHandle::from_bytes(&media_type, &candidate.bytes);
    let file = SelectedFile {
        name: candidate.name,
        media_type,
        bytes: candidate.bytes,
    };

    Ok((file, preview))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_media_type() {
        assert!(is_image_media_type("image/jpeg"));
        assert!(is_image_media_type("image/png"));
        assert!(is_image_media_type("IMAGE/WEBP"));
        assert!(is_image_media_type(" image/gif "));
        assert!(!is_image_media_type("text/plain"));
        assert!(!is_image_media_type("application/pdf"));
        assert!(!is_image_media_type("imagex/png"));
        assert!(!is_image_media_type(""));
    }

    #[test]
    fn test_accept_image() {
        let candidate = CandidateFile::new("cat.png", "image/png", vec![1, 2, 3]);
        let (file, preview) = accept(candidate).expect("受け付け失敗");

        assert_eq!(file.name, "cat.png");
        assert_eq!(file.media_type, "image/png");
        assert_eq!(file.size(), 3);
        assert_eq!(preview.as_str(), "data:image/png;base64,AQID");
    }

    #[test]
    fn test_accept_rejects_non_image() {
        let candidate = CandidateFile::new("notes.txt", "text/plain", b"hello".to_vec());
        let err = accept(candidate).unwrap_err();
        assert!(matches!(err, Error::NotAnImage { ref name, .. } if name == "notes.txt"));
    }

    #[test]
    fn test_accept_rejects_empty_file() {
        let candidate = CandidateFile::new("empty.jpg", "image/jpeg", Vec::new());
        assert!(matches!(accept(candidate), Err(Error::NotAnImage { .. })));
    }
}
