use magic_path_common::Notice;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MagicPathError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("解析サービスとの通信に失敗: {0}")]
    Network(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] magic_path_common::Error),
}

impl MagicPathError {
    /// ユーザーに表示する通知
    pub fn notice(&self) -> Option<Notice> {
        match self {
            MagicPathError::Network(_) => Some(Notice::AnalysisFailed),
            MagicPathError::Common(err) => Notice::from_error(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MagicPathError>;
