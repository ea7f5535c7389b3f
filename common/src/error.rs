//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Not an image: {name} ({media_type})")]
    NotAnImage { name: String, media_type: String },

    #[error("No file selected")]
    NoFileSelected,

    #[error("An analysis is already in progress")]
    AnalysisInFlight,

    #[error("Network error: {0}")]
    Network(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
