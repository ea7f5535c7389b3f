//! Magic Path Common Library
//!
//! CLIとWeb(WASM)で共有される型・説明文生成・アップロード状態管理

pub mod types;
pub mod describe;
pub mod error;
pub mod intake;
pub mod notice;
pub mod session;

pub use types::{AnalysisResult, DetailRow, NO_FACE_DETECTED};
pub use describe::{animal_type, describe, select_features};
pub use error::{Error, Result};
pub use intake::{accept, is_image_media_type, CandidateFile, PreviewHandle, SelectedFile};
pub use notice::Notice;
pub use session::{
    AnalysisRequest, AnalysisTicket, Event, ReadTicket, RequestId, SelectionId, Status,
    Transition, UploadSession,
};
