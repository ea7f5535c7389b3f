//! セッション状態から画面表示用の値を作る

use magic_path_common::{describe, DetailRow, Status, UploadSession};

/// 出力パネルの表示内容
#[derive(Debug, Clone, PartialEq)]
pub enum OutputView {
    /// 何も解析していない（失敗後も含む）
    Placeholder,
    Analyzing,
    Described {
        description: String,
        details: Vec<DetailRow>,
    },
}

impl OutputView {
    pub fn from_session(session: &UploadSession) -> Self {
        match session.status() {
            Status::Loading(_) => OutputView::Analyzing,
            Status::Loaded(result) => OutputView::Described {
                description: describe(result),
                details: result.details(),
            },
            Status::Idle | Status::Failed { .. } => OutputView::Placeholder,
        }
    }
}

pub fn analyze_button_label(session: &UploadSession) -> &'static str {
    if session.is_loading() {
        "Processing..."
    } else {
        "Upload & Analyze"
    }
}

/// ファイル名欄とプレビュー見出しに出す名前
pub fn file_name(session: &UploadSession) -> String {
    session
        .selected()
        .map(|f| f.name.clone())
        .unwrap_or_default()
}
