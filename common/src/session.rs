//! アップロードセッションの状態遷移
//!
//! UIイベントを1件ずつ `UploadSession::handle` に渡し、状態を更新する。
//!
//! ```text
//! Idle ──AnalyzeRequested──▶ Loading ──Succeeded──▶ Loaded
//!   ▲                           │    └──Failed─────▶ Failed
//!   └──────── Select / Clear ───┴──────────────────────┘
//! ```
//!
//! 解析リクエストには発行時の選択IDを含むチケットを付け、
//! 現在の Loading のチケットと一致しない応答は破棄する。
//! 非同期のファイル読み込みも同様に ReadTicket で世代を管理し、
//! 後から選び直された・クリアされた読み込み結果は反映しない。

use crate::describe::describe;
use crate::error::{Error, Result};
use crate::intake::{self, CandidateFile, PreviewHandle, SelectedFile};
use crate::types::AnalysisResult;

/// ファイル選択ごとに振られるID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionId(pub u64);

/// 解析リクエストごとに振られるID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// ファイル読み込みごとに振られる世代番号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReadTicket(pub u64);

/// 発行済みリクエストの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnalysisTicket {
    pub request: RequestId,
    pub selection: SelectionId,
}

/// 解析の状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading(AnalysisTicket),
    Loaded(AnalysisResult),
    Failed { reason: String },
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Loading(_) => "loading",
            Status::Loaded(_) => "loaded",
            Status::Failed { .. } => "failed",
        }
    }
}

/// セッションへの入力イベント
#[derive(Debug, Clone)]
pub enum Event {
    /// ファイル選択（ダイアログ・ドロップ共通）
    Select(CandidateFile),
    /// 非同期読み込みの開始（ブラウザ）
    ReadStarted,
    ReadCompleted {
        ticket: ReadTicket,
        candidate: CandidateFile,
    },
    Clear,
    SetPrompt(String),
    AnalyzeRequested,
    AnalysisSucceeded {
        ticket: AnalysisTicket,
        result: AnalysisResult,
    },
    AnalysisFailed {
        ticket: AnalysisTicket,
        reason: String,
    },
}

impl Event {
    /// 解析の成否を応答イベントに変換
    pub fn response(
        ticket: AnalysisTicket,
        outcome: std::result::Result<AnalysisResult, String>,
    ) -> Self {
        match outcome {
            Ok(result) => Event::AnalysisSucceeded { ticket, result },
            Err(reason) => Event::AnalysisFailed { ticket, reason },
        }
    }
}

/// イベント処理の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Selected(SelectionId),
    Reading(ReadTicket),
    Cleared,
    PromptUpdated,
    Started(AnalysisTicket),
    Completed,
    Failed,
    /// 古いリクエストへの応答・古い読み込み結果なので何も変更していない
    StaleDiscarded,
}

/// 送信に必要な情報一式
///
/// 非同期タスクがセッションを借用せずに済むよう、複製して渡す。
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub ticket: AnalysisTicket,
    pub file: SelectedFile,
    pub prompt: Option<String>,
}

#[derive(Debug, Clone)]
struct Selection {
    id: SelectionId,
    file: SelectedFile,
    preview: PreviewHandle,
}

/// 1画面分のアップロード状態
#[derive(Debug, Clone, Default)]
pub struct UploadSession {
    // ファイルとプレビューは常に対で保持する
    selection: Option<Selection>,
    prompt: String,
    status: Status,
    pending_read: Option<ReadTicket>,
    last_read: u64,
    last_selection: u64,
    last_request: u64,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// イベントを1件処理する
    ///
    /// エラー時は状態を一切変更しない。
    pub fn handle(&mut self, event: Event) -> Result<Transition> {
        match event {
            Event::Select(candidate) => self.select(candidate).map(Transition::Selected),
            Event::ReadStarted => Ok(Transition::Reading(self.begin_read())),
            Event::ReadCompleted { ticket, candidate } => {
                if self.pending_read != Some(ticket) {
                    return Ok(Transition::StaleDiscarded);
                }
                self.select(candidate).map(Transition::Selected)
            }
            Event::Clear => {
                self.clear();
                Ok(Transition::Cleared)
            }
            Event::SetPrompt(prompt) => {
                self.set_prompt(prompt);
                Ok(Transition::PromptUpdated)
            }
            Event::AnalyzeRequested => self.start().map(Transition::Started),
            Event::AnalysisSucceeded { ticket, result } => {
                Ok(self.settle(ticket, Status::Loaded(result), Transition::Completed))
            }
            Event::AnalysisFailed { ticket, reason } => {
                Ok(self.settle(ticket, Status::Failed { reason }, Transition::Failed))
            }
        }
    }

    /// 画像を受け付けて選択を置き換える（前回の結果は破棄）
    ///
    /// 読み込み中のファイルがあっても、こちらが最新の選択になる。
    pub fn select(&mut self, candidate: CandidateFile) -> Result<SelectionId> {
        let (file, preview) = intake::accept(candidate)?;
        self.last_selection += 1;
        let id = SelectionId(self.last_selection);
        self.selection = Some(Selection { id, file, preview });
        self.status = Status::Idle;
        self.pending_read = None;
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.selection = None;
        self.status = Status::Idle;
        self.pending_read = None;
    }

    // 以前の読み込みはこの時点で無効になる
    fn begin_read(&mut self) -> ReadTicket {
        self.last_read += 1;
        let ticket = ReadTicket(self.last_read);
        self.pending_read = Some(ticket);
        ticket
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    fn start(&mut self) -> Result<AnalysisTicket> {
        let selection = self.selection_id().ok_or(Error::NoFileSelected)?;
        if self.is_loading() {
            return Err(Error::AnalysisInFlight);
        }

        self.last_request += 1;
        let ticket = AnalysisTicket {
            request: RequestId(self.last_request),
            selection,
        };
        self.status = Status::Loading(ticket);
        Ok(ticket)
    }

    /// AnalyzeRequested を処理し、送信内容を返す
    ///
    /// 応答は `Event::response` で同じチケットを付けて `handle` に戻す。
    pub fn begin_analysis(&mut self) -> Result<AnalysisRequest> {
        let ticket = self.start()?;
        let file = self.selected().cloned().ok_or(Error::NoFileSelected)?;

        Ok(AnalysisRequest {
            ticket,
            file,
            prompt: self.request_prompt().map(str::to_string),
        })
    }

    fn settle(&mut self, ticket: AnalysisTicket, status: Status, done: Transition) -> Transition {
        if !self.is_current(ticket) {
            return Transition::StaleDiscarded;
        }
        self.status = status;
        done
    }

    fn is_current(&self, ticket: AnalysisTicket) -> bool {
        matches!(self.status, Status::Loading(current) if current == ticket)
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selection.as_ref().map(|s| &s.file)
    }

    pub fn selection_id(&self) -> Option<SelectionId> {
        self.selection.as_ref().map(|s| s.id)
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.selection.as_ref().map(|s| &s.preview)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// 送信するプロンプト（空文字なら送らない）
    pub fn request_prompt(&self) -> Option<&str> {
        if self.prompt.is_empty() {
            None
        } else {
            Some(&self.prompt)
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.status {
            Status::Loaded(result) => Some(result),
            _ => None,
        }
    }

    /// 解析済みなら説明文を返す
    pub fn description(&self) -> Option<String> {
        self.result().map(describe)
    }

    /// 反映待ちのファイル読み込みがあるか
    pub fn is_reading(&self) -> bool {
        self.pending_read.is_some()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, Status::Loading(_))
    }

    /// 解析ボタンを押せる状態か
    pub fn can_analyze(&self) -> bool {
        self.selection.is_some() && !self.is_loading()
    }
}
