//! 解析サービスのHTTPクライアント
//!
//! multipart/form-data で画像（とプロンプト）を送り、JSONの解析結果を受け取る。

use crate::config::Config;
use crate::error::{MagicPathError, Result};
use magic_path_common::{AnalysisResult, SelectedFile};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// 画像のフィールド名
pub const IMAGE_FIELD: &str = "image";
/// プロンプトのフィールド名
pub const PROMPT_FIELD: &str = "prompt";

/// エラーメッセージに含めるレスポンス本文の最大文字数
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| MagicPathError::Config(format!("HTTPクライアント初期化失敗: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 画像を送信して解析結果を取得
    ///
    /// 接続失敗・タイムアウト・2xx以外・不正な本文はすべて Network エラー。
    pub async fn analyze(&self, file: &SelectedFile, prompt: Option<&str>) -> Result<AnalysisResult> {
        let form = build_form(file, prompt)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            file = %file.name,
            size = file.size(),
            with_prompt = prompt.is_some_and(|p| !p.is_empty()),
            "sending analysis request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| MagicPathError::Network(describe_transport_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MagicPathError::Network(format!(
                "HTTP {}: {}",
                status,
                truncate(&body, MAX_ERROR_BODY_CHARS)
            )));
        }

        let result = response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| MagicPathError::Network(format!("不正なレスポンス: {}", e)))?;

        tracing::debug!(category = %result.category, labels = result.labels.len(), "analysis received");
        Ok(result)
    }
}

fn build_form(file: &SelectedFile, prompt: Option<&str>) -> Result<Form> {
    let part = Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(&file.media_type)
        .map_err(|e| MagicPathError::Network(format!("リクエスト作成失敗: {}", e)))?;

    let mut form = Form::new().part(IMAGE_FIELD, part);
    if let Some(prompt) = prompt.filter(|p| !p.is_empty()) {
        form = form.text(PROMPT_FIELD, prompt.to_string());
    }
    Ok(form)
}

fn describe_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("タイムアウト: {}", error)
    } else if error.is_connect() {
        format!("接続失敗: {}", error)
    } else {
        error.to_string()
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
