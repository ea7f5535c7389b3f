mod client;

pub use client::{AnalysisClient, IMAGE_FIELD, PROMPT_FIELD};

use crate::error::Result;
use magic_path_common::{Event, Transition, UploadSession};

/// セッションの選択ファイルを解析し、結果をセッションに反映する
///
/// ファイル未選択なら通信せずに NoFileSelected を返す。
/// 通信に失敗した場合はセッションを Failed にした上でエラーを返す。
pub async fn analyze_session(
    session: &mut UploadSession,
    client: &AnalysisClient,
) -> Result<Transition> {
    let request = session.begin_analysis()?;

    tracing::info!(
        file = %request.file.name,
        request = request.ticket.request.0,
        "analysis started"
    );

    match client.analyze(&request.file, request.prompt.as_deref()).await {
        Ok(result) => Ok(session.handle(Event::AnalysisSucceeded {
            ticket: request.ticket,
            result,
        })?),
        Err(err) => {
            tracing::warn!(error = %err, "analysis failed");
            session.handle(Event::AnalysisFailed {
                ticket: request.ticket,
                reason: err.to_string(),
            })?;
            Err(err)
        }
    }
}
