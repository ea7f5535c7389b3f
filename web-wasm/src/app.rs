//! メインアプリケーションコンポーネント
//!
//! 状態は RwSignal<UploadSession> ひとつに集約し、UIイベントは1件ずつセッションに渡す。

use leptos::prelude::*;
use leptos::task::spawn_local;
use magic_path_common::{
    is_image_media_type, CandidateFile, Event, Notice, Transition, UploadSession,
};
use wasm_bindgen_futures::JsFuture;
use web_sys::File;
use crate::api::analysis;
use crate::components::{
    analyze_button::AnalyzeButton,
    header::Header,
    output_panel::OutputPanel,
    prompt_input::PromptInput,
    upload_area::UploadArea,
};
use crate::notify::{log_error, notify, notify_error};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(UploadSession::new());

    // ファイル選択・ドロップ共通ハンドラ
    let on_file = move |file: File| {
        // 読み込む前に種別だけ確認しておく
        if !is_image_media_type(&file.type_()) {
            notify(Notice::NotAnImage);
            return;
        }
        // 読み込み完了までに選び直し・クリアされたら結果は捨てられる
        let ticket = match session.try_update(|s| s.handle(Event::ReadStarted)) {
            Some(Ok(Transition::Reading(ticket))) => ticket,
            _ => return,
        };
        spawn_local(async move {
            match read_candidate(&file).await {
                Ok(candidate) => {
                    let event = Event::ReadCompleted { ticket, candidate };
                    if let Some(Err(err)) = session.try_update(|s| s.handle(event)) {
                        notify_error(&err);
                    }
                }
                Err(message) => {
                    log_error(&message);
                    notify(Notice::NotAnImage);
                }
            }
        });
    };

    let on_clear = move |_| {
        if let Some(Err(err)) = session.try_update(|s| s.handle(Event::Clear)) {
            notify_error(&err);
        }
    };

    // 解析開始ハンドラ
    let on_analyze = move |_| {
        let request = match session.try_update(|s| s.begin_analysis()) {
            Some(Ok(request)) => request,
            Some(Err(err)) => {
                notify_error(&err);
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let outcome = analysis::analyze(&request.file, request.prompt.as_deref())
                .await
                .map_err(|err| {
                    log_error(&err.to_string());
                    err.to_string()
                });

            let event = Event::response(request.ticket, outcome);
            let transition = session.try_update(|s| s.handle(event));
            // 選び直し等で古くなった応答は通知しない
            if matches!(transition, Some(Ok(Transition::Failed))) {
                notify(Notice::AnalysisFailed);
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <main class="grid">
                <section class="panel">
                    <h2>"Upload an Image"</h2>
                    <UploadArea session=session on_file=on_file on_clear=on_clear />
                    <PromptInput session=session />
                    <AnalyzeButton session=session on_analyze=on_analyze />
                </section>

                <section class="panel">
                    <OutputPanel session=session />
                </section>
            </main>
        </div>
    }
}

/// ブラウザの File からバイト列を読み出す
async fn read_candidate(file: &File) -> Result<CandidateFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("failed to read {}: {:?}", file.name(), e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(CandidateFile::new(file.name(), file.type_(), bytes))
}
