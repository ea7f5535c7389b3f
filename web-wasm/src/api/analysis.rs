//! 解析サービス連携（ブラウザ版）
//!
//! fetch + FormData で multipart 送信する。一定時間で AbortController により中断。

use futures::future::{self, Either};
use gloo::timers::future::TimeoutFuture;
use magic_path_common::{AnalysisResult, Error, SelectedFile};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Blob, BlobPropertyBag, FormData, Request, RequestInit, Response};

pub const ANALYSIS_ENDPOINT: &str = "https://gcp-project-1092394872023.us-central1.run.app";

/// リクエストのタイムアウト（ミリ秒）
pub const REQUEST_TIMEOUT_MS: u32 = 60_000;

const IMAGE_FIELD: &str = "image";
const PROMPT_FIELD: &str = "prompt";

/// 画像を送信して解析結果を取得
///
/// 失敗はすべて Error::Network にまとめる。
pub async fn analyze(file: &SelectedFile, prompt: Option<&str>) -> Result<AnalysisResult, Error> {
    let controller = AbortController::new().map_err(js_error)?;
    let fetch = Box::pin(send(file, prompt, &controller));
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);

    match future::select(fetch, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            controller.abort();
            Err(Error::Network(format!(
                "timed out after {} ms",
                REQUEST_TIMEOUT_MS
            )))
        }
    }
}

async fn send(
    file: &SelectedFile,
    prompt: Option<&str>,
    controller: &AbortController,
) -> Result<AnalysisResult, Error> {
    let form = build_form(file, prompt).map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);
    opts.set_signal(Some(&controller.signal()));

    // Content-Type は boundary 付きでブラウザが設定する
    let request = Request::new_with_str_and_init(ANALYSIS_ENDPOINT, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Network(format!("HTTP {}", resp.status())));
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json)
        .map_err(|e| Error::Network(format!("invalid response body: {}", e)))
}

fn build_form(file: &SelectedFile, prompt: Option<&str>) -> Result<FormData, JsValue> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.media_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(IMAGE_FIELD, &blob, &file.name)?;
    if let Some(prompt) = prompt.filter(|p| !p.is_empty()) {
        form.append_with_str(PROMPT_FIELD, prompt)?;
    }
    Ok(form)
}

fn js_error(value: JsValue) -> Error {
    let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
    Error::Network(message)
}
