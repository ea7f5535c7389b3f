//! ブラウザのダイアログ・コンソール出力

use magic_path_common::{Error, Notice};

/// ブロッキングな通知を表示
pub fn notify(notice: Notice) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(notice.message());
    }
}

/// エラーを通知に変換して表示（通知対象外ならコンソールのみ）
pub fn notify_error(error: &Error) {
    log_error(&error.to_string());
    if let Some(notice) = Notice::from_error(error) {
        notify(notice);
    }
}

pub fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}
