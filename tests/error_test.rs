//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングと通知の対応を検証

use magic_path::error::MagicPathError;
use magic_path::intake;
use magic_path_common::Notice;
use std::path::Path;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_load_nonexistent_file() {
    let result = intake::load_candidate(Path::new("/nonexistent/path/12345.jpg"));
    assert!(matches!(result, Err(MagicPathError::FileNotFound(_))));
}

/// ディレクトリを指定した場合
#[test]
fn test_load_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = intake::load_candidate(dir.path());
    assert!(matches!(result, Err(MagicPathError::FileNotFound(_))));
}

/// MagicPathErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        MagicPathError::Config("テスト設定エラー".to_string()),
        MagicPathError::FileNotFound("test.jpg".to_string()),
        MagicPathError::Network("HTTP 500".to_string()),
        MagicPathError::Common(magic_path_common::Error::NoFileSelected),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 3種類の通知がエラーから区別できる
#[test]
fn test_notice_mapping() {
    let not_an_image: MagicPathError = magic_path_common::Error::NotAnImage {
        name: "a.txt".to_string(),
        media_type: "text/plain".to_string(),
    }
    .into();
    let no_file: MagicPathError = magic_path_common::Error::NoFileSelected.into();
    let network = MagicPathError::Network("timeout".to_string());

    assert_eq!(not_an_image.notice(), Some(Notice::NotAnImage));
    assert_eq!(no_file.notice(), Some(Notice::NoFileSelected));
    assert_eq!(network.notice(), Some(Notice::AnalysisFailed));
    assert_eq!(MagicPathError::Config("x".to_string()).notice(), None);
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: MagicPathError = io_err.into();

    assert!(matches!(err, MagicPathError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: MagicPathError = json_err.into();

    assert!(matches!(err, MagicPathError::JsonParse(_)));
}

/// エラーチェーン（透過的エラー）
#[test]
fn test_error_chain_transparent() {
    let common_err = magic_path_common::Error::Network("接続失敗".to_string());
    let err: MagicPathError = common_err.into();

    let display = format!("{}", err);
    assert_eq!(display, "Network error: 接続失敗");
}
