//! ユーザーへの通知
//!
//! 解析ボタン押下時の未選択、画像以外の選択、通信失敗の3種類を区別する。

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoFileSelected,
    NotAnImage,
    AnalysisFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NoFileSelected => "Please select an image first!",
            Notice::NotAnImage => "Please select a valid image file!",
            Notice::AnalysisFailed => "Error analyzing image. Please try again.",
        }
    }

    /// エラーに対応する通知（通知不要なら None）
    pub fn from_error(error: &Error) -> Option<Self> {
        match error {
            Error::NoFileSelected => Some(Notice::NoFileSelected),
            Error::NotAnImage { .. } => Some(Notice::NotAnImage),
            Error::Network(_) => Some(Notice::AnalysisFailed),
            // 解析中の再押下はボタン無効化で防いでいるので黙って無視する
            Error::AnalysisInFlight => None,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_are_distinct() {
        let messages = [
            Notice::NoFileSelected.message(),
            Notice::NotAnImage.message(),
            Notice::AnalysisFailed.message(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn test_from_error() {
        assert_eq!(
            Notice::from_error(&Error::NoFileSelected),
            Some(Notice::NoFileSelected)
        );
        assert_eq!(
            Notice::from_error(&Error::NotAnImage {
                name: "a.txt".to_string(),
                media_type: "text/plain".to_string(),
            }),
            Some(Notice::NotAnImage)
        );
        assert_eq!(
            Notice::from_error(&Error::Network("timeout".to_string())),
            Some(Notice::AnalysisFailed)
        );
        assert_eq!(Notice::from_error(&Error::AnalysisInFlight), None);
    }

    #[test]
    fn test_display_uses_message() {
        assert_eq!(Notice::NotAnImage.to_string(), "Please select a valid image file!");
    }
}
