//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - AnalysisResult: 解析サービスのレスポンス
//! - DetailRow: 「Detailed Analysis」欄の1行

use serde::{Deserialize, Serialize};

/// 顔が検出されなかったときに解析サービスが返す値
pub const NO_FACE_DETECTED: &str = "No face detected.";

/// 解析サービスの応答
///
/// どのフィールドも欠けていてよい（欠損時は空文字・空配列）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    /// 分類ラベル（"Human", "dog", "Animal", "Car" など）
    pub category: String,

    /// 未対応カテゴリのときにそのまま表示する説明
    pub detected_entity: String,

    /// 顔の属性、または NO_FACE_DETECTED
    pub face_details: String,

    /// 被写体のタグ（先頭ほど重要）
    pub labels: Vec<String>,
}

/// 詳細表示の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl AnalysisResult {
    /// 顔の情報が実際に含まれているか
    pub fn has_face_details(&self) -> bool {
        !self.face_details.is_empty() && self.face_details != NO_FACE_DETECTED
    }

    /// 詳細表示の行を生成
    ///
    /// Category は常に表示し、それ以外は値があるときだけ含める。
    pub fn details(&self) -> Vec<DetailRow> {
        let mut rows = vec![DetailRow {
            label: "Category",
            value: self.category.clone(),
        }];

        if !self.detected_entity.is_empty() {
            rows.push(DetailRow {
                label: "Entity",
                value: self.detected_entity.clone(),
            });
        }

        if !self.labels.is_empty() {
            rows.push(DetailRow {
                label: "Labels",
                value: self.labels.join(", "),
            });
        }

        if self.has_face_details() {
            rows.push(DetailRow {
                label: "Face Details",
                value: self.face_details.clone(),
            });
        }

        rows
    }
}
