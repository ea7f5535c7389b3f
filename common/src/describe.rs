//! 解析結果から説明文を生成
//!
//! カテゴリごとに分岐する:
//! 1. "Human" → 人物の定型文 + faceDetails
//! 2. "Animal" または既知の動物名 → 特徴ラベルを埋め込んだ定型文
//! 3. それ以外 → detectedEntity をそのまま返す

use crate::types::AnalysisResult;

/// 人物として扱うカテゴリ（大文字小文字を区別）
pub const HUMAN_CATEGORY: &str = "Human";

/// 汎用の動物カテゴリ（大文字小文字を区別）
pub const GENERIC_ANIMAL_CATEGORY: &str = "Animal";

/// 個別に扱う動物名（小文字で比較）
pub const KNOWN_ANIMALS: &[&str] = &["cow", "dog", "cat", "horse", "bird"];

/// 説明文に含める特徴ラベルの最大数
pub const MAX_FEATURES: usize = 3;

/// カテゴリから動物種別を判定
///
/// "Animal" は "animal"、既知の動物名は小文字化した名前を返す。
/// 既知の集合との比較は完全一致のみ（部分一致はしない）。
pub fn animal_type(category: &str) -> Option<String> {
    if category == GENERIC_ANIMAL_CATEGORY {
        return Some("animal".to_string());
    }

    let lowered = category.to_lowercase();
    if KNOWN_ANIMALS.contains(&lowered.as_str()) {
        Some(lowered)
    } else {
        None
    }
}

/// 動物種別を含まないラベルを先頭から最大3件選ぶ
pub fn select_features<'a>(labels: &'a [String], animal_type: &str) -> Vec<&'a str> {
    labels
        .iter()
        .filter(|label| !label.to_lowercase().contains(animal_type))
        .take(MAX_FEATURES)
        .map(String::as_str)
        .collect()
}

/// 解析結果を説明文に変換
///
/// どの入力に対しても必ず文字列を返す。
pub fn describe(result: &AnalysisResult) -> String {
    if result.category == HUMAN_CATEGORY {
        return format!("The image depicts a person. {}", result.face_details);
    }

    if let Some(animal) = animal_type(&result.category) {
        return describe_animal(&animal, &select_features(&result.labels, &animal));
    }

    result.detected_entity.clone()
}

fn describe_animal(animal: &str, features: &[&str]) -> String {
    // 特徴が残らない場合は "showing its ." とならないよう節ごと省く
    let subject = if features.is_empty() {
        format!("The image depicts a {}.", animal)
    } else {
        format!(
            "The image depicts a {}, specifically showing its {}.",
            animal,
            features.join(", ")
        )
    };

    format!(
        "{} It appears to be a well-defined specimen with notable characteristics. \
         If you have any specific questions about {}s, feel free to ask!",
        subject, animal
    )
}
