//! 解析結果のテキスト出力

use magic_path_common::{describe, AnalysisResult};

/// 説明文（と詳細）を整形
pub fn render(result: &AnalysisResult, with_details: bool) -> String {
    let mut out = describe(result);

    if with_details {
        let rows = result.details();
        let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0) + 1;

        out.push_str("\n\nDetailed Analysis:");
        for row in rows {
            out.push_str(&format!("\n  {:<width$} {}", format!("{}:", row.label), row.value, width = width));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_description_only() {
        let result = AnalysisResult {
            category: "Car".to_string(),
            detected_entity: "A red sedan".to_string(),
            ..Default::default()
        };
        assert_eq!(render(&result, false), "A red sedan");
    }

    #[test]
    fn test_render_with_details() {
        let result = AnalysisResult {
            category: "Car".to_string(),
            detected_entity: "A red sedan".to_string(),
            labels: vec!["car".to_string(), "red".to_string()],
            ..Default::default()
        };
        let text = render(&result, true);
        assert_eq!(
            text,
            "A red sedan\n\nDetailed Analysis:\n  Category: Car\n  Entity:   A red sedan\n  Labels:   car, red"
        );
    }
}
