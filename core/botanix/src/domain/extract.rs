//! モデル応答テキストからの JSON 抽出とパース
//!
//! responseSchema を指定していてもモデルがコードフェンスや前置きを
//! 付けてくることがあるため、生テキストから JSON 部分を切り出す。
//! 最初の `{` から最後の `}` までを最優先、無ければフェンス剥がし。

use crate::domain::record::PlantReport;
use common::error::Error;

/// 生テキストから JSON オブジェクト候補を切り出す
///
/// # Returns
/// 候補文字列。オブジェクト区切りもフェンスも見つからず
/// 空になった場合は None
pub fn extract_json(text: &str) -> Option<String> {
    let first = text.find('{');
    let last = text.rfind('}');
    if let (Some(first), Some(last)) = (first, last) {
        if first < last {
            return Some(text[first..=last].to_string());
        }
    }
    // フォールバック: ```json フェンスを剥がす
    let stripped = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// 応答テキストをレポートにパースする
///
/// 候補が見つからない、または JSON として不正な場合は MalformedReply
pub fn parse_report(text: &str) -> Result<PlantReport, Error> {
    let candidate = extract_json(text)
        .ok_or_else(|| Error::malformed_reply("No JSON object in model reply"))?;
    serde_json::from_str(&candidate)
        .map_err(|e| Error::malformed_reply(format!("Model reply is not a valid report: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_object() {
        let text = r#"{"scientificName":"Rosa"}"#;
        assert_eq!(extract_json(text).unwrap(), text);
    }

    #[test]
    fn test_extract_object_with_preamble_and_trailer() {
        let text = "Here is the result:\n{\"scientificName\":\"Rosa\"}\nHope it helps!";
        assert_eq!(extract_json(text).unwrap(), "{\"scientificName\":\"Rosa\"}");
    }

    #[test]
    fn test_extract_strips_code_fence_without_braces() {
        // 括弧が無いのでフェンス剥がしフォールバックに落ちる
        let text = "```json\nnull\n```";
        assert_eq!(extract_json(text).unwrap(), "null");
    }

    #[test]
    fn test_extract_fenced_object_uses_brace_span() {
        let text = "```json\n{\"confidence\": 90}\n```";
        assert_eq!(extract_json(text).unwrap(), "{\"confidence\": 90}");
    }

    #[test]
    fn test_extract_empty_returns_none() {
        assert_eq!(extract_json(""), None);
        assert_eq!(extract_json("``````"), None);
    }

    #[test]
    fn test_parse_report_ok() {
        let report = parse_report("```json\n{\"scientificName\":\"Mangifera indica\",\"confidence\":91}\n```").unwrap();
        assert_eq!(report.scientific_name, "Mangifera indica");
        assert_eq!(report.confidence, 91.0);
    }

    #[test]
    fn test_parse_report_rejects_non_json() {
        let err = parse_report("I could not identify this plant.").unwrap_err();
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_parse_report_rejects_truncated_json() {
        // 最初の { から最後の } までは取れるが JSON として壊れている
        let err = parse_report("{\"scientificName\": \"Rosa\", {").unwrap_err();
        assert!(matches!(err, Error::MalformedReply(_)));
    }
}
