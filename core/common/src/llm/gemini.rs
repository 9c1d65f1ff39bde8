//! Geminiプロバイダの実装
//!
//! generateContent を 1 回だけ呼ぶ。ストリーミングはしない。
//! リクエストには明示的なタイムアウトを設定し、超過は Http エラーとして返す。

use crate::error::Error;
use crate::llm::provider::{VisionProvider, VisionRequest};
use regex::Regex;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;

/// デフォルトのモデル名
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// デフォルトのAPIベースURL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// APIキーを読むデフォルトの環境変数名
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// デフォルトのリクエストタイムアウト（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Geminiプロバイダ
#[derive(Debug)]
pub struct GeminiProvider {
    model: String,
    api_key: String,
    base_url: String,
    temperature: f32,
    timeout: Duration,
}

impl GeminiProvider {
    /// 新しいGeminiプロバイダを作成
    ///
    /// APIキーは環境変数から読む。未設定なら MissingCredential で即時に失敗し、
    /// ネットワークアクセスは一切行わない。
    ///
    /// # Arguments
    /// * `model` - モデル名（デフォルト: "gemini-2.5-flash"）
    /// * `base_url` - APIのベースURL（デフォルト: 公式エンドポイント）
    /// * `api_key_env` - APIキーを読む環境変数名（デフォルト: GEMINI_API_KEY）
    /// * `temperature` - 温度（デフォルト: 0.3）
    /// * `timeout_secs` - リクエストタイムアウト秒（デフォルト: 60）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        api_key_env: Option<String>,
        temperature: Option<f32>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, Error> {
        let key_env = api_key_env.unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
        let api_key = env::var(&key_env)
            .map_err(|_| Error::env(format!("{} environment variable is not set", key_env)))?;

        Ok(Self {
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            temperature: temperature.unwrap_or(DEFAULT_TEMPERATURE),
            timeout: Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }

    /// `data:image/...;base64,` プレフィックスを剥がす
    fn strip_data_uri_prefix(data: &str) -> String {
        Regex::new(r"^data:image/(png|jpg|jpeg|webp);base64,")
            .map(|re| re.replace(data, "").into_owned())
            .unwrap_or_else(|_| data.to_string())
    }

    /// エラーレスポンスを解析してメッセージを抽出
    fn extract_api_error(status: reqwest::StatusCode, body: &str) -> String {
        if let Ok(v) = serde_json::from_str::<Value>(body) {
            if let Some(msg) = v["error"]["message"].as_str() {
                return msg.to_string();
            }
        }
        format!("HTTP {}: {}", status, body)
    }
}

impl VisionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn make_request_payload(&self, request: &VisionRequest) -> Result<Value, Error> {
        let clean_base64 = Self::strip_data_uri_prefix(request.image_base64);

        let mut payload = json!({
            "systemInstruction": {
                "parts": [{"text": request.system_instruction}]
            },
            "contents": [{
                "role": "user",
                "parts": [
                    {
                        "inlineData": {
                            "mimeType": request.image_mime,
                            "data": clean_base64
                        }
                    },
                    {"text": request.prompt}
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "temperature": self.temperature,
                // レイテンシ最小化のため thinking を無効化
                "thinkingConfig": {"thinkingBudget": 0}
            }
        });

        if let Some(schema) = request.response_schema {
            payload["generationConfig"]["responseSchema"] = schema.clone();
        }

        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        let response = client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let error_msg = Self::extract_api_error(status, &response_text);
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        // エラーチェック
        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        // テキストを抽出
        let text = v["candidates"][0]["content"]["parts"]
            .as_array()
            .and_then(|parts| parts.iter().find_map(|part| part["text"].as_str()))
            .map(|s| s.to_string());

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GeminiProvider {
        // APIキーなしでもペイロード生成はテストできる
        GeminiProvider {
            model: DEFAULT_MODEL.to_string(),
            api_key: "test-key".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.3,
            timeout: Duration::from_secs(60),
        }
    }

    fn request<'a>(image_base64: &'a str, schema: Option<&'a Value>) -> VisionRequest<'a> {
        VisionRequest {
            system_instruction: "You are a helpful gardening assistant.",
            prompt: "Identify this plant. Tell me its health benefits for the body.",
            image_mime: "image/jpeg",
            image_base64,
            response_schema: schema,
        }
    }

    #[test]
    fn test_new_without_api_key_is_missing_credential() {
        let result = GeminiProvider::new(
            None,
            None,
            Some("BOTANIX_TEST_NO_SUCH_KEY".to_string()),
            None,
            None,
        );
        let err = result.unwrap_err();
        assert!(matches!(err, Error::MissingCredential(_)));
        assert_eq!(err.exit_code(), 78);
        assert!(err.to_string().contains("BOTANIX_TEST_NO_SUCH_KEY"));
    }

    #[test]
    fn test_payload_has_system_instruction_and_image_part() {
        let payload = provider()
            .make_request_payload(&request("aGVsbG8=", None))
            .unwrap();
        assert_eq!(
            payload["systemInstruction"]["parts"][0]["text"]
                .as_str()
                .unwrap(),
            "You are a helpful gardening assistant."
        );
        let parts = payload["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[0]["inlineData"]["mimeType"].as_str().unwrap(),
            "image/jpeg"
        );
        assert_eq!(parts[0]["inlineData"]["data"].as_str().unwrap(), "aGVsbG8=");
        assert!(parts[1]["text"].as_str().unwrap().contains("Identify"));
    }

    #[test]
    fn test_payload_strips_data_uri_prefix() {
        let payload = provider()
            .make_request_payload(&request("data:image/jpeg;base64,aGVsbG8=", None))
            .unwrap();
        assert_eq!(
            payload["contents"][0]["parts"][0]["inlineData"]["data"]
                .as_str()
                .unwrap(),
            "aGVsbG8="
        );
    }

    #[test]
    fn test_payload_generation_config() {
        let schema = json!({"type": "OBJECT"});
        let payload = provider()
            .make_request_payload(&request("aGVsbG8=", Some(&schema)))
            .unwrap();
        let cfg = &payload["generationConfig"];
        assert_eq!(cfg["responseMimeType"].as_str().unwrap(), "application/json");
        assert_eq!(cfg["responseSchema"]["type"].as_str().unwrap(), "OBJECT");
        assert!((cfg["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
        assert_eq!(cfg["thinkingConfig"]["thinkingBudget"].as_i64().unwrap(), 0);
    }

    #[test]
    fn test_payload_without_schema_omits_response_schema() {
        let payload = provider()
            .make_request_payload(&request("aGVsbG8=", None))
            .unwrap();
        assert!(payload["generationConfig"].get("responseSchema").is_none());
    }

    #[test]
    fn test_parse_response_text_extracts_first_text_part() {
        let response = r#"{"candidates":[{"content":{"parts":[{"text":"{\"scientificName\":\"Ficus elastica\"}"}]}}]}"#;
        let text = provider().parse_response_text(response).unwrap().unwrap();
        assert!(text.contains("Ficus elastica"));
    }

    #[test]
    fn test_parse_response_text_none_when_no_text() {
        let response = r#"{"candidates":[{"content":{"parts":[]}}]}"#;
        assert!(provider().parse_response_text(response).unwrap().is_none());
    }

    #[test]
    fn test_parse_response_api_error_is_http_error() {
        let response = r#"{"error":{"message":"API key not valid"}}"#;
        let err = provider().parse_response_text(response).unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert!(err.to_string().contains("API key not valid"));
    }

    #[test]
    fn test_strip_prefix_handles_all_image_formats() {
        for mime in ["png", "jpg", "jpeg", "webp"] {
            let s = format!("data:image/{};base64,Zm9v", mime);
            assert_eq!(GeminiProvider::strip_data_uri_prefix(&s), "Zm9v");
        }
        // プレフィックスなしはそのまま
        assert_eq!(GeminiProvider::strip_data_uri_prefix("Zm9v"), "Zm9v");
    }
}
