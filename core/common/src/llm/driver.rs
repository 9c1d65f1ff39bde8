//! ビジョンドライバーの実装
//!
//! プロバイダに依存しない共通処理（ペイロード生成→送信→テキスト抽出）を提供します。

use crate::error::Error;
use crate::llm::provider::{VisionProvider, VisionRequest};

/// ビジョンドライバー
pub struct VisionDriver<P: VisionProvider> {
    provider: P,
}

impl<P: VisionProvider> VisionDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// 画像付きリクエストを 1 回送信して生の応答テキストを取得する
    ///
    /// # Returns
    /// * `Ok(String)` - モデルからの応答テキスト（JSON抽出前）
    /// * `Err(Error)` - ペイロード生成・HTTP・抽出いずれかの失敗
    pub fn analyze(&self, request: &VisionRequest) -> Result<String, Error> {
        let payload = self.provider.make_request_payload(request)?;

        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        let response_json = self.provider.make_http_request(&request_json)?;

        let text = self
            .provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::malformed_reply("No text in response"))?;

        Ok(text)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    // モックプロバイダ
    struct MockProvider;

    impl VisionProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn make_request_payload(&self, _request: &VisionRequest) -> Result<Value, Error> {
            Ok(serde_json::json!({"contents": []}))
        }

        fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
            Ok(r#"{"candidates":[{"content":{"parts":[{"text":"{\"scientificName\":\"Ficus\"}"}]}}]}"#.to_string())
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            let v: Value = serde_json::from_str(response_json)
                .map_err(|e| Error::json(format!("Failed to parse JSON: {}", e)))?;
            Ok(v["candidates"][0]["content"]["parts"][0]["text"]
                .as_str()
                .map(|s| s.to_string()))
        }
    }

    struct NoTextProvider;

    impl VisionProvider for NoTextProvider {
        fn name(&self) -> &str {
            "no_text"
        }

        fn make_request_payload(&self, _request: &VisionRequest) -> Result<Value, Error> {
            Ok(serde_json::json!({}))
        }

        fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
            Ok(r#"{"candidates":[]}"#.to_string())
        }

        fn parse_response_text(&self, _response_json: &str) -> Result<Option<String>, Error> {
            Ok(None)
        }
    }

    fn request<'a>() -> VisionRequest<'a> {
        VisionRequest {
            system_instruction: "You are a helpful gardening assistant.",
            prompt: "Identify this plant.",
            image_mime: "image/jpeg",
            image_base64: "aGVsbG8=",
            response_schema: None,
        }
    }

    #[test]
    fn test_driver_returns_reply_text() {
        let driver = VisionDriver::new(MockProvider);
        let text = driver.analyze(&request()).unwrap();
        assert!(text.contains("Ficus"));
    }

    #[test]
    fn test_driver_no_text_is_malformed_reply() {
        let driver = VisionDriver::new(NoTextProvider);
        let err = driver.analyze(&request()).unwrap_err();
        assert!(matches!(err, Error::MalformedReply(_)));
        assert!(err.to_string().contains("No text in response"));
    }

    #[test]
    fn test_driver_provider_accessor() {
        let driver = VisionDriver::new(MockProvider);
        assert_eq!(driver.provider().name(), "mock");
    }
}
