//! Fixtureプロバイダの実装
//!
//! ネットワークを一切使わず、固定の応答テキストを返す。
//! オフラインでの動作確認とテスト用。応答は実際のモデルに似せて
//! markdown フェンス付きで返すため、JSON 抽出まで通しで確認できる。

use crate::error::Error;
use crate::llm::provider::{VisionProvider, VisionRequest};
use serde_json::{json, Value};

/// 固定応答（Ficus elastica のサンプルレポート、フェンス付き）
const FIXTURE_REPLY: &str = r#"Here is the identification result:
```json
{
  "scientificName": "Ficus elastica",
  "commonNames": ["Rubber Plant", "Rubber Fig"],
  "confidence": 96,
  "description": "A popular houseplant with large, glossy, dark green leaves.",
  "benefits": "Improves indoor air quality by filtering airborne toxins.",
  "care": {
    "light": "Bright, indirect light",
    "water": "Water when the top soil is dry",
    "soil": "Well-draining potting mix",
    "humidity": "Moderate",
    "temperature": "15-24C",
    "fertilizer": "Monthly during growing season",
    "propagation": "Stem cuttings",
    "pruning": "Prune in spring to control size"
  },
  "safety": {
    "isPoisonous": true,
    "poisonDetails": "Sap is mildly toxic to pets if ingested.",
    "isInvasive": false,
    "isEndangered": false,
    "isMedicinal": false,
    "medicinalUses": "",
    "notes": "Wear gloves when pruning; the sap can irritate skin."
  },
  "diagnostics": {
    "status": "Healthy",
    "details": "No visible disease or pest damage.",
    "treatment": "",
    "prevention": "Avoid overwatering."
  }
}
```"#;

/// Fixtureプロバイダ
#[derive(Debug)]
pub struct FixtureProvider {
    reply: String,
}

impl FixtureProvider {
    /// 固定サンプルを返すプロバイダを作成
    pub fn new() -> Self {
        Self {
            reply: FIXTURE_REPLY.to_string(),
        }
    }

    /// 任意の応答テキストを返すプロバイダを作成（テスト用）
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for FixtureProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl VisionProvider for FixtureProvider {
    fn name(&self) -> &str {
        "fixture"
    }

    fn make_request_payload(&self, request: &VisionRequest) -> Result<Value, Error> {
        // 実リクエストと同じ材料を持つダミーペイロード
        Ok(json!({
            "systemInstruction": request.system_instruction,
            "prompt": request.prompt,
            "imageMime": request.image_mime,
        }))
    }

    fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
        // 実際のAPI呼び出しは行わない
        let response = json!({
            "candidates": [{
                "content": {"parts": [{"text": self.reply}]}
            }]
        });
        serde_json::to_string(&response).map_err(|e| Error::json(e.to_string()))
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
        Ok(v["candidates"][0]["content"]["parts"]
            .as_array()
            .and_then(|parts| parts.iter().find_map(|part| part["text"].as_str()))
            .map(|s| s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::driver::VisionDriver;

    fn request<'a>() -> VisionRequest<'a> {
        VisionRequest {
            system_instruction: "sys",
            prompt: "prompt",
            image_mime: "image/jpeg",
            image_base64: "aGVsbG8=",
            response_schema: None,
        }
    }

    #[test]
    fn test_fixture_reply_contains_fenced_json() {
        let driver = VisionDriver::new(FixtureProvider::new());
        let text = driver.analyze(&request()).unwrap();
        assert!(text.contains("```json"));
        assert!(text.contains("Ficus elastica"));
    }

    #[test]
    fn test_fixture_with_custom_reply() {
        let driver = VisionDriver::new(FixtureProvider::with_reply("no json here"));
        assert_eq!(driver.analyze(&request()).unwrap(), "no json here");
    }
}
