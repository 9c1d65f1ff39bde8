//! プロバイダファクトリー
//!
//! 解決済みプロファイルから適切なプロバイダを作成します。

use crate::error::Error;
use crate::llm::config::ProviderKind;
use crate::llm::driver::VisionDriver;
use crate::llm::fixture::FixtureProvider;
use crate::llm::gemini::GeminiProvider;
use crate::llm::provider::{VisionProvider, VisionRequest};
use crate::llm::resolver::ResolvedProfile;
use serde_json::Value;

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
#[derive(Debug)]
pub enum AnyProvider {
    Gemini(GeminiProvider),
    Fixture(FixtureProvider),
}

impl VisionProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::Gemini(p) => p.name(),
            Self::Fixture(p) => p.name(),
        }
    }

    fn make_request_payload(&self, request: &VisionRequest) -> Result<Value, Error> {
        match self {
            Self::Gemini(p) => p.make_request_payload(request),
            Self::Fixture(p) => p.make_request_payload(request),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::Gemini(p) => p.make_http_request(request_json),
            Self::Fixture(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::Gemini(p) => p.parse_response_text(response_json),
            Self::Fixture(p) => p.parse_response_text(response_json),
        }
    }
}

/// 解決済みプロファイルからプロバイダを作成する
///
/// Gemini の場合、APIキー環境変数が未設定なら MissingCredential で失敗する。
/// ネットワークアクセスはここでは発生しない。
pub fn create_provider(profile: &ResolvedProfile) -> Result<AnyProvider, Error> {
    match profile.kind {
        ProviderKind::Gemini => {
            let provider = GeminiProvider::new(
                profile.model.clone(),
                profile.base_url.clone(),
                profile.api_key_env.clone(),
                profile.temperature,
                profile.timeout_secs,
            )?;
            Ok(AnyProvider::Gemini(provider))
        }
        ProviderKind::Fixture => Ok(AnyProvider::Fixture(FixtureProvider::new())),
    }
}

/// 解決済みプロファイルからドライバーを作成する
pub fn create_driver(profile: &ResolvedProfile) -> Result<VisionDriver<AnyProvider>, Error> {
    let provider = create_provider(profile)?;
    Ok(VisionDriver::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_profile() -> ResolvedProfile {
        ResolvedProfile {
            name: "fixture".to_string(),
            kind: ProviderKind::Fixture,
            model: None,
            base_url: None,
            api_key_env: None,
            temperature: None,
            timeout_secs: None,
        }
    }

    #[test]
    fn test_create_fixture_provider() {
        let provider = create_provider(&fixture_profile()).unwrap();
        assert_eq!(provider.name(), "fixture");
    }

    #[test]
    fn test_create_gemini_without_key_fails_before_any_network() {
        let profile = ResolvedProfile {
            name: "gemini".to_string(),
            kind: ProviderKind::Gemini,
            model: None,
            base_url: None,
            api_key_env: Some("BOTANIX_TEST_NO_SUCH_KEY".to_string()),
            temperature: None,
            timeout_secs: None,
        };
        let err = create_provider(&profile).unwrap_err();
        assert!(matches!(err, Error::MissingCredential(_)));
    }

    #[test]
    fn test_create_driver_for_fixture() {
        let driver = create_driver(&fixture_profile()).unwrap();
        assert_eq!(driver.provider().name(), "fixture");
    }
}
