//! profiles.json 用の設定型
//!
//! プロファイル名から ProviderKind とオプション
//! （base_url / model / api_key_env / temperature / timeout_secs）を解決するための構造体。

use serde::Deserialize;
use std::collections::HashMap;

/// profiles.json のルート
#[derive(Debug, Clone, Default)]
pub struct ProfilesConfig {
    /// 未指定時に使うプロファイル名
    pub default_provider: Option<String>,
    /// プロファイル名 -> プロファイル
    pub providers: HashMap<String, ProviderProfile>,
}

/// 1 プロファイル分の設定
#[derive(Debug, Clone)]
pub struct ProviderProfile {
    /// プロバイダ種別: gemini | fixture
    pub kind: ProviderKind,
    /// API のベース URL（省略時はプロバイダのデフォルト）
    pub base_url: Option<String>,
    /// モデル名（省略時はプロバイダのデフォルト）
    pub model: Option<String>,
    /// API キーを読む環境変数名（省略時は GEMINI_API_KEY）
    pub api_key_env: Option<String>,
    /// 温度（省略時は 0.3）
    pub temperature: Option<f32>,
    /// リクエストタイムアウト秒（省略時は 60）
    pub timeout_secs: Option<u64>,
}

/// JSON の "type" で使うプロバイダ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Gemini,
    Fixture,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Fixture => "fixture",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Some(Self::Gemini),
            "fixture" => Some(Self::Fixture),
            _ => None,
        }
    }
}

/// serde 用の内部構造（type が予約語のため）
#[derive(Debug, Deserialize)]
struct ProfilesConfigRaw {
    #[serde(alias = "default")]
    default_provider: Option<String>,
    providers: Option<HashMap<String, ProviderProfileRaw>>,
}

#[derive(Debug, Deserialize)]
struct ProviderProfileRaw {
    #[serde(rename = "type", alias = "provider")]
    kind: ProviderKind,
    base_url: Option<String>,
    #[serde(alias = "default_model")]
    model: Option<String>,
    api_key_env: Option<String>,
    temperature: Option<f32>,
    timeout_secs: Option<u64>,
}

impl ProfilesConfig {
    /// JSON 文字列からパース（ファイル読みは配線側で行う）
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let raw: ProfilesConfigRaw = serde_json::from_str(json)?;
        let providers = raw
            .providers
            .unwrap_or_default()
            .into_iter()
            .map(|(k, v)| (k, v.into()))
            .collect();
        Ok(ProfilesConfig {
            default_provider: raw.default_provider,
            providers,
        })
    }
}

impl From<ProviderProfileRaw> for ProviderProfile {
    fn from(r: ProviderProfileRaw) -> Self {
        ProviderProfile {
            kind: r.kind,
            base_url: r.base_url,
            model: r.model,
            api_key_env: r.api_key_env,
            temperature: r.temperature,
            timeout_secs: r.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_object() {
        let cfg = ProfilesConfig::parse("{}").unwrap();
        assert!(cfg.default_provider.is_none());
        assert!(cfg.providers.is_empty());
    }

    #[test]
    fn test_parse_default_provider_and_providers() {
        let json = r#"
        {
            "default_provider": "my_gemini",
            "providers": {
                "my_gemini": { "type": "gemini", "model": "gemini-2.5-pro", "timeout_secs": 120 },
                "offline": { "type": "fixture" }
            }
        }
        "#;
        let cfg = ProfilesConfig::parse(json).unwrap();
        assert_eq!(cfg.default_provider.as_deref(), Some("my_gemini"));
        assert_eq!(cfg.providers.len(), 2);

        let g = cfg.providers.get("my_gemini").unwrap();
        assert!(matches!(g.kind, ProviderKind::Gemini));
        assert_eq!(g.model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(g.timeout_secs, Some(120));

        let f = cfg.providers.get("offline").unwrap();
        assert!(matches!(f.kind, ProviderKind::Fixture));
    }

    #[test]
    fn test_parse_aliases() {
        // default_provider→default, model→default_model, type→provider
        let json = r#"
        {
            "default": "g",
            "providers": {
                "g": {
                    "provider": "gemini",
                    "default_model": "gemini-2.5-flash",
                    "api_key_env": "MY_GEMINI_KEY",
                    "temperature": 0.4
                }
            }
        }
        "#;
        let cfg = ProfilesConfig::parse(json).unwrap();
        assert_eq!(cfg.default_provider.as_deref(), Some("g"));
        let p = cfg.providers.get("g").unwrap();
        assert_eq!(p.model.as_deref(), Some("gemini-2.5-flash"));
        assert_eq!(p.api_key_env.as_deref(), Some("MY_GEMINI_KEY"));
        assert_eq!(p.temperature, Some(0.4));
    }

    #[test]
    fn test_parse_unknown_kind_is_error() {
        let json = r#"{ "providers": { "x": { "type": "openai" } } }"#;
        assert!(ProfilesConfig::parse(json).is_err());
    }

    #[test]
    fn test_kind_round_trip() {
        assert_eq!(ProviderKind::from_str("GEMINI"), Some(ProviderKind::Gemini));
        assert_eq!(ProviderKind::from_str("fixture"), Some(ProviderKind::Fixture));
        assert_eq!(ProviderKind::from_str("gpt"), None);
        assert_eq!(ProviderKind::Gemini.as_str(), "gemini");
    }
}
