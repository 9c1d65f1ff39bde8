//! プロファイル解決
//!
//! 解決順: 明示指定（-p）→ profiles.json の default → 組み込みの gemini。
//! "gemini" と "fixture" は profiles.json に無くても使える組み込みプロファイル。

use crate::error::Error;
use crate::llm::config::{ProfilesConfig, ProviderKind};

/// 解決済みプロファイル（プロバイダ生成の材料）
#[derive(Debug, Clone)]
pub struct ResolvedProfile {
    pub name: String,
    pub kind: ProviderKind,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub api_key_env: Option<String>,
    pub temperature: Option<f32>,
    pub timeout_secs: Option<u64>,
}

/// 組み込みプロファイル名
const BUILTIN_PROFILES: &[&str] = &["gemini", "fixture"];

/// プロファイルを解決する
///
/// # Arguments
/// * `config` - profiles.json の内容（無ければ Default）
/// * `explicit` - -p/--profile で明示されたプロファイル名
/// * `model_override` - -m/--model で明示されたモデル名（プロファイルの model に優先）
pub fn resolve_profile(
    config: &ProfilesConfig,
    explicit: Option<&str>,
    model_override: Option<&str>,
) -> Result<ResolvedProfile, Error> {
    let name = explicit
        .or(config.default_provider.as_deref())
        .unwrap_or("gemini");

    if let Some(profile) = config.providers.get(name) {
        return Ok(ResolvedProfile {
            name: name.to_string(),
            kind: profile.kind,
            model: model_override
                .map(|m| m.to_string())
                .or_else(|| profile.model.clone()),
            base_url: profile.base_url.clone(),
            api_key_env: profile.api_key_env.clone(),
            temperature: profile.temperature,
            timeout_secs: profile.timeout_secs,
        });
    }

    if let Some(kind) = ProviderKind::from_str(name).filter(|_| BUILTIN_PROFILES.contains(&name)) {
        return Ok(ResolvedProfile {
            name: name.to_string(),
            kind,
            model: model_override.map(|m| m.to_string()),
            base_url: None,
            api_key_env: None,
            temperature: None,
            timeout_secs: None,
        });
    }

    Err(Error::invalid_argument(format!(
        "Unknown profile: {}. Supported profiles: gemini, fixture, or a name from profiles.json",
        name
    )))
}

/// 利用可能なプロファイル名一覧と既定名を返す
///
/// profiles.json のエントリに、上書きされていない組み込みを加えて名前順に並べる。
pub fn list_profiles(config: &ProfilesConfig) -> (Vec<String>, Option<String>) {
    let mut names: Vec<String> = config.providers.keys().cloned().collect();
    for builtin in BUILTIN_PROFILES {
        if !config.providers.contains_key(*builtin) {
            names.push((*builtin).to_string());
        }
    }
    names.sort();
    let default = config
        .default_provider
        .clone()
        .or_else(|| Some("gemini".to_string()));
    (names, default)
}
