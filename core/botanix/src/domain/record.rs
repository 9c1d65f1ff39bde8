//! 正準レコード（識別結果）の型定義
//!
//! フィールド名はアプリ既存の永続化レイアウトに合わせて camelCase で
//! シリアライズする。必須フィールド（scientificName / commonNames /
//! confidence / description / benefits / care / safety / diagnostics）は
//! 欠けていてもデフォルトで埋め、任意セクションは欠けたまま通す。
//! confidence の範囲やステータス文字列の妥当性はここでは検証しない。

use crate::domain::language::{Language, Messages};
use serde::{Deserialize, Serialize};

/// 植物の健康状態（モデル応答の診断ステータス）
///
/// 既知の値以外は Unrecognized に落とす。任意文字列をそのまま
/// 表示側へ流さないための閉じた列挙。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Diseased,
    #[serde(rename = "Pest Infested")]
    PestInfested,
    #[serde(rename = "Nutrient Deficient")]
    NutrientDeficient,
    #[default]
    Unknown,
    #[serde(other)]
    Unrecognized,
}

impl HealthStatus {
    /// 言語別の表示ラベル
    pub fn label(&self, messages: &'static Messages) -> &'static str {
        match self {
            Self::Healthy => messages.status_healthy,
            Self::Diseased => messages.status_diseased,
            Self::PestInfested => messages.status_pest_infested,
            Self::NutrientDeficient => messages.status_nutrient_deficient,
            Self::Unknown | Self::Unrecognized => messages.status_unknown,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomy {
    #[serde(default)]
    pub genus: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub order: String,
}

/// 形態。各項目は応答に無ければ無いまま
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Morphology {
    pub leaves: Option<String>,
    pub flowers: Option<String>,
    pub fruits: Option<String>,
    pub stems: Option<String>,
    pub roots: Option<String>,
    pub nectar: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareRequirements {
    #[serde(default)]
    pub light: String,
    #[serde(default)]
    pub water: String,
    #[serde(default)]
    pub soil: String,
    #[serde(default)]
    pub humidity: String,
    #[serde(default)]
    pub temperature: String,
    #[serde(default)]
    pub fertilizer: String,
    #[serde(default)]
    pub propagation: String,
    #[serde(default)]
    pub pruning: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcologicalInfo {
    #[serde(default)]
    pub native_region: String,
    #[serde(default)]
    pub habitat: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub companions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyProfile {
    #[serde(default)]
    pub is_poisonous: bool,
    #[serde(default)]
    pub poison_details: String,
    #[serde(default)]
    pub is_invasive: bool,
    #[serde(default)]
    pub is_endangered: bool,
    #[serde(default)]
    pub is_medicinal: bool,
    #[serde(default)]
    pub medicinal_uses: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    #[serde(default)]
    pub status: HealthStatus,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub treatment: String,
    #[serde(default)]
    pub prevention: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folklore {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub stories: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarSpecies {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub difference: String,
}

/// モデル応答から型付けされるレポート本体
///
/// 応答に含まれる id / timestamp / imageUrl 等の余計なフィールドは
/// この型に無いため、パース時に自然に捨てられる。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantReport {
    #[serde(default)]
    pub scientific_name: String,
    /// 正規化後は常に配列（空でもよい）
    #[serde(default)]
    pub common_names: Vec<String>,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub benefits: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<Taxonomy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morphology: Option<Morphology>,
    #[serde(default)]
    pub care: CareRequirements,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecology: Option<EcologicalInfo>,
    #[serde(default)]
    pub safety: SafetyProfile,
    #[serde(default)]
    pub diagnostics: DiagnosticResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folklore: Option<Folklore>,
    #[serde(default)]
    pub similar_species: Vec<SimilarSpecies>,
}

/// 正準レコード: レポート + クライアント側で生成する 3 フィールド + 言語タグ
///
/// id / timestamp / imageUrl はモデル応答の値に関わらずこちらで上書きする。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    pub id: String,
    #[serde(flatten)]
    pub report: PlantReport,
    /// エポックミリ秒
    pub timestamp: u64,
    /// 正規化済み画像の data URI
    pub image_url: String,
    pub language: Language,
}
