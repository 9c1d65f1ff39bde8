//! 出力言語と表示文字列
//!
//! 表示に使う文字列は全て Messages の名前付きフィールドにする。
//! 型のないラベル辞書は使わない（キーの打ち間違いをコンパイラが捕まえられるように）。

use serde::{Deserialize, Serialize};

/// 出力言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bn,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Bn => "bn",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" => Some(Self::En),
            "bn" => Some(Self::Bn),
            _ => None,
        }
    }

    /// この言語の表示文字列一式
    pub fn messages(&self) -> &'static Messages {
        match self {
            Self::En => &MESSAGES_EN,
            Self::Bn => &MESSAGES_BN,
        }
    }
}

/// 1 言語分の表示文字列
///
/// レポート描画・履歴一覧・エラー表示が使う文字列を列挙する。
#[derive(Debug, Clone)]
pub struct Messages {
    /// 識別失敗時のユーザー向けメッセージ
    pub error_inconclusive: &'static str,
    pub history_header: &'static str,
    pub empty_history: &'static str,
    pub not_available: &'static str,

    pub scientific_name: &'static str,
    pub common_names: &'static str,
    pub confidence: &'static str,
    pub description: &'static str,
    pub benefits_title: &'static str,
    pub reasoning: &'static str,

    pub taxonomy: &'static str,
    pub genus: &'static str,
    pub family: &'static str,
    pub order: &'static str,

    pub morphology: &'static str,
    pub leaves: &'static str,
    pub flowers: &'static str,
    pub fruits: &'static str,
    pub stems: &'static str,
    pub roots: &'static str,
    pub nectar: &'static str,

    pub care_guide: &'static str,
    pub sunlight: &'static str,
    pub water: &'static str,
    pub soil: &'static str,
    pub humidity: &'static str,
    pub temperature: &'static str,
    pub fertilizer: &'static str,
    pub propagation: &'static str,
    pub pruning: &'static str,

    pub ecology: &'static str,
    pub native: &'static str,
    pub habitat: &'static str,
    pub role: &'static str,
    pub companions: &'static str,

    pub safety: &'static str,
    pub poisonous: &'static str,
    pub safe: &'static str,
    pub invasive: &'static str,
    pub endangered: &'static str,
    pub medicinal: &'static str,
    pub notes: &'static str,

    pub health: &'static str,
    pub treatment: &'static str,
    pub prevention: &'static str,
    pub status_healthy: &'static str,
    pub status_diseased: &'static str,
    pub status_pest_infested: &'static str,
    pub status_nutrient_deficient: &'static str,
    pub status_unknown: &'static str,

    pub story: &'static str,
    pub similar: &'static str,
    pub difference: &'static str,
}

pub static MESSAGES_EN: Messages = Messages {
    error_inconclusive: "Analysis inconclusive. Please ensure the subject is in focus.",
    history_header: "Collection",
    empty_history: "Your collection is awaiting its first discovery.",
    not_available: "Not available",

    scientific_name: "Scientific Name",
    common_names: "Common Names",
    confidence: "Match Accuracy",
    description: "Description",
    benefits_title: "Therapeutic Benefits",
    reasoning: "Identification Reasoning",

    taxonomy: "Taxonomy",
    genus: "Genus",
    family: "Botanical Family",
    order: "Order",

    morphology: "Morphology",
    leaves: "Foliage",
    flowers: "Bloom",
    fruits: "Fruit/Seed",
    stems: "Stem Structure",
    roots: "Root System",
    nectar: "Nectar",

    care_guide: "Care Guide",
    sunlight: "Sunlight",
    water: "Water",
    soil: "Soil",
    humidity: "Humidity",
    temperature: "Temperature",
    fertilizer: "Fertilizer",
    propagation: "Propagation",
    pruning: "Pruning",

    ecology: "Ecology",
    native: "Origin",
    habitat: "Habitat",
    role: "Ecological Role",
    companions: "Companion Plants",

    safety: "Safety Advisory",
    poisonous: "Toxic",
    safe: "Non-Toxic",
    invasive: "Invasive",
    endangered: "Endangered",
    medicinal: "Medicinal Properties",
    notes: "Notes",

    health: "Health Status",
    treatment: "Remedy",
    prevention: "Prevention",
    status_healthy: "Excellent Condition",
    status_diseased: "Diseased",
    status_pest_infested: "Pest Infested",
    status_nutrient_deficient: "Nutrient Deficient",
    status_unknown: "Unknown",

    story: "The Specimen",
    similar: "Related Species",
    difference: "Key Distinction",
};

pub static MESSAGES_BN: Messages = Messages {
    error_inconclusive: "চিনতে পারিনি। দয়া করে আরো পরিষ্কার ছবি দিন।",
    history_header: "সংগ্রহ",
    empty_history: "কোনো গাছ সেভ করা নেই",
    not_available: "তথ্য নেই",

    scientific_name: "বৈজ্ঞানিক নাম",
    common_names: "প্রচলিত নাম",
    confidence: "সঠিকতা",
    description: "বিবরণ",
    benefits_title: "শারীরিক উপকারিতা",
    reasoning: "শনাক্তকরণের কারণ",

    taxonomy: "শ্রেণীবিন্যাস",
    genus: "গণ",
    family: "পরিবার",
    order: "বর্গ",

    morphology: "গঠন",
    leaves: "পাতা",
    flowers: "ফুল",
    fruits: "ফল",
    stems: "কান্ড",
    roots: "শিকড়",
    nectar: "মকরন্দ",

    care_guide: "যত্নের নিয়ম",
    sunlight: "আলো",
    water: "পানি",
    soil: "মাটি",
    humidity: "আর্দ্রতা",
    temperature: "তাপমাত্রা",
    fertilizer: "সার",
    propagation: "বংশবিস্তার",
    pruning: "ছাঁটাই",

    ecology: "বাস্তুসংস্থান",
    native: "আদি নিবাস",
    habitat: "আবাসস্থল",
    role: "ভূমিকা",
    companions: "সহযোগী গাছ",

    safety: "নিরাপত্তা সতর্কতা",
    poisonous: "বিষাক্ত",
    safe: "নিরাপদ",
    invasive: "আগ্রাসী",
    endangered: "বিপন্ন",
    medicinal: "ঔষধি গুণাগুণ",
    notes: "মন্তব্য",

    health: "স্বাস্থ্যের অবস্থা",
    treatment: "চিকিৎসা",
    prevention: "প্রতিরোধ",
    status_healthy: "সুস্থ গাছ",
    status_diseased: "রোগাক্রান্ত",
    status_pest_infested: "পোকা আক্রান্ত",
    status_nutrient_deficient: "পুষ্টির অভাব",
    status_unknown: "অজানা",

    story: "পরিচিতি",
    similar: "অনুরূপ প্রজাতি",
    difference: "পার্থক্য",
};
