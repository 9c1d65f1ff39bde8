//! ビジョンモデル adapter（common の LLM ドライバに委譲）
//!
//! プロバイダの生成は呼び出し時に行う。API キー未設定の場合、
//! 画像正規化後・ネットワークアクセス前に MissingCredential で落ちる。

use crate::adapter::schema::report_schema;
use crate::domain::{Language, NormalizedImage};
use crate::ports::outbound::VisionModel;
use common::error::Error;
use common::llm::factory::create_driver;
use common::llm::provider::VisionRequest;
use common::llm::resolver::ResolvedProfile;

/// 画像に添えるユーザープロンプト
const USER_PROMPT: &str = "Identify this plant. Tell me its health benefits for the body.";

const LANG_INSTRUCTION_EN: &str = "Output in English. Use simple, beginner-friendly language.";
const LANG_INSTRUCTION_BN: &str = "Output ALL textual descriptions, names, and values in BENGALI language (Bangla script). Keep the language SIMPLE and PRACTICAL for a general user. Do not use complex botanical jargon. For Scientific names, provide the Latin name.";

/// システム指示（言語指定込み）を組み立てる
fn system_instruction(language: Language) -> String {
    let lang_instruction = match language {
        Language::En => LANG_INSTRUCTION_EN,
        Language::Bn => LANG_INSTRUCTION_BN,
    };
    format!(
        "You are a helpful gardening assistant.\n\
         {}\n\
         Identify the plant in the image.\n\
         Provide practical care advice that a normal person can understand.\n\
         Explicitly state the health benefits for the human body in the 'benefits' field.\n\
         List similar looking species and how to distinguish them in the 'similarSpecies' field.\n\
         Include details about nectar in the morphology section if applicable (e.g., attracts bees, sticky).\n\
         Strictly follow the JSON schema.",
        lang_instruction
    )
}

/// 解決済みプロファイル経由でモデルを呼ぶ VisionModel 実装
pub struct LlmVision {
    profile: ResolvedProfile,
}

impl LlmVision {
    pub fn new(profile: ResolvedProfile) -> Self {
        Self { profile }
    }
}

impl VisionModel for LlmVision {
    fn analyze(&self, image: &NormalizedImage, language: Language) -> Result<String, Error> {
        let driver = create_driver(&self.profile)?;
        let instruction = system_instruction(language);
        let schema = report_schema();
        let request = VisionRequest {
            system_instruction: &instruction,
            prompt: USER_PROMPT,
            image_mime: image.mime(),
            image_base64: image.base64(),
            response_schema: Some(&schema),
        };
        driver.analyze(&request)
    }
}
