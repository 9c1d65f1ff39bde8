//! レポートの responseSchema 定義
//!
//! Gemini の generationConfig.responseSchema に渡す構造化出力スキーマ。
//! 型名は REST API の大文字表記（OBJECT / STRING / ...）を使う。

use serde_json::{json, Value};

/// 植物識別レポートのスキーマ
pub fn report_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "scientificName": { "type": "STRING", "description": "Scientific Latin name" },
            "commonNames": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of common names in the requested language"
            },
            "confidence": {
                "type": "NUMBER",
                "description": "Confidence score between 0 and 100"
            },
            "description": { "type": "STRING", "description": "A simple, easy-to-understand description of the plant." },
            "benefits": {
                "type": "STRING",
                "description": "Specifically explain how this plant helps the human body (health benefits like digestion, skin, immunity). If it has no health benefits, mention environmental benefits."
            },
            "reasoning": { "type": "STRING", "description": "Identification reasoning" },
            "taxonomy": {
                "type": "OBJECT",
                "properties": {
                    "genus": { "type": "STRING" },
                    "family": { "type": "STRING" },
                    "order": { "type": "STRING" }
                }
            },
            "morphology": {
                "type": "OBJECT",
                "properties": {
                    "leaves": { "type": "STRING" },
                    "flowers": { "type": "STRING" },
                    "fruits": { "type": "STRING" },
                    "stems": { "type": "STRING" },
                    "roots": { "type": "STRING" },
                    "nectar": { "type": "STRING" }
                }
            },
            "care": {
                "type": "OBJECT",
                "properties": {
                    "light": { "type": "STRING", "description": "Simple advice (e.g., 'Keep in shade')." },
                    "water": { "type": "STRING", "description": "Practical advice (e.g., 'Water when dry')." },
                    "soil": { "type": "STRING" },
                    "humidity": { "type": "STRING" },
                    "temperature": { "type": "STRING" },
                    "fertilizer": { "type": "STRING" },
                    "propagation": { "type": "STRING" },
                    "pruning": { "type": "STRING" }
                }
            },
            "ecology": {
                "type": "OBJECT",
                "properties": {
                    "nativeRegion": { "type": "STRING" },
                    "habitat": { "type": "STRING" },
                    "role": { "type": "STRING" },
                    "companions": { "type": "ARRAY", "items": { "type": "STRING" } }
                }
            },
            "safety": {
                "type": "OBJECT",
                "properties": {
                    "isPoisonous": { "type": "BOOLEAN" },
                    "poisonDetails": { "type": "STRING" },
                    "isInvasive": { "type": "BOOLEAN" },
                    "isEndangered": { "type": "BOOLEAN" },
                    "isMedicinal": { "type": "BOOLEAN" },
                    "medicinalUses": { "type": "STRING" },
                    "notes": { "type": "STRING" }
                }
            },
            "diagnostics": {
                "type": "OBJECT",
                "properties": {
                    "status": {
                        "type": "STRING",
                        "enum": ["Healthy", "Diseased", "Pest Infested", "Nutrient Deficient", "Unknown"]
                    },
                    "details": { "type": "STRING" },
                    "treatment": { "type": "STRING" },
                    "prevention": { "type": "STRING" }
                }
            },
            "folklore": {
                "type": "OBJECT",
                "properties": {
                    "origin": { "type": "STRING", "description": "Etymology or origin of name" },
                    "stories": { "type": "STRING", "description": "Cultural significance or history" }
                }
            },
            "similarSpecies": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "difference": { "type": "STRING" }
                    }
                }
            }
        },
        "required": ["scientificName", "commonNames", "confidence", "description", "benefits", "care", "safety", "diagnostics"]
    })
}
