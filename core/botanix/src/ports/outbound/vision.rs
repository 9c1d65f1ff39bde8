//! ビジョンモデル呼び出しの Outbound ポート
//!
//! usecase は HTTP や API キーの詳細に触れず、この trait 経由で
//! 正規化済み画像の識別を依頼する。

use crate::domain::{Language, NormalizedImage};
use common::error::Error;

/// 正規化済み画像を識別にかけ、モデルの生テキスト応答を返す能力
pub trait VisionModel: Send + Sync {
    fn analyze(&self, image: &NormalizedImage, language: Language) -> Result<String, Error>;
}
