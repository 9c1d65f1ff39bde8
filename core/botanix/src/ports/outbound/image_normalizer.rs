//! 画像正規化の Outbound ポート
//!
//! 入力バイト列をモデル送信用の正準形（JPEG / 長辺上限 / base64）へ変換する。
//! 具体的なデコード・リサイズ・エンコードは adapter 層に置く。

use crate::domain::NormalizedImage;
use common::error::Error;

/// 画像を正準形へ正規化する能力
pub trait ImageNormalizer: Send + Sync {
    /// 入力が空・未知フォーマットなら UnsupportedMedia、
    /// フォーマット判定後のデコード失敗なら Decode を返す。
    fn normalize(&self, data: &[u8]) -> Result<NormalizedImage, Error>;
}
