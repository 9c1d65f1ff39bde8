//! 正規化済み画像
//!
//! ユーザー入力の画像を縮小・再エンコードした自己完結表現。
//! 生成後は不変で、リクエスト構築と表示・永続化の両方から参照される。

/// 長辺の上限（ピクセル）。これを超える画像は縦横比を保って縮小する。
pub const MAX_EDGE: u32 = 1920;

/// 正規化済み画像（MIME タグ + base64 ペイロード + ピクセル寸法）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedImage {
    mime: String,
    base64: String,
    width: u32,
    height: u32,
}

impl NormalizedImage {
    pub fn new(mime: impl Into<String>, base64: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            mime: mime.into(),
            base64: base64.into(),
            width,
            height,
        }
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// base64 ペイロード（`data:` プレフィックスなし）
    pub fn base64(&self) -> &str {
        &self.base64
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 表示・永続化用の data URI 形式
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

/// 縮小後の寸法を計算する（縦横比維持・拡大はしない）
pub fn target_dimensions(width: u32, height: u32) -> (u32, u32) {
    if width > height {
        if width > MAX_EDGE {
            let scaled = (height as f64 * MAX_EDGE as f64 / width as f64).round() as u32;
            return (MAX_EDGE, scaled);
        }
    } else if height > MAX_EDGE {
        let scaled = (width as f64 * MAX_EDGE as f64 / height as f64).round() as u32;
        return (scaled, MAX_EDGE);
    }
    (width, height)
}
