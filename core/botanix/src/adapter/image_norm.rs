//! 画像正規化 adapter（image クレート実装）
//!
//! PNG / JPEG / WebP 等の入力をデコードし、長辺が上限を超える場合は
//! Lanczos3 で縮小、常に JPEG (quality 90) へ再エンコードして
//! base64 にする。寸法が変わらなくても再エンコードは行う。

use crate::domain::image::target_dimensions;
use crate::domain::NormalizedImage;
use crate::ports::outbound::ImageNormalizer;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use common::error::Error;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

/// JPEG 出力の品質
const JPEG_QUALITY: u8 = 90;

/// 正規化後の MIME タイプ
const OUTPUT_MIME: &str = "image/jpeg";

pub struct JpegImageNormalizer;

impl JpegImageNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JpegImageNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageNormalizer for JpegImageNormalizer {
    fn normalize(&self, data: &[u8]) -> Result<NormalizedImage, Error> {
        if data.is_empty() {
            return Err(Error::unsupported_media("Image data is empty"));
        }
        // フォーマット判定とデコードは別のエラー種別に分ける
        image::guess_format(data)
            .map_err(|_| Error::unsupported_media("Unrecognized image format"))?;
        let decoded = image::load_from_memory(data)
            .map_err(|e| Error::decode(format!("Failed to decode image: {}", e)))?;

        let (width, height) = (decoded.width(), decoded.height());
        let (target_w, target_h) = target_dimensions(width, height);
        let resized = if (target_w, target_h) != (width, height) {
            decoded.resize_exact(target_w, target_h, FilterType::Lanczos3)
        } else {
            decoded
        };

        let rgb = resized.to_rgb8();
        let mut buf = Vec::new();
        JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY)
            .encode_image(&rgb)
            .map_err(|e| Error::decode(format!("Failed to encode JPEG: {}", e)))?;

        Ok(NormalizedImage::new(
            OUTPUT_MIME,
            STANDARD.encode(&buf),
            target_w,
            target_h,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::MAX_EDGE;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([40, 120, 40]),
        ));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    fn decode_base64_jpeg(normalized: &NormalizedImage) -> DynamicImage {
        let bytes = STANDARD.decode(normalized.base64()).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    fn test_oversized_image_is_downscaled() {
        let normalized = JpegImageNormalizer::new().normalize(&png_bytes(2400, 1200)).unwrap();
        assert_eq!(normalized.width(), MAX_EDGE);
        assert_eq!(normalized.height(), 960);
        let back = decode_base64_jpeg(&normalized);
        assert_eq!(back.width(), MAX_EDGE);
        assert_eq!(back.height(), 960);
    }

    #[test]
    fn test_small_image_keeps_dimensions_but_reencodes() {
        let normalized = JpegImageNormalizer::new().normalize(&png_bytes(64, 48)).unwrap();
        assert_eq!(normalized.width(), 64);
        assert_eq!(normalized.height(), 48);
        // PNG 入力でも出力は常に JPEG
        assert_eq!(normalized.mime(), "image/jpeg");
        decode_base64_jpeg(&normalized);
    }

    #[test]
    fn test_data_uri_has_jpeg_mime() {
        let normalized = JpegImageNormalizer::new().normalize(&png_bytes(8, 8)).unwrap();
        assert!(normalized.data_uri().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_empty_input_is_unsupported_media() {
        let err = JpegImageNormalizer::new().normalize(&[]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMedia(_)));
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_unknown_format_is_unsupported_media() {
        let err = JpegImageNormalizer::new()
            .normalize(b"this is not an image at all")
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedMedia(_)));
    }

    #[test]
    fn test_truncated_png_is_decode_error() {
        // マジックナンバーは通るが本体が壊れている
        let mut bytes = png_bytes(32, 32);
        bytes.truncate(40);
        let err = JpegImageNormalizer::new().normalize(&bytes).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
