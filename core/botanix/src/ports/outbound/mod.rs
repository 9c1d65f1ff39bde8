//! Outbound ポート定義

pub mod history_store;
pub mod image_normalizer;
pub mod vision;

pub use history_store::HistoryStore;
pub use image_normalizer::ImageNormalizer;
pub use vision::VisionModel;
