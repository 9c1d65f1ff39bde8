//! Outbound ポートの具体実装（adapter 層）

mod history_store;
mod image_norm;
mod render;
mod schema;
#[cfg(test)]
mod stub_vision;
mod vision;

pub use history_store::FileHistoryStore;
pub use image_norm::JpegImageNormalizer;
pub use render::{render_history, render_record};
pub use schema::report_schema;
#[cfg(test)]
pub use stub_vision::StubVision;
pub use vision::LlmVision;
