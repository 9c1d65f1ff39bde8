//! ドメイン層: 植物識別の型と純粋ロジック

pub mod command;
pub mod extract;
pub mod history;
pub mod image;
pub mod language;
pub mod record;

pub use command::BotanixCommand;
pub use history::{HistoryCollection, HISTORY_CAPACITY};
pub use image::NormalizedImage;
pub use language::{Language, Messages};
pub use record::{HealthStatus, PlantRecord, PlantReport};
