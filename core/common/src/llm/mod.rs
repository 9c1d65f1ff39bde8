//! ビジョンモデルのドライバーとプロバイダの実装
//!
//! 画像付きリクエストを 1 回送って生の応答テキストを受け取るまでを担当する。
//! 応答テキストの構造化（JSON 抽出・正規化）はアプリ側のドメインで行う。

pub mod config;
pub mod driver;
pub mod factory;
pub mod fixture;
pub mod gemini;
pub mod provider;
pub mod resolver;

pub use config::{ProfilesConfig, ProviderKind, ProviderProfile};
pub use driver::VisionDriver;
pub use factory::{create_driver, create_provider, AnyProvider};
pub use provider::{VisionProvider, VisionRequest};
pub use resolver::{list_profiles, resolve_profile, ResolvedProfile};
