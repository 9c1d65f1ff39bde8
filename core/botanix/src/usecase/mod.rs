//! ユースケース層
//!
//! ポート経由でのみ外界に触れる。識別パイプライン本体は identify に。

pub mod history;
pub mod identify;
pub mod profiles;

pub use history::HistoryUseCase;
pub use identify::IdentifyUseCase;
pub use profiles::ProfilesUseCase;
