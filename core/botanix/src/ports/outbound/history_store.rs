//! 識別履歴の永続化 Outbound ポート

use crate::domain::{HistoryCollection, PlantRecord};
use common::error::Error;

/// 履歴の読み書きを行う能力
///
/// load は読み取り失敗（ファイル欠落・破損）を空コレクションとして扱う。
/// 履歴は便利機能であり、読めないことを識別の失敗にしない。
pub trait HistoryStore: Send + Sync {
    fn load(&self) -> HistoryCollection;
    /// レコードを挿入して永続化し、更新後のコレクションを返す
    fn save(&self, record: &PlantRecord) -> Result<HistoryCollection, Error>;
}
