//! 識別履歴のコレクション
//!
//! 新しい順に並ぶレコードの列。同一 id は 1 件のみ保持し、
//! 上限を超えた分は古い側から落とす。

use crate::domain::record::PlantRecord;
use serde::{Deserialize, Serialize};

/// 保持する最大件数
pub const HISTORY_CAPACITY: usize = 50;

/// 履歴コレクション。永続化レイアウトは素の JSON 配列
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryCollection(Vec<PlantRecord>);

impl HistoryCollection {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// レコードを先頭に挿入する
    ///
    /// 既存の同一 id のレコードは除去してから挿入する（先頭へ移動と同義）。
    /// 挿入後に上限件数へ切り詰める。
    pub fn insert(&mut self, record: PlantRecord) {
        self.0.retain(|r| r.id != record.id);
        self.0.insert(0, record);
        self.0.truncate(HISTORY_CAPACITY);
    }

    /// 新しい順のレコード一覧
    pub fn records(&self) -> &[PlantRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
