//! 履歴ユースケース

use crate::domain::{HistoryCollection, PlantRecord};
use crate::ports::outbound::HistoryStore;
use common::error::Error;
use std::sync::Arc;

pub struct HistoryUseCase {
    store: Arc<dyn HistoryStore>,
}

impl HistoryUseCase {
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self { store }
    }

    /// 保存済み履歴（新しい順）。読めない場合は空
    pub fn list(&self) -> HistoryCollection {
        self.store.load()
    }

    /// レコードを履歴へ挿入して永続化する
    pub fn save(&self, record: &PlantRecord) -> Result<HistoryCollection, Error> {
        self.store.save(record)
    }
}
