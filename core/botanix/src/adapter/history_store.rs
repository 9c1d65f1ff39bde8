//! 履歴永続化 adapter（ホーム直下の JSON ファイル）
//!
//! 履歴は 1 ファイルの JSON 配列（新しい順）。読み取りは寛容で、
//! ファイルが無い・壊れている場合は空のコレクションから始める。

use crate::domain::{HistoryCollection, PlantRecord};
use crate::ports::outbound::HistoryStore;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::PathBuf;
use std::sync::Arc;

/// 履歴ファイル名（ホームディレクトリ直下）
pub const HISTORY_FILE_NAME: &str = "botanix_history_v3.json";

pub struct FileHistoryStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileHistoryStore {
    /// # Arguments
    /// * `fs` - ファイルシステム実装
    /// * `home_dir` - botanix のホームディレクトリ
    pub fn new(fs: Arc<dyn FileSystem>, home_dir: PathBuf) -> Self {
        let path = home_dir.join(HISTORY_FILE_NAME);
        Self { fs, path }
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> HistoryCollection {
        if !self.fs.exists(&self.path) {
            return HistoryCollection::new();
        }
        match self.fs.read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => HistoryCollection::new(),
        }
    }

    fn save(&self, record: &PlantRecord) -> Result<HistoryCollection, Error> {
        let mut history = self.load();
        history.insert(record.clone());
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(&history)
            .map_err(|e| Error::json(format!("Failed to serialize history: {}", e)))?;
        self.fs.write(&self.path, &contents)?;
        Ok(history)
    }
}
