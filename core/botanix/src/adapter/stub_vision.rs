//! テスト用のビジョンモデルスタブ

use crate::domain::{Language, NormalizedImage};
use crate::ports::outbound::VisionModel;
use common::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// 固定応答を返す VisionModel スタブ
///
/// 呼び出し回数と直近の言語を記録する。reply を Err にすると失敗を再現できる。
pub struct StubVision {
    reply: Result<String, Error>,
    calls: AtomicUsize,
    last_language: Mutex<Option<Language>>,
}

impl StubVision {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            calls: AtomicUsize::new(0),
            last_language: Mutex::new(None),
        }
    }

    pub fn failing(error: Error) -> Self {
        Self {
            reply: Err(error),
            calls: AtomicUsize::new(0),
            last_language: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_language(&self) -> Option<Language> {
        *self.last_language.lock().unwrap()
    }
}

impl VisionModel for StubVision {
    fn analyze(&self, _image: &NormalizedImage, language: Language) -> Result<String, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_language.lock().unwrap() = Some(language);
        self.reply.clone()
    }
}
