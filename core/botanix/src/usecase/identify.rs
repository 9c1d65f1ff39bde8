//! 識別ユースケース（パイプライン本体）
//!
//! 正規化 → モデル呼び出し → 応答パース → 正準レコード組み立て。
//! 永続化と描画は行わない（Runner 側の責務）。
//! 同時に動かせる識別は 1 件のみで、二重実行は Busy で即座に拒否する。

use crate::domain::extract::parse_report;
use crate::domain::{Language, PlantRecord};
use crate::ports::outbound::{ImageNormalizer, VisionModel};
use common::error::Error;
use common::ports::outbound::{Clock, IdGenerator};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct IdentifyUseCase {
    normalizer: Arc<dyn ImageNormalizer>,
    vision: Arc<dyn VisionModel>,
    id_generator: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    in_flight: AtomicBool,
}

impl IdentifyUseCase {
    pub fn new(
        normalizer: Arc<dyn ImageNormalizer>,
        vision: Arc<dyn VisionModel>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            normalizer,
            vision,
            id_generator,
            clock,
            in_flight: AtomicBool::new(false),
        }
    }

    /// 画像バイト列を識別して正準レコードを返す
    ///
    /// id / timestamp / imageUrl / language はモデル応答の値に
    /// 関わらずこちらの生成値で決まる。
    pub fn identify(&self, image_data: &[u8], language: Language) -> Result<PlantRecord, Error> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(Error::busy("An identification is already in progress"));
        }
        let result = self.identify_inner(image_data, language);
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    fn identify_inner(&self, image_data: &[u8], language: Language) -> Result<PlantRecord, Error> {
        let image = self.normalizer.normalize(image_data)?;
        let reply = self.vision.analyze(&image, language)?;
        let report = parse_report(&reply)?;
        Ok(PlantRecord {
            id: self.id_generator.next_id(),
            report,
            timestamp: self.clock.now_ms(),
            image_url: image.data_uri(),
            language,
        })
    }
}
