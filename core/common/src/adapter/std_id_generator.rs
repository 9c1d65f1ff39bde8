//! 標準レコードID生成実装（Clock 駆動）

use crate::ports::outbound::{Clock, IdGenerator};
use crate::record_id;
use std::sync::Arc;

/// Clock の現在時刻から base62 レコードIDを生成する実装
pub struct StdIdGenerator {
    clock: Arc<dyn Clock>,
}

impl StdIdGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl IdGenerator for StdIdGenerator {
    fn next_id(&self) -> String {
        record_id::generate(self.clock.now_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StdClock;

    #[test]
    fn test_generates_unique_ids() {
        let gen = StdIdGenerator::new(Arc::new(StdClock));
        let a = gen.next_id();
        let b = gen.next_id();
        assert_eq!(a.len(), 10);
        assert_ne!(a, b);
    }
}
